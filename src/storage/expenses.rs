//! Expense store backed by a CSV file
//!
//! The store owns the in-memory collection of expenses. It loads and cleans
//! the file once at construction, and rewrites the whole file after every
//! successful append.

use std::path::{Path, PathBuf};

use csv::StringRecord;

use crate::error::ExpenseResult;
use crate::models::expense::parse_stored_date;
use crate::models::{Expense, Money, DATE_FORMAT};

use super::file_io::{read_csv, write_csv_atomic, CsvTable};

/// Column headers of the expense file, in order
pub const HEADERS: [&str; 4] = ["Date", "Amount", "Category", "Description"];

/// Owned, validated collection of expenses persisted to a single file
#[derive(Debug)]
pub struct ExpenseStore {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Open the store at `path`
    ///
    /// An existing file is read and cleaned. A missing file is created
    /// immediately with only the header row.
    pub fn open(path: impl Into<PathBuf>) -> ExpenseResult<Self> {
        let path = path.into();

        let expenses = match read_csv(&path)? {
            Some(table) => {
                let expenses = clean(&table);
                tracing::info!(
                    path = %path.display(),
                    loaded = expenses.len(),
                    "Loaded expenses"
                );
                expenses
            }
            None => {
                tracing::info!(path = %path.display(), "Creating empty expense file");
                Vec::new()
            }
        };

        let store = Self { path, expenses };
        if !store.path.exists() {
            store.save()?;
        }
        Ok(store)
    }

    /// Validate and append an expense, then rewrite the file
    ///
    /// Validation failures leave the store untouched. If the rewrite fails,
    /// the new expense stays in memory and `PersistenceFailed` is returned.
    pub fn add(
        &mut self,
        date_text: &str,
        amount_text: &str,
        category: &str,
        description: &str,
    ) -> ExpenseResult<&Expense> {
        let expense = Expense::new(date_text, amount_text, category, description)?;
        self.push(expense)
    }

    /// Append an already-validated expense, then rewrite the file
    pub fn push(&mut self, expense: Expense) -> ExpenseResult<&Expense> {
        self.expenses.push(expense);

        if let Err(e) = self.save() {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to persist expenses");
            return Err(e);
        }

        let index = self.expenses.len() - 1;
        Ok(&self.expenses[index])
    }

    /// Write the full collection to disk, replacing the previous contents
    pub fn save(&self) -> ExpenseResult<()> {
        let rows = self.expenses.iter().map(|e| {
            [
                e.date().format(DATE_FORMAT).to_string(),
                e.amount().to_string(),
                e.category().to_string(),
                e.description().to_string(),
            ]
        });

        write_csv_atomic(&self.path, &HEADERS, rows)?;
        tracing::debug!(path = %self.path.display(), count = self.expenses.len(), "Saved expenses");
        Ok(())
    }

    /// All expenses, in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Turn raw file rows into expenses, dropping every row that fails to parse
///
/// A row is kept only if its date parses, its amount is a positive number,
/// and its category is non-empty once trimmed. Dropped rows are not an error.
pub fn clean(table: &CsvTable) -> Vec<Expense> {
    let columns = [
        table.column(HEADERS[0]),
        table.column(HEADERS[1]),
        table.column(HEADERS[2]),
        table.column(HEADERS[3]),
    ];

    if columns[..3].iter().any(Option::is_none) {
        tracing::warn!(
            headers = ?table.headers,
            "Expense file is missing required columns; no rows loaded"
        );
        return Vec::new();
    }

    let mut expenses = Vec::with_capacity(table.rows.len());
    for (index, row) in table.rows.iter().enumerate() {
        match clean_row(row, columns) {
            Some(expense) => expenses.push(expense),
            // Header is line 1
            None => tracing::debug!(line = index + 2, row = ?row, "Dropped malformed expense row"),
        }
    }

    let dropped = table.rows.len() - expenses.len() + table.unreadable;
    if dropped > 0 {
        tracing::debug!(dropped, "Dropped rows while cleaning expense file");
    }

    expenses
}

fn clean_row(row: &StringRecord, columns: [Option<usize>; 4]) -> Option<Expense> {
    let cell = |column: Option<usize>| column.and_then(|i| row.get(i)).unwrap_or("");

    let date = parse_stored_date(cell(columns[0]))?;
    let amount = Money::parse(cell(columns[1])).ok()?;
    Expense::from_parts(date, amount, cell(columns[2]), cell(columns[3])).ok()
}
