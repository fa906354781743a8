//! File I/O utilities with atomic writes
//!
//! Provides safe CSV file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{ExpenseError, ExpenseResult};

/// Raw contents of a CSV file: the header row and every readable data row
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: StringRecord,
    pub rows: Vec<StringRecord>,
    /// Rows the reader could not decode (bad UTF-8 and similar)
    pub unreadable: usize,
}

impl CsvTable {
    /// Position of a named column in the header row
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }
}

/// Read a CSV file, returning `None` if the file doesn't exist
///
/// Rows with a different number of cells than the header are kept as-is.
/// Rows that cannot be decoded are counted and skipped; only I/O failures
/// are errors.
pub fn read_csv<P: AsRef<Path>>(path: P) -> ExpenseResult<Option<CsvTable>> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) if e.is_io_error() => return Err(e.into()),
        Err(_) => StringRecord::new(),
    };

    let mut table = CsvTable {
        headers,
        ..CsvTable::default()
    };

    for result in reader.records() {
        match result {
            Ok(record) => table.rows.push(record),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(_) => table.unreadable += 1,
        }
    }

    Ok(Some(table))
}

/// Write a CSV file atomically (write to temp, then rename)
///
/// The header row is always written, so an empty table still produces a
/// valid file. Any failure is reported as `PersistenceFailed`.
pub fn write_csv_atomic<P, R, F>(path: P, headers: &[&str], rows: R) -> ExpenseResult<()>
where
    P: AsRef<Path>,
    R: IntoIterator<Item = [F; 4]>,
    F: AsRef<[u8]>,
{
    let path = path.as_ref();
    let fail = |what: &str, e: &dyn std::fmt::Display| {
        ExpenseError::PersistenceFailed(format!("{} {}: {}", what, path.display(), e))
    };

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| fail("Failed to create directory for", &e))?;
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("csv.tmp");

    let result = (|| {
        let file = File::create(&temp_path).map_err(|e| fail("Failed to create temp file for", &e))?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer
            .write_record(headers)
            .map_err(|e| fail("Failed to write header to", &e))?;
        for row in rows {
            writer
                .write_record(row)
                .map_err(|e| fail("Failed to write row to", &e))?;
        }

        let mut file = writer
            .into_inner()
            .map_err(|e| fail("Failed to flush", &e))?;
        file.flush().map_err(|e| fail("Failed to flush", &e))?;

        // Sync to disk before rename
        file.sync_all().map_err(|e| fail("Failed to sync", &e))?;

        fs::rename(&temp_path, path).map_err(|e| fail("Failed to replace", &e))
    })();

    if result.is_err() {
        // Try to clean up temp file if anything failed
        let _ = fs::remove_file(&temp_path);
    }

    result
}
