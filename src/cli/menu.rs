//! Interactive menu
//!
//! A numbered menu loop over the same operations as the subcommands. Input
//! and output are injected so the loop runs against any reader and writer.

use std::io::{BufRead, Write};

use crate::display::{format_expense_table, format_summary};
use crate::error::ExpenseResult;
use crate::reports::report;
use crate::services::{filter, summarize, ExpenseFilter, ExpenseService};

use super::chart::{render_chart, ChartKind};
use super::Session;

const MENU: &str = "\n------------ Smart Expense Tracker-------------\n\
                    1. Add Expense\n\
                    2. View Summary\n\
                    3. Filter Expenses\n\
                    4. Generate Report\n\
                    5. Visualizations\n\
                    6. Exit\n";

const CHART_MENU: &str = "1. Bar Chart\n\
                          2. Line Chart\n\
                          3. Pie Chart\n\
                          4. Histogram\n";

const INVALID_CHOICE: &str = "Invalid choice, try again!";

/// Run the menu until the user picks Exit or input ends
pub fn run_menu<R, W>(session: &mut Session, input: &mut R, output: &mut W) -> ExpenseResult<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", MENU)?;
        let Some(choice) = prompt(input, output, "Enter choice: ")? else {
            break;
        };

        let keep_going = match choice.trim() {
            "1" => add_expense(session, input, output)?,
            "2" => {
                let summary = summarize(session.store.expenses());
                write!(
                    output,
                    "\n--- Summary ---\n{}",
                    format_summary(&summary, &session.settings.currency_symbol)
                )?;
                true
            }
            "3" => filter_expenses(session, input, output)?,
            "4" => {
                writeln!(
                    output,
                    "{}",
                    report(session.store.expenses(), &session.settings.currency_symbol)
                )?;
                true
            }
            "5" => show_chart(session, input, output)?,
            "6" => false,
            _ => {
                writeln!(output, "{}", INVALID_CHOICE)?;
                true
            }
        };

        if !keep_going {
            break;
        }
    }

    output.flush()?;
    Ok(())
}

/// Returns `false` when input ended mid-prompt
fn add_expense<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> ExpenseResult<bool> {
    let mut answers = Vec::with_capacity(4);
    for question in [
        "Enter date (YYYY-MM-DD): ",
        "Enter amount: ",
        "Enter category: ",
        "Enter description: ",
    ] {
        match prompt(input, output, question)? {
            Some(answer) => answers.push(answer),
            None => return Ok(false),
        }
    }

    let result = ExpenseService::new(&mut session.store)
        .with_audit(&session.audit)
        .add(&answers[0], &answers[1], &answers[2], &answers[3]);

    match result {
        Ok(_) => writeln!(output, "Expense added successfully")?,
        Err(e) if e.is_validation() => writeln!(output, "{}", e)?,
        Err(e) => writeln!(output, "Expense kept for this session but not saved: {}", e)?,
    }
    Ok(true)
}

fn filter_expenses<R: BufRead, W: Write>(
    session: &Session,
    input: &mut R,
    output: &mut W,
) -> ExpenseResult<bool> {
    let Some(start) = prompt(input, output, "Start Date (YYYY-MM-DD or blank): ")? else {
        return Ok(false);
    };
    let Some(end) = prompt(input, output, "End Date (YYYY-MM-DD or blank): ")? else {
        return Ok(false);
    };
    let Some(categories) = prompt(input, output, "Categories comma-separated (blank for all): ")?
    else {
        return Ok(false);
    };

    let start = optional(&start);
    let end = optional(&end);
    let mut criteria = ExpenseFilter::new().with_date_text(start, end);
    if let Some(categories) = optional(&categories) {
        criteria = criteria.with_categories(categories.split(','));
    }

    let matches = filter(session.store.expenses(), &criteria);
    write!(output, "{}", format_expense_table(&matches))?;
    Ok(true)
}

fn show_chart<R: BufRead, W: Write>(
    session: &Session,
    input: &mut R,
    output: &mut W,
) -> ExpenseResult<bool> {
    write!(output, "{}", CHART_MENU)?;
    let Some(choice) = prompt(input, output, "Choose: ")? else {
        return Ok(false);
    };

    let kind = match choice.trim() {
        "1" => ChartKind::Bar,
        "2" => ChartKind::Line,
        "3" => ChartKind::Pie,
        "4" => ChartKind::Histogram,
        _ => {
            writeln!(output, "{}", INVALID_CHOICE)?;
            return Ok(true);
        }
    };

    write!(
        output,
        "{}",
        render_chart(kind, session.store.expenses(), &session.settings, None)
    )?;
    Ok(true)
}

/// Print a prompt and read one line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> ExpenseResult<Option<String>> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let answer = line.trim_end_matches(['\n', '\r']).to_string();
    Ok(Some(answer))
}

/// Blank answers, or the word "blank", mean no constraint
fn optional(answer: &str) -> Option<&str> {
    let answer = answer.trim();
    if answer.is_empty() || answer.eq_ignore_ascii_case("blank") {
        None
    } else {
        Some(answer)
    }
}
