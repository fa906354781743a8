//! CLI commands for reports
//!
//! Provides the `summary` and `report` commands.

use crate::display::format_summary;
use crate::error::ExpenseResult;
use crate::reports::report;
use crate::services::summarize;

use super::Session;

/// Handle the `summary` command
pub fn handle_summary_command(session: &Session) -> ExpenseResult<()> {
    let summary = summarize(session.store.expenses());
    print!(
        "{}",
        format_summary(&summary, &session.settings.currency_symbol)
    );
    Ok(())
}

/// Handle the `report` command
pub fn handle_report_command(session: &Session) -> ExpenseResult<()> {
    println!(
        "{}",
        report(session.store.expenses(), &session.settings.currency_symbol)
    );
    Ok(())
}
