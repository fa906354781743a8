//! CLI command for the audit history

use crate::audit::AuditLogger;
use crate::error::ExpenseResult;

/// Handle the `history` command: show the most recent add attempts
pub fn handle_history_command(audit: &AuditLogger, count: usize) -> ExpenseResult<()> {
    print!("{}", format_history(audit, count)?);
    Ok(())
}

fn format_history(audit: &AuditLogger, count: usize) -> ExpenseResult<String> {
    let entries = audit.read_recent(count)?;
    if entries.is_empty() {
        return Ok("No audit entries.\n".to_string());
    }

    let mut output = String::new();
    for entry in &entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditEntry;
    use crate::error::ExpenseError;
    use crate::models::Expense;
    use tempfile::TempDir;

    #[test]
    fn test_format_history() {
        let temp = TempDir::new().unwrap();
        let audit = AuditLogger::new(temp.path().join("audit.log"));
        assert_eq!(format_history(&audit, 5).unwrap(), "No audit entries.\n");

        let expense = Expense::new("2024-01-05", "100", "Food", "").unwrap();
        audit.log(&AuditEntry::added(&expense)).unwrap();
        let error = ExpenseError::EmptyCategory;
        audit
            .log(&AuditEntry::rejected("2024-01-06", "5", " ", "", &error))
            .unwrap();

        let output = format_history(&audit, 5).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("ADDED 2024-01-05 100.00 Food"));
        assert!(lines[1].contains("REJECTED 2024-01-06 5"));
        assert_eq!(lines[2], "  Error: Category must not be empty");

        let latest = format_history(&audit, 1).unwrap();
        assert!(latest.starts_with('[') && latest.contains("REJECTED"));
        assert!(!latest.contains("ADDED"));
    }
}
