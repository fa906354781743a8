//! Audit entry data structures
//!
//! Defines the structure of audit log entries: when an add was attempted,
//! how it ended, and what was submitted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::ExpenseError;
use crate::models::{Expense, DATE_FORMAT};

/// How an add attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Expense was appended and written to disk
    Added,
    /// Input failed validation; nothing changed
    Rejected,
    /// Expense was appended in memory but the file write failed
    Unsaved,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Added => write!(f, "ADDED"),
            Outcome::Rejected => write!(f, "REJECTED"),
            Outcome::Unsaved => write!(f, "UNSAVED"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the attempt occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// How the attempt ended
    pub outcome: Outcome,

    /// The submitted record as strings
    ///
    /// The normalized expense when one was built, otherwise the raw input.
    pub record: serde_json::Value,

    /// Error message for rejected or unsaved attempts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuditEntry {
    /// Entry for an expense that was added and saved
    pub fn added(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            outcome: Outcome::Added,
            record: record_of(expense),
            error: None,
        }
    }

    /// Entry for an expense kept in memory after a failed save
    pub fn unsaved(expense: &Expense, error: &ExpenseError) -> Self {
        Self {
            timestamp: Utc::now(),
            outcome: Outcome::Unsaved,
            record: record_of(expense),
            error: Some(error.to_string()),
        }
    }

    /// Entry for input that failed validation
    pub fn rejected(
        date_text: &str,
        amount_text: &str,
        category: &str,
        description: &str,
        error: &ExpenseError,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            outcome: Outcome::Rejected,
            record: json!({
                "date": date_text,
                "amount": amount_text,
                "category": category,
                "description": description,
            }),
            error: Some(error.to_string()),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let field = |name: &str| {
            self.record
                .get(name)
                .and_then(serde_json::Value::as_str)
                .unwrap_or("")
        };

        let mut output = format!(
            "[{}] {} {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.outcome,
            field("date"),
            field("amount"),
            field("category")
        );

        if let Some(error) = &self.error {
            output.push_str(&format!("\n  Error: {}", error));
        }

        output
    }
}

fn record_of(expense: &Expense) -> serde_json::Value {
    json!({
        "date": expense.date().format(DATE_FORMAT).to_string(),
        "amount": expense.amount().to_string(),
        "category": expense.category(),
        "description": expense.description(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AmountIssue;

    fn sample_expense() -> Expense {
        Expense::new("2024-01-05", "100", "Food", "lunch").unwrap()
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Added.to_string(), "ADDED");
        assert_eq!(Outcome::Rejected.to_string(), "REJECTED");
        assert_eq!(Outcome::Unsaved.to_string(), "UNSAVED");
    }

    #[test]
    fn test_added_entry() {
        let entry = AuditEntry::added(&sample_expense());

        assert_eq!(entry.outcome, Outcome::Added);
        assert_eq!(entry.record["category"], "Food");
        assert_eq!(entry.record["amount"], "100.00");
        assert_eq!(entry.record["date"], "2024-01-05");
        assert!(entry.error.is_none());
    }

    #[test]
    fn test_rejected_entry_keeps_raw_input() {
        let error = ExpenseError::InvalidAmount("-5".into(), AmountIssue::NotPositive);
        let entry = AuditEntry::rejected("2024-01-05", "-5", "Food", "x", &error);

        assert_eq!(entry.outcome, Outcome::Rejected);
        assert_eq!(entry.record["amount"], "-5");
        assert!(entry.error.unwrap().contains("-5"));
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::added(&sample_expense());

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"outcome\":\"added\""));
        assert!(!json.contains("\"error\""));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.outcome, Outcome::Added);
    }

    #[test]
    fn test_human_readable_format() {
        let error = ExpenseError::PersistenceFailed("disk full".into());
        let entry = AuditEntry::unsaved(&sample_expense(), &error);

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UNSAVED"));
        assert!(formatted.contains("2024-01-05"));
        assert!(formatted.contains("Food"));
        assert!(formatted.contains("disk full"));
    }
}
