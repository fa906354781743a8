//! Append-only JSONL audit log
//!
//! One JSON object per line. A damaged line only loses that entry: reading
//! skips it with a warning so the rest of the history stays available.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};

use super::entry::AuditEntry;

/// Writes and reads the audit log file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry, creating the file (and its directory) on first use
    pub fn log(&self, entry: &AuditEntry) -> ExpenseResult<()> {
        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let line = serde_json::to_string(entry)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to open audit log: {}", e)))?;

        writeln!(file, "{}", line)?;
        file.flush()?;
        Ok(())
    }

    /// Every readable entry, oldest first
    pub fn read_all(&self) -> ExpenseResult<Vec<AuditEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(ExpenseError::Io(format!("Failed to open audit log: {}", e)));
            }
        };

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<AuditEntry>(&line) {
                Ok(entry) => entries.push(entry),
                Err(e) => tracing::warn!(
                    path = %self.log_path.display(),
                    line = index + 1,
                    error = %e,
                    "Skipping unreadable audit entry"
                ),
            }
        }

        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> ExpenseResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Outcome;
    use crate::models::Expense;
    use tempfile::TempDir;

    fn added_entry(amount: &str) -> AuditEntry {
        let expense = Expense::new("2024-01-05", amount, "Food", "").unwrap();
        AuditEntry::added(&expense)
    }

    #[test]
    fn test_log_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp.path().join("nested").join("audit.log"));

        logger.log(&added_entry("10")).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].outcome, Outcome::Added);
    }

    #[test]
    fn test_read_recent_keeps_order() {
        let temp = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp.path().join("audit.log"));

        for amount in 1..=10 {
            logger.log(&added_entry(&amount.to_string())).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        let amounts: Vec<_> = recent.iter().map(|e| e.record["amount"].clone()).collect();
        assert_eq!(amounts, vec!["8.00", "9.00", "10.00"]);
        assert_eq!(logger.read_recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_missing_log_reads_empty() {
        let temp = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp.path().join("audit.log"));

        assert!(!logger.path().exists());
        assert!(logger.read_all().unwrap().is_empty());
        assert!(logger.read_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_damaged_line_is_skipped() {
        let temp = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp.path().join("audit.log"));

        logger.log(&added_entry("10")).unwrap();
        let mut file = OpenOptions::new().append(true).open(logger.path()).unwrap();
        writeln!(file, "{{\"timestamp\": truncated").unwrap();
        logger.log(&added_entry("20")).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].record["amount"], "20.00");
    }
}
