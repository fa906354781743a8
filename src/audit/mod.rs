//! Audit logging for the expense tracker
//!
//! Records every add attempt, successful or not, in an append-only audit log.
//!
//! - `AuditEntry`: one attempt with timestamp, outcome, submitted record, and
//!   error message if any.
//! - `AuditLogger`: writes entries to the audit log file as line-delimited
//!   JSON (JSONL) and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, Outcome};
pub use logger::AuditLogger;
