//! Expense service
//!
//! Adds expenses to the store and records each attempt in the audit log.

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::storage::ExpenseStore;

/// Service for recording new expenses
pub struct ExpenseService<'a> {
    store: &'a mut ExpenseStore,
    audit: Option<&'a AuditLogger>,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a mut ExpenseStore) -> Self {
        Self { store, audit: None }
    }

    /// Record every add attempt in `logger`
    pub fn with_audit(mut self, logger: &'a AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Validate, append, and persist a new expense
    pub fn add(
        &mut self,
        date_text: &str,
        amount_text: &str,
        category: &str,
        description: &str,
    ) -> ExpenseResult<Expense> {
        let result = self
            .store
            .add(date_text, amount_text, category, description)
            .cloned();

        let entry = match &result {
            Ok(expense) => AuditEntry::added(expense),
            Err(e) if e.is_persistence() => match self.store.expenses().last() {
                Some(expense) => AuditEntry::unsaved(expense, e),
                None => AuditEntry::rejected(date_text, amount_text, category, description, e),
            },
            Err(e) => AuditEntry::rejected(date_text, amount_text, category, description, e),
        };
        self.log(&entry);

        result
    }

    pub fn store(&self) -> &ExpenseStore {
        &*self.store
    }

    fn log(&self, entry: &AuditEntry) {
        let Some(logger) = self.audit else {
            return;
        };
        if let Err(e) = logger.log(entry) {
            tracing::warn!(path = %logger.path().display(), error = %e, "Failed to write audit entry");
        }
    }
}
