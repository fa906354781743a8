//! Business logic layer for the expense tracker
//!
//! The query functions take a read-only view of the expenses owned by
//! [`crate::storage::ExpenseStore`]; `ExpenseService` is the one path that
//! appends to it.

pub mod expense;
pub mod query;

pub use expense::ExpenseService;
pub use query::{category_totals, filter, summarize, ExpenseFilter, Summary, Totals};
