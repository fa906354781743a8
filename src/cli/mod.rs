//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod chart;
pub mod expense;
pub mod history;
pub mod menu;
pub mod report;

pub use chart::{handle_chart_command, ChartKind};
pub use expense::{handle_add_command, handle_list_command, AddArgs, ListArgs};
pub use history::handle_history_command;
pub use menu::run_menu;
pub use report::{handle_report_command, handle_summary_command};

use std::path::PathBuf;

use crate::audit::AuditLogger;
use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;
use crate::storage::ExpenseStore;

/// Everything a command needs: the open store, user settings, and audit log
pub struct Session {
    pub store: ExpenseStore,
    pub settings: Settings,
    pub audit: AuditLogger,
}

impl Session {
    /// Open the expense store for this run
    ///
    /// `file` overrides the expense file location from settings.
    pub fn open(paths: &ExpensePaths, settings: Settings, file: Option<PathBuf>) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        let store_path = settings.resolve_expenses_file(paths, file);
        let store = ExpenseStore::open(store_path)?;

        Ok(Self {
            store,
            settings,
            audit: AuditLogger::new(paths.audit_log()),
        })
    }
}
