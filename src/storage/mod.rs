//! Storage layer for the expense tracker
//!
//! Provides CSV file storage with atomic writes, load-time cleaning, and
//! automatic directory creation.

pub mod expenses;
pub mod file_io;

pub use expenses::{clean, ExpenseStore, HEADERS};
pub use file_io::{read_csv, write_csv_atomic, CsvTable};
