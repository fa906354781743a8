//! User settings for the expense tracker
//!
//! Manages user preferences: currency symbol, expense file location, and
//! chart sizing.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::reports::DEFAULT_HISTOGRAM_BINS;

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in reports and charts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Expense file location; the data directory is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expenses_file: Option<PathBuf>,

    /// Number of buckets in the amount histogram
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,

    /// Width of chart bars, in characters
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_histogram_bins() -> usize {
    DEFAULT_HISTOGRAM_BINS
}

fn default_chart_width() -> usize {
    40
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            expenses_file: None,
            histogram_bins: default_histogram_bins(),
            chart_width: default_chart_width(),
        }
    }
}

impl Settings {
    /// Load settings from disk, writing the defaults on first run
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            tracing::info!(path = %settings_path.display(), "Wrote default settings");
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the expense file: explicit override, then settings, then the
    /// default location under the data directory
    pub fn resolve_expenses_file(&self, paths: &ExpensePaths, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.expenses_file.clone())
            .unwrap_or_else(|| paths.expenses_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.histogram_bins, 10);
        assert!(settings.expenses_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".to_string();
        settings.chart_width = 20;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.chart_width, 20);
    }

    #[test]
    fn test_first_load_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().join("fresh"));

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.chart_width, 40);
        assert!(paths.settings_file().exists());
        assert!(paths.data_dir().is_dir());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.histogram_bins, 10);
        assert_eq!(settings.chart_width, 40);
    }

    #[test]
    fn test_invalid_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }

    #[test]
    fn test_resolve_expenses_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        assert_eq!(settings.resolve_expenses_file(&paths, None), paths.expenses_file());

        settings.expenses_file = Some(PathBuf::from("/tmp/from-settings.csv"));
        assert_eq!(
            settings.resolve_expenses_file(&paths, None),
            PathBuf::from("/tmp/from-settings.csv")
        );
        assert_eq!(
            settings.resolve_expenses_file(&paths, Some(PathBuf::from("explicit.csv"))),
            PathBuf::from("explicit.csv")
        );
    }
}
