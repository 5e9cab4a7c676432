//! User settings for walletbook
//!
//! Storage backend choice, the default user partition and money display
//! preferences. Stored as `config.json` in the base directory.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::WalletPaths;
use crate::error::LedgerError;
use crate::models::{Money, UserId};
use crate::storage::write_json_atomic;

/// Which persistence adapter backs the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One JSON document per entity with a batch journal
    Document,
    /// One JSON blob per user
    #[default]
    Blob,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => write!(f, "document"),
            Self::Blob => write!(f, "blob"),
        }
    }
}

/// User settings for walletbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub backend: Backend,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Digit grouping character used when displaying amounts
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: char,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// User partition used when neither `--user` nor `WALLETBOOK_USER` is given
    #[serde(default = "default_user")]
    pub default_user: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Rp".to_string()
}

fn default_thousands_separator() -> char {
    '.'
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_user() -> String {
    "local".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            backend: Backend::default(),
            currency_symbol: default_currency(),
            thousands_separator: default_thousands_separator(),
            date_format: default_date_format(),
            default_user: default_user(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &WalletPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not saved yet; the caller decides when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WalletPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
            .map_err(|e| LedgerError::Config(format!("Failed to write settings file: {}", e)))
    }

    fn validate(&self) -> Result<(), LedgerError> {
        UserId::new(self.default_user.as_str())
            .map(|_| ())
            .map_err(|e| LedgerError::Config(format!("Invalid default_user: {}", e)))
    }

    /// Resolve the user partition, preferring an explicit choice
    pub fn resolve_user(&self, explicit: Option<&str>) -> Result<UserId, LedgerError> {
        let raw = explicit.unwrap_or(&self.default_user);
        UserId::new(raw).map_err(|e| LedgerError::Config(format!("Invalid user id: {}", e)))
    }

    /// Format an amount with the configured symbol and separator
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol, self.thousands_separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.backend, Backend::Blob);
        assert_eq!(settings.currency_symbol, "Rp");
        assert_eq!(settings.default_user, "local");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.backend = Backend::Document;
        settings.currency_symbol = "$".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.backend, Backend::Document);
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"backend": "document"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.backend, Backend::Document);
        assert_eq!(loaded.thousands_separator, '.');
    }

    #[test]
    fn test_resolve_user() {
        let settings = Settings::default();
        assert_eq!(settings.resolve_user(None).unwrap().as_str(), "local");
        assert_eq!(settings.resolve_user(Some("bob")).unwrap().as_str(), "bob");
        assert!(settings.resolve_user(Some("../etc")).is_err());
    }

    #[test]
    fn test_format_money() {
        let settings = Settings::default();
        assert_eq!(settings.format_money(Money::new(1_500_000)), "Rp 1.500.000");
    }
}
