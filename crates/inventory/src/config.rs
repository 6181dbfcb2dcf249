//! Store configuration.

use std::path::PathBuf;

/// Environment variable overriding the inventory table path.
pub const TABLE_PATH_ENV: &str = "FRESHMART_INVENTORY_CSV";

/// Environment variable overriding the report export path.
pub const REPORT_PATH_ENV: &str = "FRESHMART_REPORT_CSV";

pub const DEFAULT_TABLE_PATH: &str = "inventory.csv";
pub const DEFAULT_REPORT_PATH: &str = "inventory_report.csv";

/// Where the store keeps its table and writes its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub table_path: PathBuf,
    pub report_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            table_path: PathBuf::from(DEFAULT_TABLE_PATH),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

impl StoreConfig {
    /// Defaults, overridden by `FRESHMART_INVENTORY_CSV` / `FRESHMART_REPORT_CSV`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`StoreConfig::from_env`], reading variables through `lookup`.
    ///
    /// Unset and blank values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty()).map(PathBuf::from);

        let defaults = Self::default();
        Self {
            table_path: read(TABLE_PATH_ENV).unwrap_or(defaults.table_path),
            report_path: read(REPORT_PATH_ENV).unwrap_or(defaults.report_path),
        }
    }

    pub fn with_table_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.table_path = path.into();
        self
    }

    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let config = StoreConfig::from_lookup(|_| None);
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.table_path, PathBuf::from("inventory.csv"));
        assert_eq!(config.report_path, PathBuf::from("inventory_report.csv"));
    }

    #[test]
    fn variables_override_defaults() {
        let vars: HashMap<&str, &str> = [
            (TABLE_PATH_ENV, "/data/stock.csv"),
            (REPORT_PATH_ENV, "/data/report.csv"),
        ]
        .into_iter()
        .collect();

        let config = StoreConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.table_path, PathBuf::from("/data/stock.csv"));
        assert_eq!(config.report_path, PathBuf::from("/data/report.csv"));
    }

    #[test]
    fn blank_variable_is_ignored() {
        let config = StoreConfig::from_lookup(|k| (k == TABLE_PATH_ENV).then(|| "  ".to_string()));
        assert_eq!(config.table_path, PathBuf::from(DEFAULT_TABLE_PATH));
    }

    #[test]
    fn builders_override() {
        let config = StoreConfig::default()
            .with_table_path("a.csv")
            .with_report_path("b.csv");
        assert_eq!(config.table_path, PathBuf::from("a.csv"));
        assert_eq!(config.report_path, PathBuf::from("b.csv"));
    }
}
