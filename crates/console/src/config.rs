//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

use clubhouse_infra::JsonFileStore;
use clubhouse_observability::LogFormat;

pub const DEFAULT_DB_PATH: &str = "clubbers.json";

#[derive(Debug, Parser)]
#[command(name = "clubhouse", version, about = "Create, search and edit club member records")]
pub struct ConsoleArgs {
    /// Member data file (read at startup, overwritten at shutdown).
    #[arg(long, env = "CLUBHOUSE_DB", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Log line encoding (logs go to stderr).
    #[arg(long, env = "CLUBHOUSE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            log_format: LogFormat::default(),
        }
    }

    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.db_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}

impl From<ConsoleArgs> for AppConfig {
    fn from(args: ConsoleArgs) -> Self {
        Self {
            db_path: args.db,
            log_format: args.log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_explicit_flags() {
        let args =
            ConsoleArgs::try_parse_from(["clubhouse", "--db", "/tmp/members.json", "--log-format", "json"])
                .unwrap();
        let config = AppConfig::from(args);
        assert_eq!(config.db_path, PathBuf::from("/tmp/members.json"));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.store().path(), config.db_path.as_path());
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(ConsoleArgs::try_parse_from(["clubhouse", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn default_config_uses_default_path() {
        assert_eq!(AppConfig::default().db_path, PathBuf::from(DEFAULT_DB_PATH));
    }
}
