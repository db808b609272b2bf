//! Environment configuration
//!
//! All settings come from the process environment at startup. The data
//! directory and database name are required; the server refuses to start
//! without them.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the document store
    pub data_dir: PathBuf,
    /// Database name; the store file is `<data_dir>/<db_name>.json`
    pub db_name: String,
    /// HTTP listen port
    pub port: u16,
    /// Reject empty or whitespace-only titles
    pub reject_empty_titles: bool,
}

impl Config {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = PathBuf::from(required("TODO_DATA_DIR")?);
        let db_name = required("TODO_DB_NAME")?;

        let port = match std::env::var("TODO_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidVar("TODO_PORT", raw))?,
            Err(_) => 8000,
        };

        let reject_empty_titles = std::env::var("TODO_REJECT_EMPTY_TITLES")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            data_dir,
            db_name,
            port,
            reject_empty_titles,
        })
    }

    /// Path to the database file
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.db_name))
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_path_joins_dir_and_name() {
        let config = Config {
            data_dir: PathBuf::from("/var/lib/todo"),
            db_name: "tasks".to_string(),
            port: 8000,
            reject_empty_titles: false,
        };
        assert_eq!(config.db_path(), PathBuf::from("/var/lib/todo/tasks.json"));
    }
}
