//! Runtime configuration read from environment variables.
//!
//! A `.env` file in the working directory (or any parent) is read as well.
//! Variables already set in the process environment take precedence over it.
//!
//! | Variable        | Default      |
//! |-----------------|--------------|
//! | `HOST`          | `0.0.0.0`    |
//! | `PORT`          | `8000`       |
//! | `DATABASE_PATH` | `catalog.db` |

use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_PATH: &str = "catalog.db";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("could not read .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
}

impl Config {
    /// Reads the process environment, falling back to `.env` for unset variables.
    pub fn load() -> Result<Self, ConfigError> {
        let file_vars = match dotenvy::dotenv_iter() {
            Ok(iter) => read_env_file(iter)?,
            Err(e) if e.not_found() => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Self::layered(|key| std::env::var(key).ok(), &file_vars)
    }

    fn layered<F>(env: F, file_vars: &HashMap<String, String>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(|key| env(key).or_else(|| file_vars.get(key).cloned()))
    }

    /// Builds the configuration from any key lookup; empty values count as unset.
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_path: get("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH)),
        })
    }
}

fn read_env_file<R: Read>(
    iter: dotenvy::Iter<R>,
) -> Result<HashMap<String, String>, ConfigError> {
    let vars = iter.collect::<Result<HashMap<_, _>, _>>()?;
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.database_path, PathBuf::from("catalog.db"));
    }

    #[test]
    fn values_are_read_from_the_environment() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9001"),
            ("DATABASE_PATH", "/tmp/catalog.sqlite"),
        ])
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9001);
        assert_eq!(config.database_path, PathBuf::from("/tmp/catalog.sqlite"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("PORT", "  "), ("HOST", "")]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "eighty"));
    }

    #[test]
    fn env_file_fills_unset_variables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        let contents = "PORT=9100\nHOST=127.0.0.1\n# comment\nDATABASE_PATH=data/catalog.db\n";
        std::fs::write(&path, contents).unwrap();
        let file_vars = read_env_file(dotenvy::from_path_iter(&path).unwrap()).unwrap();

        let config = Config::layered(|_| None, &file_vars).unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.database_path, PathBuf::from("data/catalog.db"));

        let overridden = Config::layered(
            |key| (key == "PORT").then(|| "9200".to_string()),
            &file_vars,
        )
        .unwrap();
        assert_eq!(overridden.port, 9200);
        assert_eq!(overridden.host, "127.0.0.1");
    }
}
