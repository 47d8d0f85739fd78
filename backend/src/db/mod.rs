//! # Catalog Store
//!
//! SQLite-backed accessors for the two catalog collections. Both tables live in
//! the same database file.
//!
//! ## Sub-modules:
//! - `criteria`: builds the parameterised `WHERE` clause shared by the search queries.
//! - `practitioners`: the `practitioners` table: schema, seed rows and read queries.
//! - `products`: the `products` table, including the per-category aggregate.
//!
//! Stores hold no connection. Every operation opens the database file, runs its
//! statements and drops the connection before returning, so a store value can be
//! cloned freely into request handlers.

mod criteria;
pub mod practitioners;
pub mod products;

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use practitioners::{PractitionerCriteria, PractitionerStore};
pub use products::{ProductCriteria, ProductStore};

/// Failure to reach the database or to execute a statement against it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not open database {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),
}

impl StoreError {
    /// Short description safe to return to clients. Internal detail stays in the logs.
    pub fn cause(&self) -> &'static str {
        match self {
            StoreError::Open { .. } => "database could not be opened",
            StoreError::Query(_) => "query execution failed",
        }
    }
}

/// Connection factory over a single SQLite file.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Database { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn connect(&self) -> Result<Connection, StoreError> {
        Connection::open(&self.path).map_err(|source| StoreError::Open {
            path: self.path.clone(),
            source,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_file_reports_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("missing").join("catalog.db"));

        let err = db.connect().unwrap_err();
        assert!(matches!(err, StoreError::Open { .. }));
        assert_eq!(err.cause(), "database could not be opened");
    }

    #[test]
    fn query_errors_convert_from_rusqlite() {
        let (_dir, db) = testing::temp_database();
        let conn = db.connect().unwrap();

        let err: StoreError = conn
            .execute("SELECT * FROM no_such_table", [])
            .unwrap_err()
            .into();
        assert_eq!(err.cause(), "query execution failed");
    }
}
