use std::{io, path::PathBuf};

use rusqlite::ErrorCode;
use thiserror::Error;

#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("Constraint violation: {0}")]
    Integrity(String),
    #[error("SQL dbms error: {0}")]
    Sql(String),
    #[error("Unable to open DBMS in file {path}: {reason}")]
    OpenDbms { path: String, reason: String },
    #[error("Directory creation failed")]
    CreateDir(#[from] io::Error),
    #[error("Mutex locking error")]
    LockPoisoned,
    #[error("Unable to load the application configuration file {path:?}")]
    ApplicationConfig { path: PathBuf, source: io::Error },
    #[error("Unable to parse contents of {path}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Unable to create configuration file {path}")]
    ConfigFileCreation { path: PathBuf },
}

impl DeliveryError {
    /// Errors raised deliberately by the repositories, as opposed to failures reported by the
    /// store or the file system.
    #[must_use]
    pub fn is_business_error(&self) -> bool {
        matches!(
            self,
            DeliveryError::Validation(_) | DeliveryError::NotFound { .. }
        )
    }
}

impl From<rusqlite::Error> for DeliveryError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(error, _) if error.code == ErrorCode::ConstraintViolation => {
                DeliveryError::Integrity(format!("{err}"))
            }
            _ => DeliveryError::Sql(format!("Sqlite error {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_failures_are_integrity_errors() {
        let err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE),
            Some("UNIQUE constraint failed: vehicles.registration".to_string()),
        );
        let converted = DeliveryError::from(err);
        assert!(matches!(converted, DeliveryError::Integrity(_)));
        assert!(!converted.is_business_error());
    }

    #[test]
    fn other_failures_are_sql_errors() {
        let converted = DeliveryError::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(converted, DeliveryError::Sql(_)));
    }

    #[test]
    fn not_found_is_a_business_error() {
        let err = DeliveryError::NotFound {
            entity: "Vehicle",
            id: 42,
        };
        assert!(err.is_business_error());
        assert_eq!(err.to_string(), "Vehicle with id 42 not found");
    }
}
