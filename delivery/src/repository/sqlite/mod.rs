use crate::error::DeliveryError;
use log::debug;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub mod schema;
pub mod sqlite_entity_repo;
pub mod sqlite_setting_repo;

pub use schema::{create_schema, drop_schema};

/// Opens, or creates, the Sqlite database in the given file.
/// The parent directories are created if they do not exist.
pub(crate) fn create_connection(dbms_path: &Path) -> Result<Connection, DeliveryError> {
    if let Some(parent) = dbms_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating directory {}", parent.to_string_lossy());
            fs::create_dir_all(parent)?;
        }
    }
    let connection = Connection::open(dbms_path).map_err(|e| DeliveryError::OpenDbms {
        path: dbms_path.to_string_lossy().to_string(),
        reason: e.to_string(),
    })?;
    Ok(connection)
}

/// Sqlite does not enforce foreign keys unless told so, for every new connection.
pub(crate) fn enable_foreign_keys(connection: &Connection) -> Result<(), DeliveryError> {
    connection.execute_batch("PRAGMA foreign_keys = ON;")?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests;
