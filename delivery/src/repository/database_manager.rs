use crate::error::DeliveryError;
use crate::repository::sqlite;
use crate::repository::sqlite::sqlite_entity_repo::{SqliteEntity, SqliteEntityRepository};
use crate::repository::sqlite::sqlite_setting_repo::SqliteSettingRepository;
use crate::repository::SharedSqliteConnection;
use log::debug;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Represents parameters for initializing the database connection
pub enum DatabaseConfig {
    /// SQLite database with a specific file path
    SqliteOnDisk { path: PathBuf },

    /// SQLite database that runs entirely in memory
    SqliteInMemory,
}

/// Owns the one connection to the store. Constructed once at startup, it hands out
/// repositories sharing that connection.
pub struct DatabaseManager {
    connection: SharedSqliteConnection,
}

impl DatabaseManager {
    /// Creates a new `DatabaseManager` based on the provided configuration.
    ///
    /// The database file, and its directory, are created if they do not exist. Foreign key
    /// enforcement is switched on and the schema is created.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or the schema cannot be created.
    pub fn new(config: &DatabaseConfig) -> Result<Self, DeliveryError> {
        let connection = match config {
            DatabaseConfig::SqliteOnDisk { path } => {
                debug!("Opening database {}", path.to_string_lossy());
                sqlite::create_connection(path)?
            }
            DatabaseConfig::SqliteInMemory => Connection::open_in_memory()?,
        };

        sqlite::enable_foreign_keys(&connection)?;
        sqlite::create_schema(&connection)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Provide access to the shared database connection.
    pub(crate) fn get_connection(&self) -> SharedSqliteConnection {
        self.connection.clone()
    }

    /// Path of the database file, empty for an in-memory database
    ///
    /// # Errors
    /// Returns `DeliveryError::LockPoisoned` if the connection mutex is poisoned.
    pub fn database_path(&self) -> Result<String, DeliveryError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeliveryError::LockPoisoned)?;
        Ok(conn.path().unwrap_or_default().to_string())
    }

    /// Creates any missing tables.
    ///
    /// # Errors
    /// Returns an error if a table cannot be created.
    pub fn create_schema(&self) -> Result<(), DeliveryError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeliveryError::LockPoisoned)?;
        sqlite::create_schema(&conn)
    }

    /// Drops all the tables, and thus all the records, in the store.
    ///
    /// # Errors
    /// Returns an error if a table cannot be dropped.
    pub fn drop_tables(&self) -> Result<(), DeliveryError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeliveryError::LockPoisoned)?;
        sqlite::drop_schema(&conn)
    }

    pub fn create_entity_repository<E: SqliteEntity>(&self) -> SqliteEntityRepository<E> {
        SqliteEntityRepository::new(self.get_connection())
    }

    pub fn create_setting_repository(&self) -> SqliteSettingRepository {
        SqliteSettingRepository::new(self.get_connection())
    }
}
