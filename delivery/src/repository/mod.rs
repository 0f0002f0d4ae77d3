use rusqlite::Connection;
use std::sync::{Arc, Mutex};

// Repository traits, one per kind of record kept in the store.
pub mod entity_repository;
pub mod setting_repository;

// Database-related utilities and managers.
pub mod database_manager;
pub mod sqlite;

/// A thread-safe, shared connection to an ``SQLite`` database,
/// used across multiple repository layers.
pub type SharedSqliteConnection = Arc<Mutex<Connection>>;
