use crate::error::DeliveryError;
use crate::repository::entity_repository::{Entity, EntityRepository};
use crate::repository::SharedSqliteConnection;
use log::{debug, info};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::marker::PhantomData;
use std::sync::MutexGuard;

/// Maps an [`Entity`] onto its Sqlite table.
///
/// The primary key is always selected first, followed by [`SqliteEntity::COLUMNS`] in
/// declaration order. `from_row` and `insert_values` must agree with that order.
pub trait SqliteEntity: Entity {
    const TABLE: &'static str;
    const ID_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str];
    /// Boolean column filtering the records returned by `list_active`
    const ACTIVE_COLUMN: Option<&'static str> = None;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    /// One value per entry in `COLUMNS`, with defaults filled in
    fn insert_values(new: &Self::New) -> Vec<Value>;

    /// The columns to modify, only for the fields that are set
    fn changed_values(changes: &Self::Changes) -> Vec<(&'static str, Value)>;
}

/// The one repository implementation shared by all the plain record types.
pub struct SqliteEntityRepository<E> {
    connection: SharedSqliteConnection,
    entity: PhantomData<fn() -> E>,
}

impl<E: SqliteEntity> SqliteEntityRepository<E> {
    pub(crate) fn new(connection: SharedSqliteConnection) -> Self {
        Self {
            connection,
            entity: PhantomData,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, DeliveryError> {
        self.connection
            .lock()
            .map_err(|_| DeliveryError::LockPoisoned)
    }

    fn select_sql() -> String {
        format!(
            "SELECT {}, {} FROM {}",
            E::ID_COLUMN,
            E::COLUMNS.join(", "),
            E::TABLE
        )
    }

    fn find_with(conn: &Connection, id: i64) -> Result<Option<E>, DeliveryError> {
        let sql = format!("{} WHERE {} = ?1", Self::select_sql(), E::ID_COLUMN);
        Ok(conn.query_row(&sql, params![id], E::from_row).optional()?)
    }

    fn not_found(id: i64) -> DeliveryError {
        DeliveryError::NotFound {
            entity: E::NAME,
            id,
        }
    }
}

impl<E: SqliteEntity> EntityRepository<E> for SqliteEntityRepository<E> {
    fn list_active(&self) -> Result<Vec<E>, DeliveryError> {
        let filter = E::ACTIVE_COLUMN
            .map(|active| format!(" WHERE {active} = 1"))
            .unwrap_or_default();
        let sql = format!("{}{filter} ORDER BY {}", Self::select_sql(), E::ID_COLUMN);
        debug!("{sql}");

        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql)?;
        let records = stmt
            .query_map([], E::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    fn find(&self, id: i64) -> Result<Option<E>, DeliveryError> {
        let conn = self.lock()?;
        Self::find_with(&conn, id)
    }

    fn add(&self, new: E::New) -> Result<E, DeliveryError> {
        E::validate_new(&new)?;

        let columns = E::COLUMNS.join(", ");
        let placeholders = (1..=E::COLUMNS.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({columns}) VALUES ({placeholders}) RETURNING {}, {columns}",
            E::TABLE,
            E::ID_COLUMN
        );
        debug!("{sql}");

        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let record = tx.query_row(&sql, params_from_iter(E::insert_values(&new)), E::from_row)?;
        tx.commit()?;

        info!("Added {} with id {}", E::NAME, record.id());
        Ok(record)
    }

    fn update(&self, id: i64, changes: E::Changes) -> Result<E, DeliveryError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let Some(current) = Self::find_with(&tx, id)? else {
            return Err(Self::not_found(id));
        };

        E::validate_changes(&changes)?;
        let assignments = E::changed_values(&changes);
        if assignments.is_empty() {
            debug!("Nothing to update for {} {id}", E::NAME);
            return Ok(current);
        }

        let set_clause = assignments
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{column} = ?{}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {set_clause} WHERE {} = ?{}",
            E::TABLE,
            E::ID_COLUMN,
            assignments.len() + 1
        );
        debug!("{sql}");

        let mut values: Vec<Value> = assignments.into_iter().map(|(_, value)| value).collect();
        values.push(Value::Integer(id));
        tx.execute(&sql, params_from_iter(values))?;

        let updated = Self::find_with(&tx, id)?.ok_or_else(|| Self::not_found(id))?;
        tx.commit()?;

        info!("Updated {} with id {id}", E::NAME);
        Ok(updated)
    }

    fn delete(&self, id: i64) -> Result<(), DeliveryError> {
        let conn = self.lock()?;
        let rows_affected = conn.execute(
            &format!("DELETE FROM {} WHERE {} = ?1", E::TABLE, E::ID_COLUMN),
            params![id],
        )?;

        if rows_affected == 0 {
            return Err(Self::not_found(id));
        }

        info!("Deleted {} with id {id}", E::NAME);
        Ok(())
    }
}
