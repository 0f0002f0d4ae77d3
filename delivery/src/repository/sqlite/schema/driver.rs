use crate::repository::sqlite::sqlite_entity_repo::SqliteEntity;
use crate::types::{Driver, DriverChanges, NewDriver};
use rusqlite::types::Value;
use rusqlite::{Connection, Row};

const CREATE_DRIVER_TABLE_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS drivers (
        id INTEGER PRIMARY KEY NOT NULL,
        name VARCHAR(256) NOT NULL,
        active BOOLEAN NOT NULL DEFAULT 1
    );
";

pub fn create_driver_table(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute(CREATE_DRIVER_TABLE_SQL, [])?;
    Ok(())
}

impl SqliteEntity for Driver {
    const TABLE: &'static str = "drivers";
    const COLUMNS: &'static [&'static str] = &["name", "active"];
    const ACTIVE_COLUMN: Option<&'static str> = Some("active");

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Driver {
            id: row.get(0)?,
            name: row.get(1)?,
            active: row.get(2)?,
        })
    }

    fn insert_values(new: &NewDriver) -> Vec<Value> {
        vec![new.name.clone().into(), true.into()]
    }

    fn changed_values(changes: &DriverChanges) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if let Some(name) = &changes.name {
            values.push(("name", name.clone().into()));
        }
        if let Some(active) = changes.active {
            values.push(("active", active.into()));
        }
        values
    }
}
