use crate::repository::sqlite::sqlite_entity_repo::SqliteEntity;
use crate::types::{NewVehicle, Vehicle, VehicleChanges};
use rusqlite::types::Value;
use rusqlite::{Connection, Row};

const CREATE_VEHICLE_TABLE_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS vehicles (
        id INTEGER PRIMARY KEY NOT NULL,
        registration VARCHAR(32) NOT NULL UNIQUE,
        active BOOLEAN NOT NULL DEFAULT 1
    );
";

pub fn create_vehicle_table(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute(CREATE_VEHICLE_TABLE_SQL, [])?;
    Ok(())
}

impl SqliteEntity for Vehicle {
    const TABLE: &'static str = "vehicles";
    const COLUMNS: &'static [&'static str] = &["registration", "active"];
    const ACTIVE_COLUMN: Option<&'static str> = Some("active");

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Vehicle {
            id: row.get(0)?,
            registration: row.get(1)?,
            active: row.get(2)?,
        })
    }

    fn insert_values(new: &NewVehicle) -> Vec<Value> {
        vec![new.registration.clone().into(), true.into()]
    }

    fn changed_values(changes: &VehicleChanges) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if let Some(registration) = &changes.registration {
            values.push(("registration", registration.clone().into()));
        }
        if let Some(active) = changes.active {
            values.push(("active", active.into()));
        }
        values
    }
}
