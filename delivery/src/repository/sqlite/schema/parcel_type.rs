use crate::repository::sqlite::sqlite_entity_repo::SqliteEntity;
use crate::types::{NewParcelType, ParcelType, ParcelTypeChanges};
use rusqlite::types::Value;
use rusqlite::{Connection, Row};

const CREATE_PARCEL_TYPE_TABLE_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS parcel_types (
        id INTEGER PRIMARY KEY NOT NULL,
        code VARCHAR(32) NOT NULL UNIQUE,
        description VARCHAR(1024) NOT NULL,
        requires_signature BOOLEAN NOT NULL DEFAULT 0
    );
";

pub fn create_parcel_type_table(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute(CREATE_PARCEL_TYPE_TABLE_SQL, [])?;
    Ok(())
}

impl SqliteEntity for ParcelType {
    const TABLE: &'static str = "parcel_types";
    const COLUMNS: &'static [&'static str] = &["code", "description", "requires_signature"];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(ParcelType {
            id: row.get(0)?,
            code: row.get(1)?,
            description: row.get(2)?,
            requires_signature: row.get(3)?,
        })
    }

    fn insert_values(new: &NewParcelType) -> Vec<Value> {
        vec![
            new.code.clone().into(),
            new.description.clone().into(),
            new.requires_signature.into(),
        ]
    }

    fn changed_values(changes: &ParcelTypeChanges) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if let Some(code) = &changes.code {
            values.push(("code", code.clone().into()));
        }
        if let Some(description) = &changes.description {
            values.push(("description", description.clone().into()));
        }
        if let Some(requires_signature) = changes.requires_signature {
            values.push(("requires_signature", requires_signature.into()));
        }
        values
    }
}
