use crate::repository::sqlite::sqlite_entity_repo::SqliteEntity;
use crate::types::{NewPatient, Patient, PatientChanges};
use rusqlite::types::Value;
use rusqlite::{Connection, Row};

const CREATE_PATIENT_TABLE_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS patients (
        patient_id INTEGER PRIMARY KEY NOT NULL,
        house_number VARCHAR(32),
        street_name VARCHAR(256),
        town VARCHAR(256),
        exemption_category VARCHAR(64)
    );
";

pub fn create_patient_table(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute(CREATE_PATIENT_TABLE_SQL, [])?;
    Ok(())
}

impl SqliteEntity for Patient {
    const TABLE: &'static str = "patients";
    const ID_COLUMN: &'static str = "patient_id";
    const COLUMNS: &'static [&'static str] =
        &["house_number", "street_name", "town", "exemption_category"];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Patient {
            id: row.get(0)?,
            house_number: row.get(1)?,
            street_name: row.get(2)?,
            town: row.get(3)?,
            exemption_category: row.get(4)?,
        })
    }

    fn insert_values(new: &NewPatient) -> Vec<Value> {
        vec![
            new.house_number.clone().into(),
            new.street_name.clone().into(),
            new.town.clone().into(),
            new.exemption_category.clone().into(),
        ]
    }

    fn changed_values(changes: &PatientChanges) -> Vec<(&'static str, Value)> {
        [
            ("house_number", &changes.house_number),
            ("street_name", &changes.street_name),
            ("town", &changes.town),
            ("exemption_category", &changes.exemption_category),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.clone().map(|v| (column, Value::Text(v))))
        .collect()
    }
}
