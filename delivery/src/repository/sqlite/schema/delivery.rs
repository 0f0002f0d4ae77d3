use crate::repository::sqlite::sqlite_entity_repo::SqliteEntity;
use crate::types::{Delivery, DeliveryChanges, NewDelivery};
use rusqlite::types::Value;
use rusqlite::{Connection, Row};

const CREATE_DELIVERY_TABLE_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS deliveries (
        id INTEGER PRIMARY KEY NOT NULL,
        patient_id INTEGER,
        delivery_date DATE,
        van_number INTEGER,
        route_order INTEGER,
        notes TEXT,
        status VARCHAR(64),
        parcel_type_id INTEGER,
        FOREIGN KEY (patient_id) REFERENCES patients(patient_id),
        FOREIGN KEY (parcel_type_id) REFERENCES parcel_types(id)
    );
";

pub fn create_delivery_table(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute(CREATE_DELIVERY_TABLE_SQL, [])?;
    Ok(())
}

impl SqliteEntity for Delivery {
    const TABLE: &'static str = "deliveries";
    const COLUMNS: &'static [&'static str] = &[
        "patient_id",
        "delivery_date",
        "van_number",
        "route_order",
        "notes",
        "status",
        "parcel_type_id",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Delivery {
            id: row.get(0)?,
            patient_id: row.get(1)?,
            delivery_date: row.get(2)?,
            van_number: row.get(3)?,
            route_order: row.get(4)?,
            notes: row.get(5)?,
            status: row.get(6)?,
            parcel_type_id: row.get(7)?,
        })
    }

    fn insert_values(new: &NewDelivery) -> Vec<Value> {
        vec![
            new.patient_id.into(),
            // ISO 8601, which is what the chrono support in rusqlite reads back
            new.delivery_date.map(|date| date.to_string()).into(),
            new.van_number.into(),
            new.route_order.into(),
            new.notes.clone().into(),
            new.status.clone().into(),
            new.parcel_type_id.into(),
        ]
    }

    fn changed_values(changes: &DeliveryChanges) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if let Some(patient_id) = changes.patient_id {
            values.push(("patient_id", Value::Integer(patient_id)));
        }
        if let Some(delivery_date) = changes.delivery_date {
            values.push(("delivery_date", Value::Text(delivery_date.to_string())));
        }
        if let Some(van_number) = changes.van_number {
            values.push(("van_number", Value::Integer(van_number)));
        }
        if let Some(route_order) = changes.route_order {
            values.push(("route_order", Value::Integer(route_order)));
        }
        if let Some(notes) = &changes.notes {
            values.push(("notes", Value::Text(notes.clone())));
        }
        if let Some(status) = &changes.status {
            values.push(("status", Value::Text(status.clone())));
        }
        if let Some(parcel_type_id) = changes.parcel_type_id {
            values.push(("parcel_type_id", Value::Integer(parcel_type_id)));
        }
        values
    }
}
