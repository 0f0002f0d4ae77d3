use crate::repository::sqlite::sqlite_entity_repo::SqliteEntity;
use crate::types::{NewStreet, Street, StreetChanges};
use rusqlite::types::Value;
use rusqlite::{Connection, Row};

const CREATE_STREET_TABLE_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS streets (
        id INTEGER PRIMARY KEY NOT NULL,
        road_name VARCHAR(256) NOT NULL,
        town VARCHAR(256) NOT NULL,
        route_order INTEGER,
        van_3_assignment INTEGER,
        van_4_assignment INTEGER
    );
";

pub fn create_street_table(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute(CREATE_STREET_TABLE_SQL, [])?;
    Ok(())
}

impl SqliteEntity for Street {
    const TABLE: &'static str = "streets";
    const COLUMNS: &'static [&'static str] = &[
        "road_name",
        "town",
        "route_order",
        "van_3_assignment",
        "van_4_assignment",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Street {
            id: row.get(0)?,
            road_name: row.get(1)?,
            town: row.get(2)?,
            route_order: row.get(3)?,
            van_3_assignment: row.get(4)?,
            van_4_assignment: row.get(5)?,
        })
    }

    fn insert_values(new: &NewStreet) -> Vec<Value> {
        vec![
            new.road_name.clone().into(),
            new.town.clone().into(),
            new.route_order.into(),
            new.van_3_assignment.into(),
            new.van_4_assignment.into(),
        ]
    }

    fn changed_values(changes: &StreetChanges) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if let Some(road_name) = &changes.road_name {
            values.push(("road_name", road_name.clone().into()));
        }
        if let Some(town) = &changes.town {
            values.push(("town", town.clone().into()));
        }
        for (column, value) in [
            ("route_order", changes.route_order),
            ("van_3_assignment", changes.van_3_assignment),
            ("van_4_assignment", changes.van_4_assignment),
        ] {
            if let Some(value) = value {
                values.push((column, Value::Integer(value)));
            }
        }
        values
    }
}
