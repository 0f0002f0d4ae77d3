//! Table definitions, and the mapping between tables and entity types.
use crate::error::DeliveryError;
use log::info;
use rusqlite::Connection;

pub mod delivery;
pub mod driver;
pub mod parcel_type;
pub mod patient;
pub mod street;
pub mod system_setting;
pub mod vehicle;

/// All tables, in the order they are created. Referenced tables come first.
pub const TABLES: &[&str] = &[
    "patients",
    "streets",
    "vehicles",
    "drivers",
    "parcel_types",
    "deliveries",
    "system_settings",
];

/// Creates the entire database schema by running schema creation functions for all entities.
pub fn create_schema(connection: &Connection) -> Result<(), DeliveryError> {
    patient::create_patient_table(connection)?;
    street::create_street_table(connection)?;
    vehicle::create_vehicle_table(connection)?;
    driver::create_driver_table(connection)?;
    parcel_type::create_parcel_type_table(connection)?;
    delivery::create_delivery_table(connection)?;
    system_setting::create_system_setting_table(connection)?;
    info!("Database schema created");
    Ok(())
}

/// Drops every table, dependent tables first.
pub fn drop_schema(connection: &Connection) -> Result<(), DeliveryError> {
    for table in TABLES.iter().rev() {
        connection.execute(&format!("DROP TABLE IF EXISTS {table}"), [])?;
    }
    info!("Database schema dropped");
    Ok(())
}
