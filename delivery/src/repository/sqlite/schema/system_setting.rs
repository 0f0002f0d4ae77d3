use crate::types::SystemSetting;
use rusqlite::{Connection, Row};

const CREATE_SYSTEM_SETTING_TABLE_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS system_settings (
        key VARCHAR(128) PRIMARY KEY NOT NULL,
        value TEXT,
        description TEXT
    );
";

pub fn create_system_setting_table(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute(CREATE_SYSTEM_SETTING_TABLE_SQL, [])?;
    Ok(())
}

pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<SystemSetting> {
    Ok(SystemSetting {
        key: row.get(0)?,
        value: row.get(1)?,
        description: row.get(2)?,
    })
}
