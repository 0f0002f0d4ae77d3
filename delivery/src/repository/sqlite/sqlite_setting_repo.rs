use crate::error::DeliveryError;
use crate::repository::setting_repository::SettingRepository;
use crate::repository::sqlite::schema::system_setting;
use crate::repository::SharedSqliteConnection;
use crate::types::SystemSetting;
use log::{debug, info};
use rusqlite::{params, OptionalExtension};

pub struct SqliteSettingRepository {
    connection: SharedSqliteConnection,
}

impl SqliteSettingRepository {
    pub(crate) fn new(connection: SharedSqliteConnection) -> Self {
        Self { connection }
    }
}

impl SettingRepository for SqliteSettingRepository {
    fn get(&self, key: &str, default: &str) -> Result<String, DeliveryError> {
        Ok(self
            .find(key)?
            .and_then(|setting| setting.value)
            .unwrap_or_else(|| default.to_string()))
    }

    fn find(&self, key: &str) -> Result<Option<SystemSetting>, DeliveryError> {
        debug!("Looking up system setting {key}");
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeliveryError::LockPoisoned)?;
        let setting = conn
            .query_row(
                "SELECT key, value, description FROM system_settings WHERE key = ?1",
                params![key],
                system_setting::from_row,
            )
            .optional()?;
        Ok(setting)
    }

    fn set(
        &self,
        key: &str,
        value: &str,
        description: Option<&str>,
    ) -> Result<SystemSetting, DeliveryError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeliveryError::LockPoisoned)?;
        let setting = conn.query_row(
            r"INSERT INTO system_settings (key, value, description)
              VALUES (?1, ?2, ?3)
              ON CONFLICT(key) DO UPDATE SET value = excluded.value
              RETURNING key, value, description",
            params![key, value, description],
            system_setting::from_row,
        )?;
        info!("System setting {key} set");
        Ok(setting)
    }

    fn list(&self) -> Result<Vec<SystemSetting>, DeliveryError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| DeliveryError::LockPoisoned)?;
        let mut stmt =
            conn.prepare("SELECT key, value, description FROM system_settings ORDER BY key")?;
        let settings = stmt
            .query_map([], system_setting::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::sqlite::tests::test_database_manager;

    #[test]
    fn absent_key_yields_the_default() -> Result<(), DeliveryError> {
        let repo = test_database_manager()?.create_setting_repository();
        assert_eq!(repo.get("depot", "North")?, "North");
        assert!(repo.find("depot")?.is_none());
        Ok(())
    }

    #[test]
    fn set_inserts_then_updates_in_place() -> Result<(), DeliveryError> {
        let repo = test_database_manager()?.create_setting_repository();

        let inserted = repo.set("depot", "North", Some("Home depot"))?;
        assert_eq!(inserted.value.as_deref(), Some("North"));
        assert_eq!(inserted.description.as_deref(), Some("Home depot"));

        let updated = repo.set("depot", "South", None)?;
        assert_eq!(updated.value.as_deref(), Some("South"));
        assert_eq!(updated.description.as_deref(), Some("Home depot"));

        let updated = repo.set("depot", "East", Some("Relocated depot"))?;
        assert_eq!(updated.value.as_deref(), Some("East"));
        // Only the value of an existing setting is ever changed
        assert_eq!(updated.description.as_deref(), Some("Home depot"));

        assert_eq!(repo.get("depot", "North")?, "East");
        Ok(())
    }

    #[test]
    fn null_value_yields_the_default() -> Result<(), DeliveryError> {
        let db_manager = test_database_manager()?;
        {
            let connection = db_manager.get_connection();
            let conn = connection
                .lock()
                .map_err(|_| DeliveryError::LockPoisoned)?;
            conn.execute(
                "INSERT INTO system_settings (key, value, description) VALUES ('depot', NULL, NULL)",
                [],
            )?;
        }
        let repo = db_manager.create_setting_repository();

        assert_eq!(repo.find("depot")?.and_then(|s| s.value), None);
        assert_eq!(repo.get("depot", "North")?, "North");
        Ok(())
    }

    #[test]
    fn repeated_set_keeps_a_single_record() -> Result<(), DeliveryError> {
        let repo = test_database_manager()?.create_setting_repository();
        for _ in 0..3 {
            repo.set("vans", "2", Some("Number of vans"))?;
        }
        repo.set("depot", "North", None)?;

        let settings = repo.list()?;
        assert_eq!(settings.len(), 2);
        assert_eq!(settings[0].key, "depot");
        assert_eq!(settings[1].key, "vans");
        assert_eq!(settings[1].value.as_deref(), Some("2"));
        Ok(())
    }
}
