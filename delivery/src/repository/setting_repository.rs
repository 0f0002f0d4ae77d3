use crate::error::DeliveryError;
use crate::types::SystemSetting;

/// Key/value store for application wide settings.
pub trait SettingRepository: Send + Sync {
    /// Retrieves the value of a setting, or `default` if the key is unknown or has no value.
    ///
    /// A NULL value can only come from rows written outside this repository, `set` always
    /// stores one. It reads as `default` rather than as an empty string.
    ///
    /// # Errors
    /// Only infrastructure failures are reported, a missing key is not an error.
    fn get(&self, key: &str, default: &str) -> Result<String, DeliveryError>;

    /// Retrieves the complete setting record for the given key.
    ///
    /// # Errors
    /// Returns a `DeliveryError` if the query fails.
    fn find(&self, key: &str) -> Result<Option<SystemSetting>, DeliveryError>;

    /// Inserts the setting, or updates the value of an existing one.
    ///
    /// `description` is only stored for a new key, the description of an existing setting
    /// is never changed.
    ///
    /// # Errors
    /// Returns a `DeliveryError` if the statement fails.
    fn set(
        &self,
        key: &str,
        value: &str,
        description: Option<&str>,
    ) -> Result<SystemSetting, DeliveryError>;

    /// All settings, ordered by key.
    ///
    /// # Errors
    /// Returns a `DeliveryError` if the query fails.
    fn list(&self) -> Result<Vec<SystemSetting>, DeliveryError>;
}
