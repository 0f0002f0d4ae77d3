use crate::error::DeliveryError;
use anyhow::Result;
use directories::ProjectDirs;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Name of the Sqlite file holding all delivery records
pub const DATABASE_FILE_NAME: &str = "delivery_system.sqlite";

/// Application configuration struct
/// Holds the location of the local data store
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct AppConfiguration {
    /// This will ensure that the database file name is created, even if the Toml file
    /// does not have an `application_data` section
    #[serde(default = "default_application_data")]
    pub application_data: ApplicationData,
}

/// Holds the configuration for the `application_data` section of the Toml file
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct ApplicationData {
    /// The path to the Sqlite database
    pub database: String,
}

impl Default for ApplicationData {
    fn default() -> Self {
        ApplicationData {
            database: database_file().to_string_lossy().to_string(),
        }
    }
}

/// Filename holding the application configuration parameters
#[must_use]
pub fn configuration_file() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from("delivery_system.toml"),
        |dirs| dirs.preference_dir().join("config.toml"),
    )
}

/// Filename of the Sqlite DBMS holding the delivery records
#[must_use]
pub fn database_file() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from(DATABASE_FILE_NAME),
        |dirs| dirs.data_dir().join(DATABASE_FILE_NAME),
    )
}

/// Loads the configuration file, falling back to the defaults if there is no such file.
#[allow(clippy::missing_errors_doc)]
pub fn load() -> Result<AppConfiguration, DeliveryError> {
    let config_path = configuration_file();
    if !config_path.exists() {
        debug!(
            "No configuration file {}, using defaults",
            config_path.to_string_lossy()
        );
        return Ok(AppConfiguration::default());
    }
    read(&config_path)
}

#[allow(clippy::missing_errors_doc)]
pub fn save(cfg: &AppConfiguration) -> Result<()> {
    create_configuration_file(cfg, &configuration_file())
}

#[allow(clippy::missing_errors_doc)]
pub fn remove() -> io::Result<()> {
    fs::remove_file(configuration_file().as_path())
}

#[allow(clippy::missing_errors_doc)]
pub fn application_config_to_string(cfg: &AppConfiguration) -> Result<String> {
    Ok(toml::to_string::<AppConfiguration>(cfg)?)
}

fn default_application_data() -> ApplicationData {
    ApplicationData::default()
}

fn project_dirs() -> Option<ProjectDirs> {
    let dirs = ProjectDirs::from("com", "delivery", "delivery_system");
    if dirs.is_none() {
        warn!("Unable to determine the home directory, using the current directory");
    }
    dirs
}

/// Reads the `Application` configuration struct from the supplied TOML file
fn read(path: &Path) -> Result<AppConfiguration, DeliveryError> {
    let mut file = File::open(path).map_err(|source| DeliveryError::ApplicationConfig {
        path: path.into(),
        source,
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|source| DeliveryError::ApplicationConfig {
            path: path.into(),
            source,
        })?;
    toml::from_str::<AppConfiguration>(&contents).map_err(|source| DeliveryError::TomlParse {
        path: path.into(),
        source,
    })
}

fn create_configuration_file(cfg: &AppConfiguration, path: &Path) -> Result<()> {
    if let Some(directory) = path.parent() {
        if !directory.as_os_str().is_empty() && !directory.try_exists()? {
            fs::create_dir_all(directory).map_err(|_| DeliveryError::ConfigFileCreation {
                path: path.into(),
            })?;
        }
    }

    let mut file = File::create(path)?;
    let toml = application_config_to_string(cfg)?;
    file.write_all(toml.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_parsing() {
        let toml_str = r#"
        [application_data]
        database = "deliveries.sqlite"
        "#;

        let app_config: AppConfiguration = toml::from_str(toml_str).unwrap();
        assert_eq!(app_config.application_data.database, "deliveries.sqlite");
    }

    /// Verifies that the database path is populated with a reasonable default even if the
    /// section does not exist in the configuration file on disk
    #[test]
    fn test_toml_parsing_with_defaults_generated() {
        let app_config: AppConfiguration = toml::from_str("").unwrap();
        assert_eq!(
            app_config.application_data.database,
            database_file().to_string_lossy()
        );
        assert!(app_config
            .application_data
            .database
            .ends_with(DATABASE_FILE_NAME));
    }

    #[test]
    fn test_write_and_read_toml_file() -> Result<()> {
        let tmp_config_file = std::env::temp_dir()
            .join(format!("delivery-config-test-{}", std::process::id()))
            .join("config.toml");

        let cfg = AppConfiguration {
            application_data: ApplicationData {
                database: "deliveries.sqlite".to_string(),
            },
        };

        create_configuration_file(&cfg, &tmp_config_file)?;
        let result = read(&tmp_config_file)?;
        assert_eq!(cfg, result);

        fs::remove_file(&tmp_config_file)?;
        if let Some(dir) = tmp_config_file.parent() {
            fs::remove_dir(dir)?;
        }
        Ok(())
    }

    #[test]
    fn garbage_in_the_config_file_is_reported() -> Result<()> {
        let tmp_config_file = std::env::temp_dir()
            .join(format!("delivery-config-garbage-{}.toml", std::process::id()));
        fs::write(&tmp_config_file, "[application_data\ndatabase = ")?;

        let result = read(&tmp_config_file);
        assert!(matches!(result, Err(DeliveryError::TomlParse { .. })));

        fs::remove_file(&tmp_config_file)?;
        Ok(())
    }
}
