use crate::error::DeliveryError;
use crate::repository::setting_repository::SettingRepository;
use crate::types::SystemSetting;

pub enum SettingCommand {
    Get { key: String, default: String },
    Set {
        key: String,
        value: String,
        description: Option<String>,
    },
    List,
}

#[derive(Debug, PartialEq)]
pub enum SettingOutcome {
    Value(String),
    Stored(SystemSetting),
    Listed(Vec<SystemSetting>),
}

impl SettingCommand {
    /// Executes the command against the given repository.
    ///
    /// # Errors
    /// Only infrastructure errors are reported, an unknown key yields the default value.
    pub fn execute(self, repository: &dyn SettingRepository) -> Result<SettingOutcome, DeliveryError> {
        match self {
            SettingCommand::Get { key, default } => {
                Ok(SettingOutcome::Value(repository.get(&key, &default)?))
            }
            SettingCommand::Set {
                key,
                value,
                description,
            } => Ok(SettingOutcome::Stored(repository.set(
                &key,
                &value,
                description.as_deref(),
            )?)),
            SettingCommand::List => Ok(SettingOutcome::Listed(repository.list()?)),
        }
    }
}
