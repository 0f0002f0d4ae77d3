use crate::error::DeliveryError;
use config::AppConfiguration;
use log::debug;
use operation::setting::{SettingCommand, SettingOutcome};
use operation::{Command, Outcome};
use repository::database_manager::{DatabaseConfig, DatabaseManager};
use repository::entity_repository::EntityRepository;
use repository::setting_repository::SettingRepository;
use std::path::PathBuf;
use std::sync::Arc;
use types::{Delivery, Driver, ParcelType, Patient, Street, Vehicle};

pub mod config;
pub mod error;
pub mod operation;
pub mod repository;
pub mod types;

/// The store and its repositories, wired together once at startup.
pub struct ApplicationRuntime {
    config: AppConfiguration,
    database_manager: DatabaseManager,
    vehicle_repository: Arc<dyn EntityRepository<Vehicle>>,
    driver_repository: Arc<dyn EntityRepository<Driver>>,
    parcel_type_repository: Arc<dyn EntityRepository<ParcelType>>,
    patient_repository: Arc<dyn EntityRepository<Patient>>,
    street_repository: Arc<dyn EntityRepository<Street>>,
    delivery_repository: Arc<dyn EntityRepository<Delivery>>,
    setting_repository: Arc<dyn SettingRepository>,
}

pub enum Operation {
    Vehicle(Command<Vehicle>),
    Driver(Command<Driver>),
    ParcelType(Command<ParcelType>),
    Patient(Command<Patient>),
    Street(Command<Street>),
    Delivery(Command<Delivery>),
    Setting(SettingCommand),
}

#[derive(Debug, PartialEq)]
pub enum OperationResult {
    Vehicle(Outcome<Vehicle>),
    Driver(Outcome<Driver>),
    ParcelType(Outcome<ParcelType>),
    Patient(Outcome<Patient>),
    Street(Outcome<Street>),
    Delivery(Outcome<Delivery>),
    Setting(SettingOutcome),
}

impl ApplicationRuntime {
    /// Creates a new instance of `ApplicationRuntime` using the database named in the
    /// configuration file, or the default location if there is no configuration file.
    ///
    /// # Errors
    ///
    /// - Returns an error if the configuration file exists but cannot be parsed.
    /// - Returns an error if the database cannot be opened or initialised.
    pub fn new() -> Result<Self, DeliveryError> {
        ApplicationRuntimeBuilder::new().build()
    }

    fn with_database(
        config: AppConfiguration,
        database_manager: DatabaseManager,
    ) -> ApplicationRuntime {
        ApplicationRuntime {
            config,
            vehicle_repository: Arc::new(database_manager.create_entity_repository::<Vehicle>()),
            driver_repository: Arc::new(database_manager.create_entity_repository::<Driver>()),
            parcel_type_repository: Arc::new(
                database_manager.create_entity_repository::<ParcelType>(),
            ),
            patient_repository: Arc::new(database_manager.create_entity_repository::<Patient>()),
            street_repository: Arc::new(database_manager.create_entity_repository::<Street>()),
            delivery_repository: Arc::new(
                database_manager.create_entity_repository::<Delivery>(),
            ),
            setting_repository: Arc::new(database_manager.create_setting_repository()),
            database_manager,
        }
    }

    pub fn config(&self) -> &AppConfiguration {
        &self.config
    }

    pub fn database_manager(&self) -> &DatabaseManager {
        &self.database_manager
    }

    pub fn vehicle_repository(&self) -> Arc<dyn EntityRepository<Vehicle>> {
        self.vehicle_repository.clone()
    }

    pub fn driver_repository(&self) -> Arc<dyn EntityRepository<Driver>> {
        self.driver_repository.clone()
    }

    pub fn parcel_type_repository(&self) -> Arc<dyn EntityRepository<ParcelType>> {
        self.parcel_type_repository.clone()
    }

    pub fn patient_repository(&self) -> Arc<dyn EntityRepository<Patient>> {
        self.patient_repository.clone()
    }

    pub fn street_repository(&self) -> Arc<dyn EntityRepository<Street>> {
        self.street_repository.clone()
    }

    pub fn delivery_repository(&self) -> Arc<dyn EntityRepository<Delivery>> {
        self.delivery_repository.clone()
    }

    pub fn setting_repository(&self) -> Arc<dyn SettingRepository> {
        self.setting_repository.clone()
    }

    /// Executes the specified `Operation` and returns the result.
    ///
    /// Every mutation is committed before this method returns. Nothing is rolled back
    /// across operations.
    ///
    /// # Errors
    ///
    /// - `DeliveryError::Validation` or `DeliveryError::NotFound` when the request itself is at fault.
    /// - `DeliveryError::Integrity` when a store constraint is violated.
    /// - Any other variant signals an infrastructure failure.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let runtime = ApplicationRuntime::new()?;
    /// let operation = Operation::Vehicle(Command::Add(NewVehicle { registration: "AB12CDE".into() }));
    /// match runtime.execute(operation) {
    ///     Ok(result) => println!("Operation successful: {:?}", result),
    ///     Err(err) => eprintln!("Operation failed: {:?}", err),
    /// }
    /// ```
    pub fn execute(&self, operation: Operation) -> Result<OperationResult, DeliveryError> {
        match operation {
            Operation::Vehicle(cmd) => Ok(OperationResult::Vehicle(
                cmd.execute(self.vehicle_repository.as_ref())?,
            )),
            Operation::Driver(cmd) => Ok(OperationResult::Driver(
                cmd.execute(self.driver_repository.as_ref())?,
            )),
            Operation::ParcelType(cmd) => Ok(OperationResult::ParcelType(
                cmd.execute(self.parcel_type_repository.as_ref())?,
            )),
            Operation::Patient(cmd) => Ok(OperationResult::Patient(
                cmd.execute(self.patient_repository.as_ref())?,
            )),
            Operation::Street(cmd) => Ok(OperationResult::Street(
                cmd.execute(self.street_repository.as_ref())?,
            )),
            Operation::Delivery(cmd) => Ok(OperationResult::Delivery(
                cmd.execute(self.delivery_repository.as_ref())?,
            )),
            Operation::Setting(cmd) => Ok(OperationResult::Setting(
                cmd.execute(self.setting_repository.as_ref())?,
            )),
        }
    }
}

/// Selects which database the runtime is built on.
#[derive(Default)]
pub struct ApplicationRuntimeBuilder {
    in_memory: bool,
    database_path: Option<PathBuf>,
}

impl ApplicationRuntimeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps all records in memory, they are gone when the runtime is dropped
    #[must_use]
    pub fn use_in_memory_db(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Overrides the database location given in the configuration file
    #[must_use]
    pub fn use_database_file(mut self, path: PathBuf) -> Self {
        self.database_path = Some(path);
        self
    }

    /// # Errors
    /// Returns an error if the configuration cannot be loaded or the database cannot be opened.
    pub fn build(self) -> Result<ApplicationRuntime, DeliveryError> {
        let config = if self.in_memory {
            AppConfiguration::default()
        } else {
            config::load()?
        };

        let database_config = if self.in_memory {
            DatabaseConfig::SqliteInMemory
        } else {
            let path = self
                .database_path
                .unwrap_or_else(|| PathBuf::from(&config.application_data.database));
            debug!("Using database {}", path.to_string_lossy());
            DatabaseConfig::SqliteOnDisk { path }
        };

        let database_manager = DatabaseManager::new(&database_config)?;
        Ok(ApplicationRuntime::with_database(config, database_manager))
    }
}
