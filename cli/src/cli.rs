use std::fmt::{self, Formatter};
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub(crate) enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Parser)]
/// Delivery logistics store - add, update, delete and list vehicles, drivers, parcel types
/// and system settings.
///
/// All changes are written to the local database immediately.
#[command(author, version, about)] // Read from Cargo.toml
pub(crate) struct Opts {
    #[command(subcommand)]
    pub cmd: Command,

    #[arg(global = true, short, long)]
    pub verbosity: Option<LogLevel>,

    /// Database file to use instead of the one in the configuration file
    #[arg(global = true, long)]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Manage the vehicles
    Vehicle(Vehicle),
    /// Manage the drivers
    Driver(Driver),
    /// Manage the parcel types
    ParcelType(ParcelType),
    /// Read and write system settings
    Setting(Setting),
    /// Subcommands for configuration
    Config(Config),
}

#[derive(Args)]
pub(crate) struct Vehicle {
    #[command(subcommand)]
    pub cmd: VehicleCommand,
}

#[derive(Subcommand)]
pub(crate) enum VehicleCommand {
    /// List the active vehicles
    List,
    /// Add a new, active, vehicle
    Add {
        /// Registration plate, must be unique
        registration: String,
    },
    /// Change the registration or the active flag of a vehicle
    Update {
        id: i64,
        #[arg(short, long)]
        registration: Option<String>,
        #[arg(short, long, action = ArgAction::Set)]
        active: Option<bool>,
    },
    /// Delete a vehicle
    Delete { id: i64 },
}

#[derive(Args)]
pub(crate) struct Driver {
    #[command(subcommand)]
    pub cmd: DriverCommand,
}

#[derive(Subcommand)]
pub(crate) enum DriverCommand {
    /// List the active drivers
    List,
    /// Add a new, active, driver
    Add { name: String },
    /// Change the name or the active flag of a driver
    Update {
        id: i64,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long, action = ArgAction::Set)]
        active: Option<bool>,
    },
    /// Delete a driver
    Delete { id: i64 },
}

#[derive(Args)]
pub(crate) struct ParcelType {
    #[command(subcommand)]
    pub cmd: ParcelTypeCommand,
}

#[derive(Subcommand)]
pub(crate) enum ParcelTypeCommand {
    /// List all parcel types
    List,
    /// Add a new parcel type
    Add {
        /// Short code, must be unique
        code: String,
        description: String,
        /// The recipient has to sign for parcels of this type
        #[arg(short, long)]
        requires_signature: bool,
    },
    /// Change the code, description or signature requirement of a parcel type
    Update {
        id: i64,
        #[arg(short, long)]
        code: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long, action = ArgAction::Set)]
        requires_signature: Option<bool>,
    },
    /// Delete a parcel type
    Delete { id: i64 },
}

#[derive(Args)]
pub(crate) struct Setting {
    #[command(subcommand)]
    pub cmd: SettingCommand,
}

#[derive(Subcommand)]
pub(crate) enum SettingCommand {
    /// Print the value of a setting
    Get {
        key: String,
        /// Printed if the setting does not exist
        #[arg(short, long, default_value = "")]
        default: String,
    },
    /// Create or update a setting
    Set {
        key: String,
        value: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List all settings
    List,
}

#[derive(Args)]
pub(crate) struct Config {
    #[command(subcommand)]
    pub cmd: ConfigCommand,
}

/// Create, modify or list the configuration file.
#[derive(Subcommand, Clone)]
pub(crate) enum ConfigCommand {
    /// Update the configuration file
    Update(UpdateConfiguration),
    /// write current configuration to standard output
    List,
    /// Remove the current configuration
    Remove,
}

#[derive(Args, Clone)]
pub(crate) struct UpdateConfiguration {
    /// Path to the Sqlite database file
    #[arg(long)]
    pub database: PathBuf,
}
