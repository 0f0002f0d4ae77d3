//! # The Delivery Store Command Line Utility
//!
//! Manages the vehicles, drivers, parcel types and system settings kept in the local
//! delivery database.
//!
//! ## Usage Examples
//!
//! ```bash
//! delivery vehicle add AB12CDE
//! delivery vehicle update 1 --active false
//! delivery driver add Alice
//! delivery parcel-type add SIG "Signed parcel" --requires-signature
//! delivery setting set depot North --description "Home depot"
//! delivery setting get depot --default South
//! ```
//!
//! The database is kept in the per-user data directory, unless the configuration file
//! says otherwise:
//! ```bash
//! delivery config update --database /srv/delivery/delivery_system.sqlite
//! ```
use clap::Parser;
use cli::{Command, LogLevel, Opts};
use commands::{configuration, records};
use delivery::error::DeliveryError;
use delivery::{ApplicationRuntime, ApplicationRuntimeBuilder, Operation};
use env_logger::Env;
use log::debug;
use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::process::exit;

mod cli;
mod commands;

fn main() {
    let opts: Opts = Opts::parse();

    configure_logging(&opts); // Handles the -v option

    if let Err(err) = run(opts) {
        eprintln!("ERROR: {err}");
        // Mistakes in the request get their own exit code
        exit(if err.is_business_error() { 2 } else { 1 });
    }
}

fn run(opts: Opts) -> Result<(), DeliveryError> {
    let operation = match opts.cmd {
        Command::Config(config) => {
            configuration::execute(config.cmd);
            return Ok(());
        }
        Command::Vehicle(vehicle) => Operation::Vehicle(vehicle.cmd.into()),
        Command::Driver(driver) => Operation::Driver(driver.cmd.into()),
        Command::ParcelType(parcel_type) => Operation::ParcelType(parcel_type.cmd.into()),
        Command::Setting(setting) => Operation::Setting(setting.cmd.into()),
    };

    let result = get_runtime(opts.db)?.execute(operation)?;
    records::print_result(result);
    Ok(())
}

/// Opens the database named on the command line, or in the configuration file
fn get_runtime(database: Option<PathBuf>) -> Result<ApplicationRuntime, DeliveryError> {
    let builder = match database {
        Some(path) => ApplicationRuntimeBuilder::new().use_database_file(path),
        None => ApplicationRuntimeBuilder::new(),
    };
    builder.build().inspect_err(|err| {
        if let DeliveryError::TomlParse { path, .. } = err {
            eprintln!(
                "Configuration file {} is damaged. Use 'delivery config update' to recreate it",
                path.to_string_lossy()
            );
        }
    })
}

fn configure_logging(opts: &Opts) {
    let mut tmp_dir = env::temp_dir();
    tmp_dir.push("delivery.log");

    if opts.verbosity.is_some() {
        println!("Logging to {}", &tmp_dir.to_string_lossy());
    }

    // If nothing else was specified in RUST_LOG, use 'warn'
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(
        opts.verbosity.map_or("warn", |lvl| match lvl {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }),
    ));
    match File::create(&tmp_dir) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => eprintln!(
            "Unable to create log file {}, logging to stderr: {e}",
            tmp_dir.to_string_lossy()
        ),
    }
    builder.init();
    debug!("Logging started");
}
