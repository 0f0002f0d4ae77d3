//! Translates the command line into store operations, and prints their results.
use std::fmt::Display;

use delivery::operation::setting::{SettingCommand, SettingOutcome};
use delivery::operation::{Command, Outcome};
use delivery::types::{
    Driver, DriverChanges, NewDriver, NewParcelType, NewVehicle, ParcelType, ParcelTypeChanges,
    Vehicle, VehicleChanges,
};
use delivery::OperationResult;

use crate::cli;

impl From<cli::VehicleCommand> for Command<Vehicle> {
    fn from(val: cli::VehicleCommand) -> Self {
        match val {
            cli::VehicleCommand::List => Command::List,
            cli::VehicleCommand::Add { registration } => Command::Add(NewVehicle { registration }),
            cli::VehicleCommand::Update {
                id,
                registration,
                active,
            } => Command::Update {
                id,
                changes: VehicleChanges {
                    registration,
                    active,
                },
            },
            cli::VehicleCommand::Delete { id } => Command::Delete(id),
        }
    }
}

impl From<cli::DriverCommand> for Command<Driver> {
    fn from(val: cli::DriverCommand) -> Self {
        match val {
            cli::DriverCommand::List => Command::List,
            cli::DriverCommand::Add { name } => Command::Add(NewDriver { name }),
            cli::DriverCommand::Update { id, name, active } => Command::Update {
                id,
                changes: DriverChanges { name, active },
            },
            cli::DriverCommand::Delete { id } => Command::Delete(id),
        }
    }
}

impl From<cli::ParcelTypeCommand> for Command<ParcelType> {
    fn from(val: cli::ParcelTypeCommand) -> Self {
        match val {
            cli::ParcelTypeCommand::List => Command::List,
            cli::ParcelTypeCommand::Add {
                code,
                description,
                requires_signature,
            } => Command::Add(NewParcelType {
                code,
                description,
                requires_signature,
            }),
            cli::ParcelTypeCommand::Update {
                id,
                code,
                description,
                requires_signature,
            } => Command::Update {
                id,
                changes: ParcelTypeChanges {
                    code,
                    description,
                    requires_signature,
                },
            },
            cli::ParcelTypeCommand::Delete { id } => Command::Delete(id),
        }
    }
}

impl From<cli::SettingCommand> for SettingCommand {
    fn from(val: cli::SettingCommand) -> Self {
        match val {
            cli::SettingCommand::Get { key, default } => SettingCommand::Get { key, default },
            cli::SettingCommand::Set {
                key,
                value,
                description,
            } => SettingCommand::Set {
                key,
                value,
                description,
            },
            cli::SettingCommand::List => SettingCommand::List,
        }
    }
}

pub(crate) fn print_result(result: OperationResult) {
    match result {
        OperationResult::Vehicle(outcome) => print_outcome("vehicle", outcome),
        OperationResult::Driver(outcome) => print_outcome("driver", outcome),
        OperationResult::ParcelType(outcome) => print_outcome("parcel type", outcome),
        OperationResult::Setting(SettingOutcome::Value(value)) => println!("{value}"),
        OperationResult::Setting(SettingOutcome::Stored(setting)) => println!("{setting}"),
        OperationResult::Setting(SettingOutcome::Listed(settings)) => {
            for setting in settings {
                println!("{setting}");
            }
        }
        // Not reachable from the command line
        other => println!("{other:?}"),
    }
}

fn print_outcome<E: Display>(name: &str, outcome: Outcome<E>) {
    match outcome {
        Outcome::Listed(records) => {
            if records.is_empty() {
                println!("No {name} records");
            }
            for record in records {
                println!("{record}");
            }
        }
        Outcome::Added(record) => println!("Added {name}: {record}"),
        Outcome::Updated(record) => println!("Updated {name}: {record}"),
        Outcome::Deleted(id) => println!("Deleted {name} with id {id}"),
    }
}
