// delivery/tests/operation_test.rs

use delivery::error::DeliveryError;
use delivery::repository::entity_repository::EntityRepository;
use delivery::operation::setting::{SettingCommand, SettingOutcome};
use delivery::operation::{Command, Outcome};
use delivery::types::{NewPatient, NewStreet, Street, StreetChanges};
use delivery::{Operation, OperationResult};

mod test_helpers;
use test_helpers::common::create_test_runtime;
use test_helpers::fixtures::{new_vehicle, TEST_REGISTRATION};

#[test]
fn vehicle_operations_round_trip() -> Result<(), DeliveryError> {
    let runtime = create_test_runtime()?;

    let OperationResult::Vehicle(Outcome::Added(vehicle)) =
        runtime.execute(Operation::Vehicle(Command::Add(new_vehicle(TEST_REGISTRATION))))?
    else {
        panic!("Expected a vehicle to be added");
    };

    let result = runtime.execute(Operation::Vehicle(Command::List))?;
    assert_eq!(
        result,
        OperationResult::Vehicle(Outcome::Listed(vec![vehicle.clone()]))
    );

    let result = runtime.execute(Operation::Vehicle(Command::Delete(vehicle.id)))?;
    assert_eq!(result, OperationResult::Vehicle(Outcome::Deleted(vehicle.id)));
    Ok(())
}

#[test]
fn validation_errors_are_reported_to_the_caller() -> Result<(), DeliveryError> {
    let runtime = create_test_runtime()?;

    let err = match runtime.execute(Operation::Street(Command::Add(NewStreet {
        road_name: "High Street".to_string(),
        town: String::new(),
        ..Default::default()
    }))) {
        Err(err) => err,
        Ok(_) => panic!("A street without a town should be rejected"),
    };
    assert!(matches!(err, DeliveryError::Validation(_)));
    assert!(err.is_business_error());
    Ok(())
}

#[test]
fn streets_keep_their_route_order() -> Result<(), DeliveryError> {
    let runtime = create_test_runtime()?;
    let streets = runtime.street_repository();

    let street = streets.add(NewStreet {
        road_name: "High Street".to_string(),
        town: "Oxford".to_string(),
        route_order: Some(4),
        van_3_assignment: Some(1),
        van_4_assignment: None,
    })?;

    let result = runtime.execute(Operation::Street(Command::Update {
        id: street.id,
        changes: StreetChanges {
            route_order: Some(2),
            ..Default::default()
        },
    }))?;

    assert_eq!(
        result,
        OperationResult::Street(Outcome::Updated(Street {
            route_order: Some(2),
            ..street
        }))
    );
    Ok(())
}

#[test]
fn patients_can_be_listed() -> Result<(), DeliveryError> {
    let runtime = create_test_runtime()?;
    runtime.execute(Operation::Patient(Command::Add(NewPatient {
        house_number: Some("1A".to_string()),
        town: Some("Oxford".to_string()),
        ..Default::default()
    })))?;

    let OperationResult::Patient(Outcome::Listed(patients)) =
        runtime.execute(Operation::Patient(Command::List))?
    else {
        panic!("Expected a list of patients");
    };
    assert_eq!(patients.len(), 1);
    assert_eq!(patients[0].house_number.as_deref(), Some("1A"));
    assert_eq!(patients[0].street_name, None);
    Ok(())
}

#[test]
fn setting_operations() -> Result<(), DeliveryError> {
    let runtime = create_test_runtime()?;

    let result = runtime.execute(Operation::Setting(SettingCommand::Get {
        key: "depot".to_string(),
        default: "North".to_string(),
    }))?;
    assert_eq!(
        result,
        OperationResult::Setting(SettingOutcome::Value("North".to_string()))
    );

    runtime.execute(Operation::Setting(SettingCommand::Set {
        key: "depot".to_string(),
        value: "South".to_string(),
        description: None,
    }))?;

    let OperationResult::Setting(SettingOutcome::Listed(settings)) =
        runtime.execute(Operation::Setting(SettingCommand::List))?
    else {
        panic!("Expected a list of settings");
    };
    assert_eq!(settings.len(), 1);
    assert_eq!(settings[0].value.as_deref(), Some("South"));
    Ok(())
}
