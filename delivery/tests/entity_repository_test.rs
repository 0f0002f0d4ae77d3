// delivery/tests/entity_repository_test.rs

use delivery::error::DeliveryError;
use delivery::repository::entity_repository::EntityRepository;
use delivery::repository::setting_repository::SettingRepository;
use delivery::types::{DriverChanges, ParcelTypeChanges, VehicleChanges};

mod test_helpers;
use test_helpers::common::create_test_runtime;
use test_helpers::fixtures::{
    new_driver, new_vehicle, signed_parcel_type, TEST_DRIVER, TEST_REGISTRATION,
};

#[test]
fn added_vehicle_is_the_only_active_one() {
    let runtime = create_test_runtime().expect("Failed to create test runtime");
    let vehicles = runtime.vehicle_repository();

    vehicles
        .add(new_vehicle(TEST_REGISTRATION))
        .expect("Failed to add vehicle");

    let active = vehicles.list_active().expect("Failed to list vehicles");
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].registration, TEST_REGISTRATION);
    assert!(active[0].active);
}

#[test]
fn every_valid_registration_is_listed_after_add() -> Result<(), DeliveryError> {
    let runtime = create_test_runtime()?;
    let vehicles = runtime.vehicle_repository();

    let registrations = ["AB12CDE", "X1", "LONG REG 0001", "ÆØÅ 123"];
    for registration in registrations {
        vehicles.add(new_vehicle(registration))?;
    }

    let active = vehicles.list_active()?;
    for registration in registrations {
        assert!(active
            .iter()
            .any(|v| v.registration == registration && v.active));
    }
    Ok(())
}

#[test]
fn deactivated_driver_disappears_from_the_active_list() -> Result<(), DeliveryError> {
    let runtime = create_test_runtime()?;
    let drivers = runtime.driver_repository();

    let alice = drivers.add(new_driver(TEST_DRIVER))?;
    assert!(drivers.list_active()?.iter().any(|d| d.name == TEST_DRIVER));

    drivers.update(
        alice.id,
        DriverChanges {
            active: Some(false),
            ..Default::default()
        },
    )?;

    assert!(!drivers.list_active()?.iter().any(|d| d.name == TEST_DRIVER));
    // The record itself is still there
    assert!(drivers.find(alice.id)?.is_some());
    Ok(())
}

#[test]
fn second_parcel_type_with_same_code_violates_integrity() -> Result<(), DeliveryError> {
    let runtime = create_test_runtime()?;
    let parcel_types = runtime.parcel_type_repository();

    parcel_types.add(signed_parcel_type())?;
    let err = parcel_types
        .add(signed_parcel_type())
        .expect_err("Duplicate code should be rejected");

    assert!(matches!(err, DeliveryError::Integrity(_)));
    assert!(!err.is_business_error());
    assert_eq!(parcel_types.list_active()?.len(), 1);
    Ok(())
}

#[test]
fn missing_ids_are_not_found_and_change_nothing() -> Result<(), DeliveryError> {
    let runtime = create_test_runtime()?;
    let vehicles = runtime.vehicle_repository();
    let parcel_types = runtime.parcel_type_repository();
    let vehicle = vehicles.add(new_vehicle(TEST_REGISTRATION))?;

    let err = vehicles
        .update(
            vehicle.id + 1,
            VehicleChanges {
                registration: Some("NEW REG".to_string()),
                active: Some(false),
            },
        )
        .expect_err("Update of a missing vehicle should fail");
    assert!(matches!(err, DeliveryError::NotFound { .. }));
    assert!(err.is_business_error());
    assert_eq!(vehicles.list_active()?, vec![vehicle]);

    let err = parcel_types
        .update(99, ParcelTypeChanges::default())
        .expect_err("Update of a missing parcel type should fail");
    assert!(matches!(err, DeliveryError::NotFound { id: 99, .. }));

    assert!(matches!(
        runtime.driver_repository().delete(7),
        Err(DeliveryError::NotFound { id: 7, .. })
    ));
    Ok(())
}

#[test]
fn earlier_calls_stay_committed_when_a_later_one_fails() -> Result<(), DeliveryError> {
    let runtime = create_test_runtime()?;
    let vehicles = runtime.vehicle_repository();

    vehicles.add(new_vehicle("FIRST"))?;
    assert!(vehicles.add(new_vehicle("FIRST")).is_err());
    vehicles.add(new_vehicle("SECOND"))?;

    let registrations: Vec<String> = vehicles
        .list_active()?
        .into_iter()
        .map(|v| v.registration)
        .collect();
    assert_eq!(registrations, vec!["FIRST".to_string(), "SECOND".to_string()]);
    Ok(())
}

#[test]
fn system_setting_get_and_set() -> Result<(), DeliveryError> {
    let runtime = create_test_runtime()?;
    let settings = runtime.setting_repository();

    assert_eq!(settings.get("route_start", "08:00")?, "08:00");

    settings.set("route_start", "07:30", Some("First delivery of the day"))?;
    settings.set("route_start", "07:30", Some("First delivery of the day"))?;

    let all = settings.list()?;
    assert_eq!(all.len(), 1);
    assert_eq!(settings.get("route_start", "08:00")?, "07:30");
    Ok(())
}
