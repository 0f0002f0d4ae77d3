// delivery/tests/test_helpers/fixtures.rs
#![allow(dead_code)]

use delivery::types::{NewDriver, NewParcelType, NewVehicle};

/// Constants for test data
pub const TEST_REGISTRATION: &str = "AB12CDE";
pub const TEST_DRIVER: &str = "Alice";

pub fn new_vehicle(registration: &str) -> NewVehicle {
    NewVehicle {
        registration: registration.to_string(),
    }
}

pub fn new_driver(name: &str) -> NewDriver {
    NewDriver {
        name: name.to_string(),
    }
}

pub fn signed_parcel_type() -> NewParcelType {
    NewParcelType {
        code: "SIG".to_string(),
        description: "Signed parcel".to_string(),
        requires_signature: true,
    }
}
