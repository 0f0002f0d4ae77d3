use crate::error::DeliveryError;
use crate::repository::entity_repository::Entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A van used for the delivery rounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    /// Registration plate, unique across all vehicles
    pub registration: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVehicle {
    pub registration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleChanges {
    pub registration: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDriver {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverChanges {
    pub name: Option<String>,
    pub active: Option<bool>,
}

/// Category of parcel, i.e. whether the recipient has to sign for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParcelType {
    pub id: i64,
    /// Short code, unique across all parcel types
    pub code: String,
    pub description: String,
    pub requires_signature: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParcelType {
    pub code: String,
    pub description: String,
    pub requires_signature: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParcelTypeChanges {
    pub code: Option<String>,
    pub description: Option<String>,
    pub requires_signature: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub house_number: Option<String>,
    pub street_name: Option<String>,
    pub town: Option<String>,
    pub exemption_category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPatient {
    pub house_number: Option<String>,
    pub street_name: Option<String>,
    pub town: Option<String>,
    pub exemption_category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientChanges {
    pub house_number: Option<String>,
    pub street_name: Option<String>,
    pub town: Option<String>,
    pub exemption_category: Option<String>,
}

/// A road on the delivery round, with its position in the route and the van assigned to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub id: i64,
    pub road_name: String,
    pub town: String,
    pub route_order: Option<i64>,
    pub van_3_assignment: Option<i64>,
    pub van_4_assignment: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewStreet {
    pub road_name: String,
    pub town: String,
    pub route_order: Option<i64>,
    pub van_3_assignment: Option<i64>,
    pub van_4_assignment: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreetChanges {
    pub road_name: Option<String>,
    pub town: Option<String>,
    pub route_order: Option<i64>,
    pub van_3_assignment: Option<i64>,
    pub van_4_assignment: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: i64,
    /// Foreign key to the patient receiving the parcel
    pub patient_id: Option<i64>,
    pub delivery_date: Option<NaiveDate>,
    pub van_number: Option<i64>,
    pub route_order: Option<i64>,
    pub notes: Option<String>,
    pub status: Option<String>,
    /// Foreign key to the parcel type
    pub parcel_type_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDelivery {
    pub patient_id: Option<i64>,
    pub delivery_date: Option<NaiveDate>,
    pub van_number: Option<i64>,
    pub route_order: Option<i64>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub parcel_type_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryChanges {
    pub patient_id: Option<i64>,
    pub delivery_date: Option<NaiveDate>,
    pub van_number: Option<i64>,
    pub route_order: Option<i64>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub parcel_type_id: Option<i64>,
}

/// Key/value pair holding an application wide setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSetting {
    pub key: String,
    pub value: Option<String>,
    pub description: Option<String>,
}

/// Rejects empty, or blank, values for mandatory text fields
fn require_text(field: &str, value: &str) -> Result<(), DeliveryError> {
    if value.trim().is_empty() {
        return Err(DeliveryError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_text_if_present(field: &str, value: Option<&String>) -> Result<(), DeliveryError> {
    value.map_or(Ok(()), |v| require_text(field, v))
}

impl Entity for Vehicle {
    const NAME: &'static str = "Vehicle";
    type New = NewVehicle;
    type Changes = VehicleChanges;

    fn id(&self) -> i64 {
        self.id
    }

    fn validate_new(new: &NewVehicle) -> Result<(), DeliveryError> {
        require_text("Registration", &new.registration)
    }

    fn validate_changes(changes: &VehicleChanges) -> Result<(), DeliveryError> {
        require_text_if_present("Registration", changes.registration.as_ref())
    }
}

impl Entity for Driver {
    const NAME: &'static str = "Driver";
    type New = NewDriver;
    type Changes = DriverChanges;

    fn id(&self) -> i64 {
        self.id
    }

    fn validate_new(new: &NewDriver) -> Result<(), DeliveryError> {
        require_text("Name", &new.name)
    }

    fn validate_changes(changes: &DriverChanges) -> Result<(), DeliveryError> {
        require_text_if_present("Name", changes.name.as_ref())
    }
}

impl Entity for ParcelType {
    const NAME: &'static str = "Parcel type";
    type New = NewParcelType;
    type Changes = ParcelTypeChanges;

    fn id(&self) -> i64 {
        self.id
    }

    fn validate_new(new: &NewParcelType) -> Result<(), DeliveryError> {
        require_text("Code", &new.code)?;
        require_text("Description", &new.description)
    }

    fn validate_changes(changes: &ParcelTypeChanges) -> Result<(), DeliveryError> {
        require_text_if_present("Code", changes.code.as_ref())?;
        require_text_if_present("Description", changes.description.as_ref())
    }
}

impl Entity for Patient {
    const NAME: &'static str = "Patient";
    type New = NewPatient;
    type Changes = PatientChanges;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Street {
    const NAME: &'static str = "Street";
    type New = NewStreet;
    type Changes = StreetChanges;

    fn id(&self) -> i64 {
        self.id
    }

    fn validate_new(new: &NewStreet) -> Result<(), DeliveryError> {
        require_text("Road name", &new.road_name)?;
        require_text("Town", &new.town)
    }

    fn validate_changes(changes: &StreetChanges) -> Result<(), DeliveryError> {
        require_text_if_present("Road name", changes.road_name.as_ref())?;
        require_text_if_present("Town", changes.town.as_ref())
    }
}

impl Entity for Delivery {
    const NAME: &'static str = "Delivery";
    type New = NewDelivery;
    type Changes = DeliveryChanges;

    fn id(&self) -> i64 {
        self.id
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>6}  {:<16} {}",
            self.id,
            self.registration,
            if self.active { "active" } else { "inactive" }
        )
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>6}  {:<32} {}",
            self.id,
            self.name,
            if self.active { "active" } else { "inactive" }
        )
    }
}

impl fmt::Display for ParcelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>6}  {:<8} {:<40} {}",
            self.id,
            self.code,
            self.description,
            if self.requires_signature {
                "signature required"
            } else {
                ""
            }
        )
    }
}

impl fmt::Display for SystemSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {}",
            self.key,
            self.value.as_deref().unwrap_or_default()
        )?;
        if let Some(description) = &self.description {
            write!(f, "  # {description}")?;
        }
        Ok(())
    }
}
