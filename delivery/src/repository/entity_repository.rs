//! The contract shared by every record type that is managed with plain
//! add / list / update / delete operations.
use crate::error::DeliveryError;

/// Describes a record type managed through an [`EntityRepository`].
///
/// `New` carries the fields supplied when a record is created, `Changes` carries the fields
/// to modify in an update, where `None` means "leave unchanged".
pub trait Entity: Sized + Send + Sync + 'static {
    /// Human readable name used in error messages
    const NAME: &'static str;

    type New: Send;
    type Changes: Default + Send;

    fn id(&self) -> i64;

    /// Checks the preconditions of a new record before it is sent to the store.
    ///
    /// # Errors
    /// Returns `DeliveryError::Validation` if a mandatory field is missing.
    fn validate_new(_new: &Self::New) -> Result<(), DeliveryError> {
        Ok(())
    }

    /// Checks the fields supplied for an update.
    ///
    /// # Errors
    /// Returns `DeliveryError::Validation` if a mandatory field is being blanked out.
    fn validate_changes(_changes: &Self::Changes) -> Result<(), DeliveryError> {
        Ok(())
    }
}

pub trait EntityRepository<E: Entity>: Send + Sync {
    ///
    /// Retrieves all records currently in use.
    ///
    /// For record types carrying an active flag, only the active records are returned, otherwise
    /// all of them are. The records are returned in the natural order of the store.
    ///
    /// # Errors
    /// Returns a `DeliveryError` if the query fails.
    fn list_active(&self) -> Result<Vec<E>, DeliveryError>;

    /// Retrieves a single record, `None` if there is no record with the given id.
    ///
    /// # Errors
    /// Returns a `DeliveryError` if the query fails.
    fn find(&self, id: i64) -> Result<Option<E>, DeliveryError>;

    ///
    /// Creates a new record and commits it immediately.
    ///
    /// Defaults are applied for fields not supplied, i.e. new vehicles and drivers are active.
    ///
    /// # Arguments
    /// * `new` - The fields of the record to create.
    ///
    /// # Returns
    /// The record as stored, including the id assigned by the store.
    ///
    /// # Errors
    /// * `DeliveryError::Validation` if a mandatory field is empty.
    /// * `DeliveryError::Integrity` if a unique or foreign key constraint is violated.
    fn add(&self, new: E::New) -> Result<E, DeliveryError>;

    ///
    /// Applies the supplied changes to an existing record and commits immediately.
    ///
    /// Only the fields that are set in `changes` are modified. If no field is set, the
    /// record is returned unchanged.
    ///
    /// # Errors
    /// * `DeliveryError::NotFound` if there is no record with the given id, the store is
    ///   left untouched.
    /// * `DeliveryError::Validation` if a mandatory field is being blanked out.
    /// * `DeliveryError::Integrity` if a unique or foreign key constraint is violated.
    fn update(&self, id: i64, changes: E::Changes) -> Result<E, DeliveryError>;

    /// Removes a record and commits immediately.
    ///
    /// # Errors
    /// * `DeliveryError::NotFound` if there is no record with the given id.
    /// * `DeliveryError::Integrity` if the record is still referenced by another record.
    fn delete(&self, id: i64) -> Result<(), DeliveryError>;
}
