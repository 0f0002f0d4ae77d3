//! The commands a front end issues against the store, and their outcomes.
//!
//! A front end never talks to the repositories directly, it builds a command and executes it.
use crate::error::DeliveryError;
use crate::repository::entity_repository::{Entity, EntityRepository};
use log::debug;

pub mod setting;

pub enum Command<E: Entity> {
    List,
    Add(E::New),
    Update { id: i64, changes: E::Changes },
    Delete(i64),
}

#[derive(Debug, PartialEq)]
pub enum Outcome<E> {
    Listed(Vec<E>),
    Added(E),
    Updated(E),
    Deleted(i64),
}

impl<E: Entity> Command<E> {
    /// Executes the command against the given repository.
    ///
    /// # Errors
    /// Returns whatever error the repository reports, see [`EntityRepository`].
    pub fn execute(self, repository: &dyn EntityRepository<E>) -> Result<Outcome<E>, DeliveryError> {
        match self {
            Command::List => {
                debug!("Listing {} records", E::NAME);
                Ok(Outcome::Listed(repository.list_active()?))
            }
            Command::Add(new) => Ok(Outcome::Added(repository.add(new)?)),
            Command::Update { id, changes } => Ok(Outcome::Updated(repository.update(id, changes)?)),
            Command::Delete(id) => {
                repository.delete(id)?;
                Ok(Outcome::Deleted(id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::sqlite::tests::test_database_manager;
    use crate::types::{NewVehicle, Vehicle, VehicleChanges};

    #[test]
    fn commands_drive_the_repository() -> Result<(), DeliveryError> {
        let repo = test_database_manager()?.create_entity_repository::<Vehicle>();

        let Outcome::Added(vehicle) = Command::<Vehicle>::Add(NewVehicle {
            registration: "AB12CDE".to_string(),
        })
        .execute(&repo)?
        else {
            panic!("Expected the vehicle to be added");
        };

        let outcome = Command::<Vehicle>::Update {
            id: vehicle.id,
            changes: VehicleChanges {
                active: Some(false),
                ..Default::default()
            },
        }
        .execute(&repo)?;
        assert!(matches!(outcome, Outcome::Updated(Vehicle { active: false, .. })));

        assert_eq!(
            Command::<Vehicle>::List.execute(&repo)?,
            Outcome::Listed(vec![])
        );
        assert_eq!(
            Command::<Vehicle>::Delete(vehicle.id).execute(&repo)?,
            Outcome::Deleted(vehicle.id)
        );
        Ok(())
    }

    #[test]
    fn delete_of_missing_record_is_reported() -> Result<(), DeliveryError> {
        let repo = test_database_manager()?.create_entity_repository::<Vehicle>();
        let result = Command::<Vehicle>::Delete(1).execute(&repo);
        assert!(matches!(result, Err(DeliveryError::NotFound { id: 1, .. })));
        Ok(())
    }
}
