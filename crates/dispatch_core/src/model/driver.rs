//! Driver aggregate.
//!
//! # Invariants
//! - `car` is either absent or a persistent car. A "present but empty" car is
//!   never used to express absence.
//! - `name` must not be blank when written.

use super::car::Car;
use super::{require_text, Entity, EntityId, EntityKind, ValidationError};
use serde::{Deserialize, Serialize};

/// A driver who may own one car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    /// `None` until the driver is inserted.
    pub id: Option<EntityId>,
    pub name: String,
    /// Whether the driver can currently take rides.
    pub available: bool,
    /// Stored as a nullable `car_id` reference.
    pub car: Option<Car>,
}

impl Driver {
    /// Creates a transient driver with no car.
    pub fn new(name: impl Into<String>, available: bool) -> Self {
        Self {
            id: None,
            name: name.into(),
            available,
            car: None,
        }
    }

    /// Builder-style helper attaching a car.
    pub fn with_car(mut self, car: Car) -> Self {
        self.car = Some(car);
        self
    }

    /// Identifier of the referenced car, when present.
    pub fn car_id(&self) -> Option<EntityId> {
        self.car.as_ref().and_then(|car| car.id)
    }
}

impl Entity for Driver {
    const KIND: EntityKind = EntityKind::Driver;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn with_id(&self, id: EntityId) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text(Self::KIND, "name", &self.name)?;
        match &self.car {
            Some(car) if car.id.is_none() => Err(ValidationError::TransientCar),
            _ => Ok(()),
        }
    }
}
