//! Car aggregate.

use super::{require_text, Entity, EntityId, EntityKind, ValidationError};
use serde::{Deserialize, Serialize};

/// A vehicle that may be assigned to one driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// `None` until the car is inserted.
    pub id: Option<EntityId>,
    pub license_plate: String,
    pub model: String,
    pub color: String,
}

impl Car {
    /// Creates a transient car.
    pub fn new(
        license_plate: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            license_plate: license_plate.into(),
            model: model.into(),
            color: color.into(),
        }
    }
}

impl Entity for Car {
    const KIND: EntityKind = EntityKind::Car;

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
        require_text(Self::KIND, "license_plate", &self.license_plate)?;
        require_text(Self::KIND, "model", &self.model)?;
        require_text(Self::KIND, "color", &self.color)
    }
}
