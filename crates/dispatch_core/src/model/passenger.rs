use super::{require_text, Entity, EntityId, EntityKind, ValidationError};
use serde::{Deserialize, Serialize};

/// A rider requesting trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub id: Option<EntityId>,
    pub name: String,
}

impl Passenger {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl Entity for Passenger {
    const KIND: EntityKind = EntityKind::Passenger;

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
        require_text(Self::KIND, "name", &self.name)
    }
}
