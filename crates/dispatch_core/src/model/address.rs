use super::{require_text, Entity, EntityId, EntityKind, ValidationError};
use serde::{Deserialize, Serialize};

/// Free-form pickup/drop-off address.
///
/// The identifier is whatever storage assigned; callers only supply `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: Option<EntityId>,
    pub text: String,
}

impl Address {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
        }
    }
}

impl Entity for Address {
    const KIND: EntityKind = EntityKind::Address;

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
        require_text(Self::KIND, "text", &self.text)
    }
}
