//! Dispatch domain model.
//!
//! # Responsibility
//! - Define the plain entities persisted by the repository layer.
//! - Share identifier, kind and validation contracts across aggregates.
//!
//! # Invariants
//! - Identifiers are `None` while an entity is transient and `Some` once
//!   storage assigned one.
//! - A Driver references at most one Car and that Car must be persistent.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod address;
pub mod car;
pub mod driver;
pub mod passenger;

/// Storage-assigned identifier shared by every aggregate.
pub type EntityId = i64;

/// Aggregate discriminator used in errors and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Driver,
    Car,
    Passenger,
    Address,
}

impl EntityKind {
    /// Returns the stable lowercase label used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Driver => "driver",
            Self::Car => "car",
            Self::Passenger => "passenger",
            Self::Address => "address",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Driver => "Driver",
            Self::Car => "Car",
            Self::Passenger => "Passenger",
            Self::Address => "Address",
        };
        f.write_str(label)
    }
}

/// Validation failures raised before any write reaches storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required text field is empty or whitespace only.
    BlankField {
        kind: EntityKind,
        field: &'static str,
    },
    /// Driver embeds a Car that has not been persisted yet.
    TransientCar,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField { kind, field } => {
                write!(f, "{kind} field `{field}` must not be blank")
            }
            Self::TransientCar => write!(f, "driver car must be saved before the driver"),
        }
    }
}

impl Error for ValidationError {}

/// Common surface every persisted aggregate exposes to the repository layer.
pub trait Entity: Clone {
    /// Aggregate this entity belongs to.
    const KIND: EntityKind;

    /// Storage identifier, `None` while transient.
    fn id(&self) -> Option<EntityId>;

    /// Returns a copy carrying `id`. `self` is left untouched.
    fn with_id(&self, id: EntityId) -> Self;

    /// Checks write-time invariants.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Returns whether storage has assigned an identifier yet.
    fn is_persistent(&self) -> bool {
        self.id().is_some()
    }
}

pub(crate) fn require_text(
    kind: EntityKind,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField { kind, field });
    }
    Ok(())
}
