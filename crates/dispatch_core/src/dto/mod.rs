//! Request/response shapes exchanged with transport adapters.
//!
//! # Responsibility
//! - Describe the camelCase wire shape of every aggregate.
//! - Convert requests into transient entities and entities into responses.
//!
//! # Invariants
//! - Requests never carry an identifier; the target id of an update travels
//!   separately.
//! - A driver request names its car by id only.

use crate::model::Entity;

pub mod address_dto;
pub mod car_dto;
pub mod driver_dto;
pub mod passenger_dto;

pub use address_dto::{AddressRequest, AddressResponse};
pub use car_dto::{CarRequest, CarResponse};
pub use driver_dto::{DriverRequest, DriverResponse};
pub use passenger_dto::{PassengerRequest, PassengerResponse};

/// Request that maps onto exactly one transient entity.
pub trait EntityRequest {
    type Entity: Entity;

    /// Builds a transient entity (no id) from this request.
    fn to_entity(&self) -> Self::Entity;
}
