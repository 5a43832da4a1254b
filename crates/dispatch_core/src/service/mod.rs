//! Core use-case services.
//!
//! # Responsibility
//! - Turn request DTOs into entities and forward them to repositories.
//! - Keep transport adapters decoupled from storage details.
//!
//! # Invariants
//! - Services never bypass repository validation or existence checks.
//! - Repository errors are returned unchanged.

pub mod driver_service;
pub mod entity_service;

pub use driver_service::DriverService;
pub use entity_service::{AddressService, CarService, EntityService, PassengerService};
