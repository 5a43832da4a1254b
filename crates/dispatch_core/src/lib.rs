//! Core persistence and domain logic for the dispatch backend.
//! Drivers, cars, passengers and addresses are stored in SQLite and exposed
//! through one repository per aggregate.

pub mod config;
pub mod db;
pub mod dto;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::address::Address;
pub use model::car::Car;
pub use model::driver::Driver;
pub use model::passenger::Passenger;
pub use model::{Entity, EntityId, EntityKind, ValidationError};
pub use repo::address_repo::SqliteAddressRepository;
pub use repo::car_repo::SqliteCarRepository;
pub use repo::driver_repo::SqliteDriverRepository;
pub use repo::passenger_repo::SqlitePassengerRepository;
pub use repo::{EntityRepository, RepoError, RepoResult, SaveMode};
pub use service::{AddressService, CarService, DriverService, EntityService, PassengerService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
