//! Driver use-case service.
//!
//! # Responsibility
//! - Resolve a request's `car_id` into a stored car before saving a driver.
//!
//! # Invariants
//! - An unknown `car_id` fails with `NotFound` for the car and writes nothing.
//! - Updating an unknown driver id reports the driver before the car.

use crate::dto::DriverRequest;
use crate::model::car::Car;
use crate::model::driver::Driver;
use crate::model::{EntityId, EntityKind};
use crate::repo::{EntityRepository, RepoError, RepoResult};
use log::warn;

/// Driver service over a driver repository and a car repository.
pub struct DriverService<D, C> {
    drivers: D,
    cars: C,
}

impl<D, C> DriverService<D, C>
where
    D: EntityRepository<Driver>,
    C: EntityRepository<Car>,
{
    pub fn new(drivers: D, cars: C) -> Self {
        Self { drivers, cars }
    }

    pub fn find_all(&self) -> RepoResult<Vec<Driver>> {
        self.drivers.find_all()
    }

    pub fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Driver>> {
        self.drivers.find_by_id(id)
    }

    /// Inserts a new driver built from `request`.
    pub fn save(&self, request: &DriverRequest) -> RepoResult<Driver> {
        let driver = self.build_driver(None, request)?;
        self.drivers.save(&driver)
    }

    /// Overwrites driver `id` with the values of `request`.
    pub fn update(&self, id: EntityId, request: &DriverRequest) -> RepoResult<Driver> {
        if self.drivers.find_by_id(id)?.is_none() {
            return Err(RepoError::NotFound {
                kind: EntityKind::Driver,
                id,
            });
        }
        let driver = self.build_driver(Some(id), request)?;
        self.drivers.save(&driver)
    }

    pub fn delete_by_id(&self, id: EntityId) -> RepoResult<()> {
        self.drivers.delete_by_id(id)
    }

    fn build_driver(&self, id: Option<EntityId>, request: &DriverRequest) -> RepoResult<Driver> {
        let car = match request.car_id {
            Some(car_id) => Some(self.resolve_car(car_id)?),
            None => None,
        };
        Ok(Driver {
            id,
            name: request.name.clone(),
            available: request.available,
            car,
        })
    }

    fn resolve_car(&self, car_id: EntityId) -> RepoResult<Car> {
        match self.cars.find_by_id(car_id)? {
            Some(car) => Ok(car),
            None => {
                warn!("event=driver_car_resolve module=service status=not_found car_id={car_id}");
                Err(RepoError::NotFound {
                    kind: EntityKind::Car,
                    id: car_id,
                })
            }
        }
    }
}
