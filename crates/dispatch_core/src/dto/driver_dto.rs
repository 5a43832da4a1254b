//! Driver wire shapes.
//!
//! The request references a car by `carId`; the driver service resolves it
//! against stored cars. The response embeds the full car, or omits it.

use super::car_dto::CarResponse;
use crate::model::driver::Driver;
use crate::model::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverRequest {
    pub name: String,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub car_id: Option<EntityId>,
}

impl From<&Driver> for DriverRequest {
    fn from(driver: &Driver) -> Self {
        Self {
            name: driver.name.clone(),
            available: driver.available,
            car_id: driver.car_id(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponse {
    pub id: Option<EntityId>,
    pub name: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car: Option<CarResponse>,
}

impl From<&Driver> for DriverResponse {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name.clone(),
            available: driver.available,
            car: driver.car.as_ref().map(CarResponse::from),
        }
    }
}
