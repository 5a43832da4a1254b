use super::EntityRequest;
use crate::model::car::Car;
use crate::model::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarRequest {
    pub license_plate: String,
    pub model: String,
    pub color: String,
}

impl From<&Car> for CarRequest {
    fn from(car: &Car) -> Self {
        Self {
            license_plate: car.license_plate.clone(),
            model: car.model.clone(),
            color: car.color.clone(),
        }
    }
}

impl EntityRequest for CarRequest {
    type Entity = Car;

    fn to_entity(&self) -> Car {
        Car::new(
            self.license_plate.clone(),
            self.model.clone(),
            self.color.clone(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    pub id: Option<EntityId>,
    pub license_plate: String,
    pub model: String,
    pub color: String,
}

impl From<&Car> for CarResponse {
    fn from(car: &Car) -> Self {
        Self {
            id: car.id,
            license_plate: car.license_plate.clone(),
            model: car.model.clone(),
            color: car.color.clone(),
        }
    }
}
