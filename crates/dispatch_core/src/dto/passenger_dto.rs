use super::EntityRequest;
use crate::model::passenger::Passenger;
use crate::model::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerRequest {
    pub name: String,
}

impl EntityRequest for PassengerRequest {
    type Entity = Passenger;

    fn to_entity(&self) -> Passenger {
        Passenger::new(self.name.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerResponse {
    pub id: Option<EntityId>,
    pub name: String,
}

impl From<&Passenger> for PassengerResponse {
    fn from(passenger: &Passenger) -> Self {
        Self {
            id: passenger.id,
            name: passenger.name.clone(),
        }
    }
}
