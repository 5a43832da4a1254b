use super::EntityRequest;
use crate::model::address::Address;
use crate::model::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRequest {
    pub text: String,
}

impl From<&Address> for AddressRequest {
    fn from(address: &Address) -> Self {
        Self {
            text: address.text.clone(),
        }
    }
}

impl EntityRequest for AddressRequest {
    type Entity = Address;

    fn to_entity(&self) -> Address {
        Address::new(self.text.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressResponse {
    pub id: Option<EntityId>,
    pub text: String,
}

impl From<&Address> for AddressResponse {
    fn from(address: &Address) -> Self {
        Self {
            id: address.id,
            text: address.text.clone(),
        }
    }
}
