//! Single-table use-case service shared by cars, passengers and addresses.

use crate::dto::EntityRequest;
use crate::model::address::Address;
use crate::model::car::Car;
use crate::model::passenger::Passenger;
use crate::model::{Entity, EntityId};
use crate::repo::{EntityRepository, RepoResult};
use std::marker::PhantomData;

/// Forwards CRUD calls for one aggregate to its repository.
pub struct EntityService<E, R> {
    repo: R,
    _entity: PhantomData<E>,
}

pub type CarService<R> = EntityService<Car, R>;
pub type PassengerService<R> = EntityService<Passenger, R>;
pub type AddressService<R> = EntityService<Address, R>;

impl<E, R> EntityService<E, R>
where
    E: Entity,
    R: EntityRepository<E>,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            _entity: PhantomData,
        }
    }

    pub fn find_all(&self) -> RepoResult<Vec<E>> {
        self.repo.find_all()
    }

    pub fn find_by_id(&self, id: EntityId) -> RepoResult<Option<E>> {
        self.repo.find_by_id(id)
    }

    /// Inserts a new entity built from `request`.
    pub fn save<Q>(&self, request: &Q) -> RepoResult<E>
    where
        Q: EntityRequest<Entity = E>,
    {
        self.repo.save(&request.to_entity())
    }

    /// Overwrites entity `id` with the values of `request`.
    ///
    /// Fails with `NotFound` when `id` is unknown.
    pub fn update<Q>(&self, id: EntityId, request: &Q) -> RepoResult<E>
    where
        Q: EntityRequest<Entity = E>,
    {
        self.repo.save(&request.to_entity().with_id(id))
    }

    pub fn delete_by_id(&self, id: EntityId) -> RepoResult<()> {
        self.repo.delete_by_id(id)
    }
}
