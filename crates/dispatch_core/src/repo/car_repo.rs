//! Car repository over the `cars` table.
//!
//! # Invariants
//! - A car referenced by any driver cannot be deleted; the call fails with
//!   `CarInUse` and leaves both tables untouched.

use super::mapping::{map_car_row, query_all, query_by_id};
use super::{
    delete_row, ensure_changed, ensure_table_ready, insert_returning_id, require_existing,
    EntityRepository, RepoError, RepoResult, SaveMode,
};
use crate::model::car::Car;
use crate::model::{Entity, EntityId, EntityKind};
use log::{debug, warn};
use rusqlite::types::Value;
use rusqlite::{params, Connection};

const CAR_SELECT_SQL: &str = "SELECT id, license_plate, model, color FROM cars";

/// SQLite-backed car repository.
pub struct SqliteCarRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCarRepository<'conn> {
    /// Constructs a repository from a prepared connection.
    ///
    /// The `drivers.car_id` column is required as well, since deletes check
    /// for referencing drivers.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "cars", &["id", "license_plate", "model", "color"])?;
        ensure_table_ready(conn, "drivers", &["car_id"])?;
        Ok(Self { conn })
    }

    /// Counts drivers whose `car_id` points at `car_id`.
    pub fn referencing_driver_count(&self, car_id: EntityId) -> RepoResult<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM drivers WHERE car_id = ?1;",
            [car_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    fn insert(&self, car: &Car) -> RepoResult<Car> {
        car.validate()?;
        let columns = vec![
            ("license_plate", Value::Text(car.license_plate.clone())),
            ("model", Value::Text(car.model.clone())),
            ("color", Value::Text(car.color.clone())),
        ];
        let id = insert_returning_id(self.conn, "cars", &columns)?;
        Ok(car.with_id(id))
    }

    fn update(&self, id: EntityId, car: &Car) -> RepoResult<Car> {
        require_existing::<Car, _>(self, id)?;
        car.validate()?;
        let changed = self.conn.execute(
            "UPDATE cars
             SET
                license_plate = ?1,
                model = ?2,
                color = ?3
             WHERE id = ?4;",
            params![car.license_plate, car.model, car.color, id],
        )?;
        ensure_changed(changed, EntityKind::Car, id)?;
        Ok(car.clone())
    }
}

impl EntityRepository<Car> for SqliteCarRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Car>> {
        query_all(
            self.conn,
            &format!("{CAR_SELECT_SQL} ORDER BY id ASC;"),
            map_car_row,
        )
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Car>> {
        query_by_id(
            self.conn,
            &format!("{CAR_SELECT_SQL} WHERE id = ?1;"),
            id,
            map_car_row,
        )
    }

    fn save(&self, car: &Car) -> RepoResult<Car> {
        let mode = SaveMode::of(car);
        let saved = match mode {
            SaveMode::Insert => self.insert(car)?,
            SaveMode::Update(id) => self.update(id, car)?,
        };
        debug!(
            "event=entity_save module=repo status=ok kind=car mode={} id={}",
            mode.as_str(),
            saved.id.unwrap_or_default()
        );
        Ok(saved)
    }

    fn delete_by_id(&self, id: EntityId) -> RepoResult<()> {
        require_existing::<Car, _>(self, id)?;

        let driver_count = self.referencing_driver_count(id)?;
        if driver_count > 0 {
            warn!(
                "event=entity_delete module=repo status=rejected kind=car id={id} driver_count={driver_count}"
            );
            return Err(RepoError::CarInUse {
                car_id: id,
                driver_count,
            });
        }

        let changed = delete_row(self.conn, "cars", id)?;
        ensure_changed(changed, EntityKind::Car, id)?;
        debug!("event=entity_delete module=repo status=ok kind=car id={id}");
        Ok(())
    }
}
