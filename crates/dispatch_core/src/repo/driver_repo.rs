//! Driver repository over `drivers` joined with `cars`.
//!
//! # Responsibility
//! - Read drivers together with their optional car in one query.
//! - Persist the car only as a `car_id` reference; car columns are owned by
//!   the car repository.
//!
//! # Invariants
//! - Inserts omit `car_id` entirely when the driver has no car.
//! - Updates overwrite `name`, `available` and `car_id` (NULL when absent).
//! - A referenced car id unknown to storage fails on the foreign key.

use super::mapping::{map_driver_row, query_all, query_by_id};
use super::{
    delete_row, ensure_changed, ensure_table_ready, insert_returning_id, require_existing,
    ColumnValues, EntityRepository, RepoResult, SaveMode,
};
use crate::model::driver::Driver;
use crate::model::{Entity, EntityId, EntityKind};
use log::debug;
use rusqlite::types::Value;
use rusqlite::{params, Connection};

const DRIVER_SELECT_SQL: &str = "SELECT
    d.id AS id,
    d.name AS name,
    d.available AS available,
    d.car_id AS car_id,
    c.license_plate AS license_plate,
    c.model AS model,
    c.color AS color
FROM drivers d
LEFT JOIN cars c ON c.id = d.car_id";

/// SQLite-backed driver repository.
pub struct SqliteDriverRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDriverRepository<'conn> {
    /// Constructs a repository from a prepared connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "drivers", &["id", "name", "available", "car_id"])?;
        ensure_table_ready(conn, "cars", &["id", "license_plate", "model", "color"])?;
        Ok(Self { conn })
    }

    fn insert(&self, driver: &Driver) -> RepoResult<Driver> {
        driver.validate()?;
        let mut columns: ColumnValues = vec![
            ("name", Value::Text(driver.name.clone())),
            ("available", Value::Integer(i64::from(driver.available))),
        ];
        if let Some(car_id) = driver.car_id() {
            columns.push(("car_id", Value::Integer(car_id)));
        }

        let id = insert_returning_id(self.conn, "drivers", &columns)?;
        Ok(driver.with_id(id))
    }

    fn update(&self, id: EntityId, driver: &Driver) -> RepoResult<Driver> {
        require_existing::<Driver, _>(self, id)?;
        driver.validate()?;
        let changed = self.conn.execute(
            "UPDATE drivers
             SET
                name = ?1,
                available = ?2,
                car_id = ?3
             WHERE id = ?4;",
            params![driver.name, driver.available, driver.car_id(), id],
        )?;
        ensure_changed(changed, EntityKind::Driver, id)?;
        Ok(driver.clone())
    }
}

impl EntityRepository<Driver> for SqliteDriverRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Driver>> {
        query_all(
            self.conn,
            &format!("{DRIVER_SELECT_SQL} ORDER BY d.id ASC;"),
            map_driver_row,
        )
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Driver>> {
        query_by_id(
            self.conn,
            &format!("{DRIVER_SELECT_SQL} WHERE d.id = ?1;"),
            id,
            map_driver_row,
        )
    }

    fn save(&self, driver: &Driver) -> RepoResult<Driver> {
        let mode = SaveMode::of(driver);
        let saved = match mode {
            SaveMode::Insert => self.insert(driver)?,
            SaveMode::Update(id) => self.update(id, driver)?,
        };
        debug!(
            "event=entity_save module=repo status=ok kind=driver mode={} id={} has_car={}",
            mode.as_str(),
            saved.id.unwrap_or_default(),
            saved.car.is_some()
        );
        Ok(saved)
    }

    fn delete_by_id(&self, id: EntityId) -> RepoResult<()> {
        require_existing::<Driver, _>(self, id)?;
        let changed = delete_row(self.conn, "drivers", id)?;
        ensure_changed(changed, EntityKind::Driver, id)?;
        debug!("event=entity_delete module=repo status=ok kind=driver id={id}");
        Ok(())
    }
}
