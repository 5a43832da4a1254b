//! Passenger repository over the `passengers` table.

use super::mapping::{map_passenger_row, query_all, query_by_id};
use super::{
    delete_row, ensure_changed, ensure_table_ready, insert_returning_id, require_existing,
    EntityRepository, RepoResult, SaveMode,
};
use crate::model::passenger::Passenger;
use crate::model::{Entity, EntityId, EntityKind};
use log::debug;
use rusqlite::types::Value;
use rusqlite::{params, Connection};

const PASSENGER_SELECT_SQL: &str = "SELECT id, name FROM passengers";

/// SQLite-backed passenger repository.
pub struct SqlitePassengerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePassengerRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "passengers", &["id", "name"])?;
        Ok(Self { conn })
    }
}

impl EntityRepository<Passenger> for SqlitePassengerRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Passenger>> {
        query_all(
            self.conn,
            &format!("{PASSENGER_SELECT_SQL} ORDER BY id ASC;"),
            map_passenger_row,
        )
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Passenger>> {
        query_by_id(
            self.conn,
            &format!("{PASSENGER_SELECT_SQL} WHERE id = ?1;"),
            id,
            map_passenger_row,
        )
    }

    fn save(&self, passenger: &Passenger) -> RepoResult<Passenger> {
        let mode = SaveMode::of(passenger);
        let saved = match mode {
            SaveMode::Insert => {
                passenger.validate()?;
                let columns = vec![("name", Value::Text(passenger.name.clone()))];
                let id = insert_returning_id(self.conn, "passengers", &columns)?;
                passenger.with_id(id)
            }
            SaveMode::Update(id) => {
                require_existing::<Passenger, _>(self, id)?;
                passenger.validate()?;
                let changed = self.conn.execute(
                    "UPDATE passengers SET name = ?1 WHERE id = ?2;",
                    params![passenger.name, id],
                )?;
                ensure_changed(changed, EntityKind::Passenger, id)?;
                passenger.clone()
            }
        };
        debug!(
            "event=entity_save module=repo status=ok kind=passenger mode={} id={}",
            mode.as_str(),
            saved.id.unwrap_or_default()
        );
        Ok(saved)
    }

    fn delete_by_id(&self, id: EntityId) -> RepoResult<()> {
        require_existing::<Passenger, _>(self, id)?;
        let changed = delete_row(self.conn, "passengers", id)?;
        ensure_changed(changed, EntityKind::Passenger, id)?;
        debug!("event=entity_delete module=repo status=ok kind=passenger id={id}");
        Ok(())
    }
}
