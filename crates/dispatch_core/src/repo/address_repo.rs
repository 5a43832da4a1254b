//! Address repository over the `addresses` table.

use super::mapping::{map_address_row, query_all, query_by_id};
use super::{
    delete_row, ensure_changed, ensure_table_ready, insert_returning_id, require_existing,
    EntityRepository, RepoResult, SaveMode,
};
use crate::model::address::Address;
use crate::model::{Entity, EntityId, EntityKind};
use log::debug;
use rusqlite::types::Value;
use rusqlite::{params, Connection};

const ADDRESS_SELECT_SQL: &str = "SELECT id, text FROM addresses";

/// SQLite-backed address repository.
pub struct SqliteAddressRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAddressRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "addresses", &["id", "text"])?;
        Ok(Self { conn })
    }
}

impl EntityRepository<Address> for SqliteAddressRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Address>> {
        query_all(
            self.conn,
            &format!("{ADDRESS_SELECT_SQL} ORDER BY id ASC;"),
            map_address_row,
        )
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Address>> {
        query_by_id(
            self.conn,
            &format!("{ADDRESS_SELECT_SQL} WHERE id = ?1;"),
            id,
            map_address_row,
        )
    }

    fn save(&self, address: &Address) -> RepoResult<Address> {
        let mode = SaveMode::of(address);
        let saved = match mode {
            SaveMode::Insert => {
                address.validate()?;
                let columns = vec![("text", Value::Text(address.text.clone()))];
                let id = insert_returning_id(self.conn, "addresses", &columns)?;
                address.with_id(id)
            }
            SaveMode::Update(id) => {
                require_existing::<Address, _>(self, id)?;
                address.validate()?;
                let changed = self.conn.execute(
                    "UPDATE addresses SET text = ?1 WHERE id = ?2;",
                    params![address.text, id],
                )?;
                ensure_changed(changed, EntityKind::Address, id)?;
                address.clone()
            }
        };
        debug!(
            "event=entity_save module=repo status=ok kind=address mode={} id={}",
            mode.as_str(),
            saved.id.unwrap_or_default()
        );
        Ok(saved)
    }

    fn delete_by_id(&self, id: EntityId) -> RepoResult<()> {
        require_existing::<Address, _>(self, id)?;
        let changed = delete_row(self.conn, "addresses", id)?;
        ensure_changed(changed, EntityKind::Address, id)?;
        debug!("event=entity_delete module=repo status=ok kind=address id={id}");
        Ok(())
    }
}
