//! Row mapping from SQLite rows to domain entities.
//!
//! # Invariants
//! - One row produces exactly one entity.
//! - Nullable text columns are read as empty strings; storage NULLs never
//!   reach domain string fields.
//! - A driver's car is present only when the row's `car_id` is non-NULL.

use super::{RepoError, RepoResult};
use crate::model::address::Address;
use crate::model::car::Car;
use crate::model::driver::Driver;
use crate::model::passenger::Passenger;
use crate::model::EntityId;
use rusqlite::{Connection, Row};

/// Signature shared by every row mapper.
pub type RowMapper<E> = fn(&Row<'_>) -> RepoResult<E>;

/// Maps `id, license_plate, model, color`.
pub fn map_car_row(row: &Row<'_>) -> RepoResult<Car> {
    Ok(Car {
        id: Some(row.get("id")?),
        license_plate: text_or_empty(row, "license_plate")?,
        model: text_or_empty(row, "model")?,
        color: text_or_empty(row, "color")?,
    })
}

/// Maps `id, name, available, car_id` plus the joined car columns
/// `license_plate, model, color`.
pub fn map_driver_row(row: &Row<'_>) -> RepoResult<Driver> {
    let car = match row.get::<_, Option<EntityId>>("car_id")? {
        Some(car_id) => Some(Car {
            id: Some(car_id),
            license_plate: text_or_empty(row, "license_plate")?,
            model: text_or_empty(row, "model")?,
            color: text_or_empty(row, "color")?,
        }),
        None => None,
    };

    Ok(Driver {
        id: Some(row.get("id")?),
        name: text_or_empty(row, "name")?,
        available: flag(row, "available")?,
        car,
    })
}

/// Maps `id, name`.
pub fn map_passenger_row(row: &Row<'_>) -> RepoResult<Passenger> {
    Ok(Passenger {
        id: Some(row.get("id")?),
        name: text_or_empty(row, "name")?,
    })
}

/// Maps `id, text`.
pub fn map_address_row(row: &Row<'_>) -> RepoResult<Address> {
    Ok(Address {
        id: Some(row.get("id")?),
        text: text_or_empty(row, "text")?,
    })
}

pub(crate) fn query_all<E>(conn: &Connection, sql: &str, map: RowMapper<E>) -> RepoResult<Vec<E>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query([])?;
    let mut items = Vec::new();
    while let Some(row) = rows.next()? {
        items.push(map(row)?);
    }
    Ok(items)
}

pub(crate) fn query_by_id<E>(
    conn: &Connection,
    sql: &str,
    id: EntityId,
    map: RowMapper<E>,
) -> RepoResult<Option<E>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query([id])?;
    match rows.next()? {
        Some(row) => Ok(Some(map(row)?)),
        None => Ok(None),
    }
}

fn text_or_empty(row: &Row<'_>, column: &str) -> RepoResult<String> {
    Ok(row.get::<_, Option<String>>(column)?.unwrap_or_default())
}

fn flag(row: &Row<'_>, column: &str) -> RepoResult<bool> {
    match row.get::<_, Option<i64>>(column)? {
        None | Some(0) => Ok(false),
        Some(1) => Ok(true),
        Some(other) => Err(RepoError::InvalidData(format!(
            "invalid boolean value `{other}` in column `{column}`"
        ))),
    }
}
