//! Repository layer contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define the CRUD contract shared by every aggregate.
//! - Isolate SQL and row mapping from service/business orchestration.
//!
//! # Invariants
//! - Write paths call `Entity::validate()` before SQL mutations.
//! - Update and delete confirm the target row exists first and fail with
//!   `NotFound` otherwise. Reads report absence as `Ok(None)`.
//! - Repositories borrow a caller-owned connection and never close it.

use crate::db::DbError;
use crate::model::{Entity, EntityId, EntityKind, ValidationError};
use log::warn;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod address_repo;
pub mod car_repo;
pub mod driver_repo;
pub mod mapping;
pub mod passenger_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by all aggregates.
#[derive(Debug)]
pub enum RepoError {
    /// Entity rejected before reaching storage.
    Validation(ValidationError),
    /// Underlying SQLite failure, including constraint violations.
    Db(DbError),
    /// Update/delete target does not exist.
    NotFound { kind: EntityKind, id: EntityId },
    /// Car is still referenced by at least one driver.
    CarInUse {
        car_id: EntityId,
        driver_count: i64,
    },
    /// Persisted row cannot be mapped to a domain entity.
    InvalidData(String),
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl RepoError {
    /// Returns whether this error reports a missing entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} with id {id} not found"),
            Self::CarInUse {
                car_id,
                driver_count,
            } => write!(
                f,
                "Car with id {car_id} is still assigned to {driver_count} driver(s)"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "repository requires column `{column}` in table `{table}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Write path chosen once per `save` call from the entity identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// Transient entity: insert and attach the generated id.
    Insert,
    /// Persistent entity: overwrite the existing row with this id.
    Update(EntityId),
}

impl SaveMode {
    pub fn of<E: Entity>(entity: &E) -> Self {
        match entity.id() {
            Some(id) => Self::Update(id),
            None => Self::Insert,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update(_) => "update",
        }
    }
}

/// CRUD contract implemented once per aggregate.
pub trait EntityRepository<E: Entity> {
    /// Returns every stored entity ordered by ascending id.
    fn find_all(&self) -> RepoResult<Vec<E>>;
    /// Returns the entity with `id`, or `None` when no such row exists.
    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<E>>;
    /// Inserts a transient entity or updates a persistent one.
    ///
    /// Insert returns a new value carrying the generated id. Update returns
    /// the input unchanged and fails with `NotFound` for unknown ids.
    fn save(&self, entity: &E) -> RepoResult<E>;
    /// Deletes the entity with `id`, failing with `NotFound` when absent.
    fn delete_by_id(&self, id: EntityId) -> RepoResult<()>;
}

/// Column name and bound value pairs for one INSERT statement.
pub(crate) type ColumnValues = Vec<(&'static str, Value)>;

/// Loads `id` through the repository or reports `NotFound`.
pub(crate) fn require_existing<E, R>(repo: &R, id: EntityId) -> RepoResult<E>
where
    E: Entity,
    R: EntityRepository<E> + ?Sized,
{
    match repo.find_by_id(id)? {
        Some(entity) => Ok(entity),
        None => {
            warn!(
                "event=entity_lookup module=repo status=not_found kind={} id={id}",
                E::KIND.as_str()
            );
            Err(RepoError::NotFound { kind: E::KIND, id })
        }
    }
}

/// Inserts one row and returns the storage-generated id.
///
/// Only the listed columns are written; omitted columns take their table
/// defaults.
pub(crate) fn insert_returning_id(
    conn: &Connection,
    table: &'static str,
    columns: &ColumnValues,
) -> RepoResult<EntityId> {
    let names = columns
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = (1..=columns.len())
        .map(|index| format!("?{index}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!("INSERT INTO {table} ({names}) VALUES ({placeholders}) RETURNING id;");

    let id = conn.query_row(
        &sql,
        params_from_iter(columns.iter().map(|(_, value)| value)),
        |row| row.get(0),
    )?;
    Ok(id)
}

/// Deletes one row by id and returns the affected row count.
pub(crate) fn delete_row(
    conn: &Connection,
    table: &'static str,
    id: EntityId,
) -> RepoResult<usize> {
    let changed = conn.execute(&format!("DELETE FROM {table} WHERE id = ?1;"), [id])?;
    Ok(changed)
}

/// Maps a zero-row UPDATE/DELETE to `NotFound`.
///
/// The existence check runs as a separate statement, so the row can vanish in
/// between; that case is reported instead of silently ignored.
pub(crate) fn ensure_changed(changed: usize, kind: EntityKind, id: EntityId) -> RepoResult<()> {
    if changed == 0 {
        return Err(RepoError::NotFound { kind, id });
    }
    Ok(())
}

pub(crate) fn ensure_table_ready(
    conn: &Connection,
    table: &'static str,
    columns: &[&'static str],
) -> RepoResult<()> {
    if !table_exists(conn, table)? {
        return Err(RepoError::MissingRequiredTable(table));
    }
    for &column in columns {
        if !table_has_column(conn, table, column)? {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
