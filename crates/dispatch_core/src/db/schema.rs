//! Fixed dispatch schema.
//!
//! Tables are created with `IF NOT EXISTS`; existing tables are left as they
//! are, so a database prepared by an external tool keeps its own definitions.

use super::DbResult;
use rusqlite::Connection;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Tables every dispatch database must expose.
pub const DISPATCH_TABLES: [&str; 4] = ["cars", "drivers", "passengers", "addresses"];

/// Creates any missing dispatch table.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
