//! The read-only audit log.
//!
//! Rows are written by the seed routine and by other tools with access to the
//! database. The API only reads them.

use std::sync::{Arc, Mutex};

use axum::extract::{FromRef, State};
use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, database_id::DatabaseId, db::lock_connection, extract::Json};

/// A record of a change made to a row in another table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: DatabaseId,
    /// The table that holds the changed row, e.g. "accounts".
    pub table_name: String,
    /// The primary key of the changed row.
    pub record_id: DatabaseId,
    /// What happened to the row, e.g. "CREATE".
    pub action: String,
    pub changed_by: Option<String>,
    pub timestamp: String,
}

/// Retrieve every audit log entry, most recent first.
pub fn get_audit_log(connection: &Connection) -> Result<Vec<AuditLogEntry>, Error> {
    connection
        .prepare(
            "SELECT id, table_name, record_id, action, changed_by, timestamp
            FROM audit_log
            ORDER BY timestamp DESC, id DESC",
        )?
        .query_map([], map_row)?
        .map(|maybe_entry| maybe_entry.map_err(Error::from))
        .collect()
}

pub fn create_audit_log_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS audit_log (
            id INTEGER PRIMARY KEY,
            table_name TEXT NOT NULL,
            record_id INTEGER NOT NULL,
            action TEXT NOT NULL,
            changed_by TEXT,
            timestamp TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        (),
    )?;

    Ok(())
}

/// Insert the sample audit entries if they are missing.
pub fn seed_audit_log(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "INSERT OR IGNORE INTO audit_log (id, action, table_name, record_id, changed_by, timestamp) VALUES
            (1, 'CREATE', 'customers', 1, 'admin', '2025-01-01 10:00:00'),
            (2, 'CREATE', 'accounts', 1, 'admin', '2025-01-01 10:05:00'),
            (3, 'UPDATE', 'accounts', 1, 'admin', '2025-01-03 16:20:00'),
            (4, 'CREATE', 'banks', 1, 'admin', '2025-01-02 11:00:00');",
    )
}

fn map_row(row: &Row) -> Result<AuditLogEntry, rusqlite::Error> {
    Ok(AuditLogEntry {
        id: row.get(0)?,
        table_name: row.get(1)?,
        record_id: row.get(2)?,
        action: row.get(3)?,
        changed_by: row.get(4)?,
        timestamp: row.get(5)?,
    })
}

/// The state needed to read the audit log.
#[derive(Debug, Clone)]
pub struct AuditState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for AuditState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// List the audit log, most recent first.
pub async fn get_audit_log_endpoint(
    State(state): State<AuditState>,
) -> Result<Json<Vec<AuditLogEntry>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_audit_log(&connection).map(Json)
}
