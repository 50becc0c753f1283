//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    error::SchemaError,
    transaction::{TransactionColumns, resolve_transaction_columns},
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,

    /// The layout of the `transactions` table, read once at startup.
    ///
    /// An unusable layout does not stop the server. Transaction routes that
    /// need the layout respond with the error instead.
    pub transaction_columns: Result<TransactionColumns, SchemaError>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for
    /// the domain models and then inspect the `transactions` table.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized or its table
    /// information cannot be read.
    pub fn new(db_connection: Connection) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let transaction_columns = match resolve_transaction_columns(&db_connection) {
            Ok(columns) => Ok(columns),
            Err(Error::Schema(error)) => {
                tracing::error!("Transaction routes are unavailable: {error}");
                Err(error)
            }
            Err(error) => return Err(error),
        };

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
            transaction_columns,
        })
    }
}
