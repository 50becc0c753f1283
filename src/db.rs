//! Database setup shared by the resource modules.

use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};
use time::{OffsetDateTime, macros::format_description};

use crate::{
    Error,
    account::{create_account_table, seed_accounts},
    account_type::{create_account_type_table, seed_account_types},
    audit::{create_audit_log_table, seed_audit_log},
    bank::{create_bank_table, seed_banks},
    customer::{create_customer_table, seed_customers},
    loan::{create_loan_table, seed_loans},
    transaction::{create_transaction_table, resolve_transaction_columns, seed_transactions},
};

/// Create the tables for the domain models if they do not exist yet.
///
/// Foreign key enforcement is switched on for `connection` first, SQLite
/// leaves it off by default.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", "ON")?;

    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_customer_table(&transaction)?;
    create_account_type_table(&transaction)?;
    create_account_table(&transaction)?;
    create_bank_table(&transaction)?;
    create_loan_table(&transaction)?;
    create_transaction_table(&transaction)?;
    create_audit_log_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Insert the sample rows used for demos and manual testing.
///
/// Rows are keyed by their primary key and inserted with `INSERT OR IGNORE`,
/// so running this more than once leaves the database unchanged.
///
/// # Errors
/// Returns an error if the tables have not been created, the transactions
/// table has an unsupported layout, or there is some other SQL error.
pub fn seed_sample_data(connection: &Connection) -> Result<(), Error> {
    let transaction_columns = resolve_transaction_columns(connection)?;
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    seed_customers(&transaction)?;
    seed_account_types(&transaction)?;
    seed_accounts(&transaction)?;
    seed_banks(&transaction)?;
    seed_loans(&transaction)?;
    seed_transactions(&transaction_columns, &transaction)?;
    seed_audit_log(&transaction)?;

    transaction.commit()?;

    tracing::info!("Sample data inserted");

    Ok(())
}

/// Lock the shared database connection.
///
/// # Errors
/// Returns [Error::DatabaseLockError] if the lock is poisoned.
pub fn lock_connection(connection: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>, Error> {
    connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })
}

/// The current UTC time in the `YYYY-MM-DD HH:MM:SS` format SQLite uses for
/// `CURRENT_TIMESTAMP`.
pub fn timestamp_now() -> Result<String, Error> {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

    OffsetDateTime::now_utc()
        .format(format)
        .map_err(|error| Error::TimestampFormat(error.to_string()))
}
