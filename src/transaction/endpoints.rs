//! Route handlers for `/api/transactions`.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    db::lock_connection,
    error::SchemaError,
    extract::{Json, Path},
    message::Message,
    transaction::{
        Transaction, TransactionColumns, TransactionForm, TransactionId, UpdateTransactionForm,
        create_transaction, delete_transaction, get_all_transactions, get_transaction,
        update_transaction,
    },
};

/// The state needed to manage transactions.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The layout of the `transactions` table found at startup, or why it is unusable.
    pub transaction_columns: Result<TransactionColumns, SchemaError>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            transaction_columns: state.transaction_columns,
        }
    }
}

impl TransactionState {
    fn columns(&self) -> Result<TransactionColumns, Error> {
        self.transaction_columns.map_err(Error::from)
    }
}

/// List every transaction, newest first.
pub async fn get_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let columns = state.columns()?;
    let connection = lock_connection(&state.db_connection)?;

    get_all_transactions(&columns, &connection).map(Json)
}

pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Json<Transaction>, Error> {
    let columns = state.columns()?;
    let connection = lock_connection(&state.db_connection)?;

    get_transaction(transaction_id, &columns, &connection).map(Json)
}

/// Record a transaction, responds with 201 and the new transaction.
///
/// The request is validated before the table layout is checked, so a bad
/// request gets a 400 even when the table is unusable.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    Json(form): Json<TransactionForm>,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    let new_transaction = form.validate()?;
    let columns = state.columns()?;
    let connection = lock_connection(&state.db_connection)?;

    let transaction = create_transaction(&new_transaction, &columns, &connection)?;
    tracing::info!(
        "Created {} transaction {} for account {}",
        transaction.transaction_type,
        transaction.transaction_id,
        transaction.account_id
    );

    Ok((StatusCode::CREATED, Json(transaction)))
}

pub async fn update_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
    Json(form): Json<UpdateTransactionForm>,
) -> Result<Json<Message>, Error> {
    let update = form.validate()?;
    let columns = state.columns()?;
    let connection = lock_connection(&state.db_connection)?;

    update_transaction(transaction_id, &update, &columns, &connection)?;

    Ok(Json(Message::new("Transaction updated")))
}

/// Delete a transaction. This does not need the table layout.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Json<Message>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    delete_transaction(transaction_id, &connection)?;

    Ok(Json(Message::new("Transaction deleted")))
}
