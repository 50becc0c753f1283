//! Route handlers for `/api/banks`.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    bank::{
        Bank, BankForm, BankId, create_bank, delete_bank, get_all_banks, get_bank, update_bank,
    },
    db::lock_connection,
    extract::{Json, Path},
    message::Message,
};

/// The state needed to manage banks.
#[derive(Debug, Clone)]
pub struct BankState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for BankState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

pub async fn get_banks_endpoint(State(state): State<BankState>) -> Result<Json<Vec<Bank>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_all_banks(&connection).map(Json)
}

pub async fn get_bank_endpoint(
    State(state): State<BankState>,
    Path(bank_id): Path<BankId>,
) -> Result<Json<Bank>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_bank(bank_id, &connection).map(Json)
}

/// Create a bank, responds with 400 if name, branch or location is missing.
pub async fn create_bank_endpoint(
    State(state): State<BankState>,
    Json(form): Json<BankForm>,
) -> Result<(StatusCode, Json<Bank>), Error> {
    let new_bank = form.validate()?;
    let connection = lock_connection(&state.db_connection)?;

    let bank = create_bank(&new_bank, &connection)?;
    tracing::info!("Created bank {}", bank.id);

    Ok((StatusCode::CREATED, Json(bank)))
}

/// Replace a bank's details, responds with 400 if name, branch or location is missing.
pub async fn update_bank_endpoint(
    State(state): State<BankState>,
    Path(bank_id): Path<BankId>,
    Json(form): Json<BankForm>,
) -> Result<Json<Message>, Error> {
    let bank = form.validate()?;
    let connection = lock_connection(&state.db_connection)?;

    update_bank(bank_id, &bank, &connection)?;

    Ok(Json(Message::new("Bank updated successfully")))
}

pub async fn delete_bank_endpoint(
    State(state): State<BankState>,
    Path(bank_id): Path<BankId>,
) -> Result<Json<Message>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    delete_bank(bank_id, &connection)?;

    Ok(Json(Message::new("Bank deleted successfully")))
}
