//! Route handlers for `/api/account_types`.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    account_type::{
        AccountType, AccountTypeForm, AccountTypeId, create_account_type, delete_account_type,
        get_account_type, get_all_account_types, update_account_type,
    },
    db::lock_connection,
    extract::{Json, Path},
    message::Message,
};

/// The state needed to manage account types.
#[derive(Debug, Clone)]
pub struct AccountTypeState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for AccountTypeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

pub async fn get_account_types_endpoint(
    State(state): State<AccountTypeState>,
) -> Result<Json<Vec<AccountType>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_all_account_types(&connection).map(Json)
}

pub async fn get_account_type_endpoint(
    State(state): State<AccountTypeState>,
    Path(account_type_id): Path<AccountTypeId>,
) -> Result<Json<AccountType>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_account_type(account_type_id, &connection).map(Json)
}

pub async fn create_account_type_endpoint(
    State(state): State<AccountTypeState>,
    Json(form): Json<AccountTypeForm>,
) -> Result<(StatusCode, Json<AccountType>), Error> {
    let type_name = form.validate()?;
    let connection = lock_connection(&state.db_connection)?;

    let account_type = create_account_type(type_name, &connection)?;

    Ok((StatusCode::CREATED, Json(account_type)))
}

pub async fn update_account_type_endpoint(
    State(state): State<AccountTypeState>,
    Path(account_type_id): Path<AccountTypeId>,
    Json(form): Json<AccountTypeForm>,
) -> Result<Json<Message>, Error> {
    let type_name = form.validate()?;
    let connection = lock_connection(&state.db_connection)?;

    update_account_type(account_type_id, type_name, &connection)?;

    Ok(Json(Message::new("Account type updated")))
}

pub async fn delete_account_type_endpoint(
    State(state): State<AccountTypeState>,
    Path(account_type_id): Path<AccountTypeId>,
) -> Result<Json<Message>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    delete_account_type(account_type_id, &connection)?;

    Ok(Json(Message::new("Account type deleted")))
}
