//! Route handlers for `/api/accounts`.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    account::{
        Account, AccountForm, AccountId, AccountSummary, AccountUpdateForm, create_account,
        delete_account, get_account, get_account_summaries, update_account,
    },
    db::lock_connection,
    extract::{Json, Path},
    message::Message,
};

/// The state needed to manage accounts.
#[derive(Debug, Clone)]
pub struct AccountState {
    /// The database connection for managing accounts.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for AccountState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// List every account joined with its customer and account type names.
pub async fn get_accounts_endpoint(
    State(state): State<AccountState>,
) -> Result<Json<Vec<AccountSummary>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_account_summaries(&connection).map(Json)
}

pub async fn get_account_endpoint(
    State(state): State<AccountState>,
    Path(account_id): Path<AccountId>,
) -> Result<Json<Account>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_account(account_id, &connection).map(Json)
}

/// A route handler for opening an account, responds with 201 and the new account.
pub async fn create_account_endpoint(
    State(state): State<AccountState>,
    Json(form): Json<AccountForm>,
) -> Result<(StatusCode, Json<Account>), Error> {
    let connection = lock_connection(&state.db_connection)?;

    let account = create_account(&form, &connection).inspect_err(|error| {
        tracing::error!("Could not create account with {form:?}: {error}");
    })?;

    Ok((StatusCode::CREATED, Json(account)))
}

pub async fn update_account_endpoint(
    State(state): State<AccountState>,
    Path(account_id): Path<AccountId>,
    Json(form): Json<AccountUpdateForm>,
) -> Result<Json<Message>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    update_account(account_id, &form, &connection)?;

    Ok(Json(Message::new("Account updated")))
}

pub async fn delete_account_endpoint(
    State(state): State<AccountState>,
    Path(account_id): Path<AccountId>,
) -> Result<Json<Message>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    delete_account(account_id, &connection)?;

    Ok(Json(Message::new("Account deleted")))
}

#[cfg(test)]
mod account_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};

    use crate::{
        Error,
        account::{
            AccountForm, AccountUpdateForm, create_account_endpoint, delete_account_endpoint,
            get_account_endpoint, get_accounts_endpoint, update_account_endpoint,
        },
        extract::{Json, Path},
        test_utils::get_seeded_connection,
    };

    use super::AccountState;

    fn get_account_state() -> AccountState {
        AccountState {
            db_connection: Arc::new(Mutex::new(get_seeded_connection())),
        }
    }

    #[tokio::test]
    async fn can_create_account() {
        let state = get_account_state();
        let form = AccountForm {
            customer_id: 2,
            account_type_id: 2,
            balance: 123.45,
        };

        let (status, Json(account)) = create_account_endpoint(State(state.clone()), Json(form))
            .await
            .expect("Could not create account");

        assert_eq!(status, StatusCode::CREATED);
        let Json(got) = get_account_endpoint(State(state), Path(account.account_id))
            .await
            .unwrap();
        assert_eq!(got, account);
    }

    #[tokio::test]
    async fn list_includes_joined_names() {
        let state = get_account_state();

        let Json(accounts) = get_accounts_endpoint(State(state)).await.unwrap();

        assert_eq!(accounts.len(), 4);
        assert_eq!(accounts[0].customer_name, "John Doe");
        assert_eq!(accounts[0].account_type, "Savings");
    }

    #[tokio::test]
    async fn update_missing_account_returns_not_found() {
        let state = get_account_state();
        let form = AccountUpdateForm {
            account_type_id: 1,
            balance: 10.0,
        };

        let result = update_account_endpoint(State(state), Path(999), Json(form)).await;

        assert_eq!(result.err(), Some(Error::AccountNotFound));
    }

    #[tokio::test]
    async fn delete_account_succeeds() {
        let state = get_account_state();

        let Json(message) = delete_account_endpoint(State(state.clone()), Path(4))
            .await
            .unwrap();

        assert_eq!(message.message, "Account deleted");
        assert_eq!(
            get_account_endpoint(State(state), Path(4)).await.err(),
            Some(Error::AccountNotFound)
        );
    }
}
