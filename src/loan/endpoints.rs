//! Route handlers for `/api/loans`.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    db::lock_connection,
    extract::{Json, Path},
    loan::{
        Loan, LoanForm, LoanId, NewLoanForm, create_loan, delete_loan, get_all_loans, get_loan,
        update_loan,
    },
    message::Message,
};

/// The state needed to manage loans.
#[derive(Debug, Clone)]
pub struct LoanState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for LoanState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

pub async fn get_loans_endpoint(State(state): State<LoanState>) -> Result<Json<Vec<Loan>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_all_loans(&connection).map(Json)
}

pub async fn get_loan_endpoint(
    State(state): State<LoanState>,
    Path(loan_id): Path<LoanId>,
) -> Result<Json<Loan>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_loan(loan_id, &connection).map(Json)
}

/// Create a loan, responds with 201 and the new loan.
pub async fn create_loan_endpoint(
    State(state): State<LoanState>,
    Json(form): Json<NewLoanForm>,
) -> Result<(StatusCode, Json<Loan>), Error> {
    let connection = lock_connection(&state.db_connection)?;

    let loan = create_loan(&LoanForm::from(form), &connection)?;
    tracing::info!("Created loan {} with status {}", loan.id, loan.status);

    Ok((StatusCode::CREATED, Json(loan)))
}

pub async fn update_loan_endpoint(
    State(state): State<LoanState>,
    Path(loan_id): Path<LoanId>,
    Json(form): Json<LoanForm>,
) -> Result<Json<Message>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    update_loan(loan_id, &form, &connection)?;

    Ok(Json(Message::new("Loan updated")))
}

pub async fn delete_loan_endpoint(
    State(state): State<LoanState>,
    Path(loan_id): Path<LoanId>,
) -> Result<Json<Message>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    delete_loan(loan_id, &connection)?;

    Ok(Json(Message::new("Loan deleted")))
}

#[cfg(test)]
mod loan_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};

    use crate::{
        Error,
        extract::{Json, Path},
        loan::{
            LoanForm, LoanStatus, NewLoanForm, create_loan_endpoint, delete_loan_endpoint,
            get_loan_endpoint, update_loan_endpoint,
        },
        test_utils::get_seeded_connection,
    };

    use super::LoanState;

    fn get_loan_state() -> LoanState {
        LoanState {
            db_connection: Arc::new(Mutex::new(get_seeded_connection())),
        }
    }

    #[tokio::test]
    async fn create_defaults_to_pending() {
        let state = get_loan_state();
        let form: NewLoanForm =
            serde_json::from_str(r#"{"customer_id": 2, "amount": 750.0}"#).unwrap();

        let (status, Json(loan)) = create_loan_endpoint(State(state.clone()), Json(form))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(loan.status, LoanStatus::Pending);
        let Json(got) = get_loan_endpoint(State(state), Path(loan.id)).await.unwrap();
        assert_eq!(got, loan);
    }

    #[tokio::test]
    async fn update_seeded_loan() {
        let state = get_loan_state();
        let form = LoanForm {
            customer_id: 2,
            amount: 5000.0,
            status: LoanStatus::Approved,
        };

        let Json(message) = update_loan_endpoint(State(state.clone()), Path(2), Json(form))
            .await
            .unwrap();

        assert_eq!(message.message, "Loan updated");
        let Json(loan) = get_loan_endpoint(State(state), Path(2)).await.unwrap();
        assert_eq!(loan.status, LoanStatus::Approved);
    }

    #[tokio::test]
    async fn update_missing_loan_returns_not_found() {
        let state = get_loan_state();
        let form = LoanForm {
            customer_id: 1,
            amount: 1.0,
            status: LoanStatus::Rejected,
        };

        let result = update_loan_endpoint(State(state), Path(999), Json(form)).await;

        assert_eq!(result.err(), Some(Error::LoanNotFound));
    }

    #[tokio::test]
    async fn delete_loan_succeeds() {
        let state = get_loan_state();

        let Json(message) = delete_loan_endpoint(State(state.clone()), Path(3))
            .await
            .unwrap();

        assert_eq!(message.message, "Loan deleted");
        assert_eq!(
            get_loan_endpoint(State(state), Path(3)).await.err(),
            Some(Error::LoanNotFound)
        );
    }
}
