//! Defines the app level error type and its conversion to JSON responses.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{extract::Json, message::Message};

/// The generic message sent to the client when an error should not be shown.
pub const SERVER_ERROR_MESSAGE: &str = "Server Error";

/// Problems with the layout of the `transactions` table.
///
/// These are detected once at startup and reported on every request that
/// needs the layout.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum SchemaError {
    /// None of `transaction_type`, `transaction_type_id` or `type` exist.
    #[error("transactions table missing transaction_type column")]
    MissingTypeColumn,

    /// Neither `transaction_date` nor `created_at` exist.
    #[error("transactions table missing transaction_date column")]
    MissingDateColumn,
}

/// The errors that may occur in the application.
///
/// The display string of the not-found, validation and schema variants is
/// sent to the client as the `message` field of the response body.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("Not found")]
    NotFound,

    /// No customer has the requested ID.
    #[error("Customer not found")]
    CustomerNotFound,

    /// No account type has the requested ID.
    #[error("Account type not found")]
    AccountTypeNotFound,

    /// No account has the requested ID.
    #[error("Account not found")]
    AccountNotFound,

    /// No bank has the requested ID.
    #[error("Bank not found")]
    BankNotFound,

    /// No loan has the requested ID.
    #[error("Loan not found")]
    LoanNotFound,

    /// No transaction has the requested ID.
    #[error("Transaction not found")]
    TransactionNotFound,

    /// The transaction type was not one of Deposit, Withdrawal, Transfer or Payment.
    #[error("Invalid transaction type")]
    InvalidTransactionType(String),

    /// A transaction amount of zero or less was given.
    #[error("Amount must be greater than 0")]
    NonPositiveAmount,

    /// A bank was submitted without its name, branch or location.
    #[error("Name, branch, and location are required")]
    MissingBankFields,

    /// A customer age outside of the range [1, 120].
    #[error("Age must be between 1 and 120")]
    AgeOutOfRange(i64),

    /// A required text field was empty or only whitespace.
    ///
    /// The field name should be capitalised, e.g. "Name".
    #[error("{0} is required")]
    EmptyField(&'static str),

    /// The request body could not be parsed as the expected JSON.
    #[error("{0}")]
    InvalidJsonBody(String),

    /// A path parameter could not be parsed, e.g. a non-numeric ID.
    #[error("{0}")]
    InvalidPathParameter(String),

    /// The `transactions` table does not have the columns the app needs.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The current time could not be formatted for storage.
    #[error("could not format timestamp: {0}")]
    TimestampFormat(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidJsonBody(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::InvalidPathParameter(rejection.body_text())
    }
}

impl Error {
    /// The HTTP status code for errors that may be shown to the client.
    ///
    /// Returns `None` for errors whose details must stay on the server.
    fn client_status(&self) -> Option<StatusCode> {
        match self {
            Error::NotFound
            | Error::CustomerNotFound
            | Error::AccountTypeNotFound
            | Error::AccountNotFound
            | Error::BankNotFound
            | Error::LoanNotFound
            | Error::TransactionNotFound => Some(StatusCode::NOT_FOUND),
            Error::InvalidTransactionType(_)
            | Error::NonPositiveAmount
            | Error::MissingBankFields
            | Error::AgeOutOfRange(_)
            | Error::EmptyField(_)
            | Error::InvalidJsonBody(_)
            | Error::InvalidPathParameter(_) => Some(StatusCode::BAD_REQUEST),
            Error::Schema(_) => Some(StatusCode::INTERNAL_SERVER_ERROR),
            Error::TimestampFormat(_) | Error::SqlError(_) | Error::DatabaseLockError => None,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self.client_status() {
            Some(status) => {
                if status.is_server_error() {
                    tracing::error!("Could not serve request: {self}");
                }

                (status, Json(Message::new(self.to_string()))).into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            None => {
                tracing::error!("An unexpected error occurred: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(Message::new(SERVER_ERROR_MESSAGE)),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod error_response_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{
        Error,
        error::{SERVER_ERROR_MESSAGE, SchemaError},
        message::Message,
        test_utils::parse_json,
    };

    async fn assert_response(error: Error, want_status: StatusCode, want_message: &str) {
        let response = error.into_response();

        assert_eq!(response.status(), want_status);
        let message: Message = parse_json(response).await;
        assert_eq!(message.message, want_message);
    }

    #[tokio::test]
    async fn not_found_variants_are_404() {
        assert_response(Error::LoanNotFound, StatusCode::NOT_FOUND, "Loan not found").await;
        assert_response(
            Error::CustomerNotFound,
            StatusCode::NOT_FOUND,
            "Customer not found",
        )
        .await;
    }

    #[tokio::test]
    async fn validation_variants_are_400() {
        assert_response(
            Error::InvalidTransactionType("Bogus".to_owned()),
            StatusCode::BAD_REQUEST,
            "Invalid transaction type",
        )
        .await;
        assert_response(
            Error::MissingBankFields,
            StatusCode::BAD_REQUEST,
            "Name, branch, and location are required",
        )
        .await;
        assert_response(Error::EmptyField("Name"), StatusCode::BAD_REQUEST, "Name is required")
            .await;
    }

    #[tokio::test]
    async fn schema_errors_are_500_with_description() {
        assert_response(
            Error::Schema(SchemaError::MissingTypeColumn),
            StatusCode::INTERNAL_SERVER_ERROR,
            "transactions table missing transaction_type column",
        )
        .await;
    }

    #[tokio::test]
    async fn sql_errors_do_not_leak_details() {
        let error = Error::SqlError(rusqlite::Error::InvalidColumnName("secret".to_owned()));

        assert_response(
            error,
            StatusCode::INTERNAL_SERVER_ERROR,
            SERVER_ERROR_MESSAGE,
        )
        .await;
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        let error = Error::from(rusqlite::Error::QueryReturnedNoRows);

        assert_eq!(error, Error::NotFound);
    }
}
