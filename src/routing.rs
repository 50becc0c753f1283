//! Application router configuration for the JSON API and the admin panel.

use std::path::Path;

use axum::{
    Router,
    http::{
        Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderName, ORIGIN},
    },
    routing::{any, get},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::{
    AppState, Error,
    account::{
        create_account_endpoint, delete_account_endpoint, get_account_endpoint,
        get_accounts_endpoint, update_account_endpoint,
    },
    account_type::{
        create_account_type_endpoint, delete_account_type_endpoint, get_account_type_endpoint,
        get_account_types_endpoint, update_account_type_endpoint,
    },
    audit::get_audit_log_endpoint,
    bank::{
        create_bank_endpoint, delete_bank_endpoint, get_bank_endpoint, get_banks_endpoint,
        update_bank_endpoint,
    },
    customer::{
        create_customer_endpoint, delete_customer_endpoint, get_customer_endpoint,
        get_customers_endpoint, update_customer_endpoint,
    },
    endpoints,
    loan::{
        create_loan_endpoint, delete_loan_endpoint, get_loan_endpoint, get_loans_endpoint,
        update_loan_endpoint,
    },
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_transaction_endpoint,
        get_transactions_endpoint, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Paths outside of `/api` are served from `static_dir`, which holds the
/// admin panel.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route(
            endpoints::CUSTOMERS,
            get(get_customers_endpoint).post(create_customer_endpoint),
        )
        .route(
            endpoints::CUSTOMER,
            get(get_customer_endpoint)
                .put(update_customer_endpoint)
                .delete(delete_customer_endpoint),
        )
        .route(
            endpoints::ACCOUNT_TYPES,
            get(get_account_types_endpoint).post(create_account_type_endpoint),
        )
        .route(
            endpoints::ACCOUNT_TYPE,
            get(get_account_type_endpoint)
                .put(update_account_type_endpoint)
                .delete(delete_account_type_endpoint),
        )
        .route(
            endpoints::ACCOUNTS,
            get(get_accounts_endpoint).post(create_account_endpoint),
        )
        .route(
            endpoints::ACCOUNT,
            get(get_account_endpoint)
                .put(update_account_endpoint)
                .delete(delete_account_endpoint),
        )
        .route(
            endpoints::BANKS,
            get(get_banks_endpoint).post(create_bank_endpoint),
        )
        .route(
            endpoints::BANK,
            get(get_bank_endpoint)
                .put(update_bank_endpoint)
                .delete(delete_bank_endpoint),
        )
        .route(
            endpoints::LOANS,
            get(get_loans_endpoint).post(create_loan_endpoint),
        )
        .route(
            endpoints::LOAN,
            get(get_loan_endpoint)
                .put(update_loan_endpoint)
                .delete(delete_loan_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(update_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(endpoints::AUDIT, get(get_audit_log_endpoint))
        .route(endpoints::API, any(get_api_not_found))
        .route(endpoints::API_FALLBACK, any(get_api_not_found))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors_layer())
        .with_state(state)
}

/// Allow the admin panel to be served from any origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            ORIGIN,
            HeaderName::from_static("x-requested-with"),
            CONTENT_TYPE,
            ACCEPT,
            AUTHORIZATION,
        ])
}

/// Unknown API routes get a JSON 404 rather than the admin panel.
async fn get_api_not_found() -> Error {
    Error::NotFound
}
