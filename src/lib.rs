//! A JSON REST API for administering a small bank, plus the static admin panel
//! that drives it.
//!
//! The API manages customers, account types, accounts, banks, loans and
//! transactions in a SQLite database, and exposes a read-only audit log.
//! Every route lives under `/api`. Other paths are served from a directory of
//! static files.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod account;
mod account_type;
mod app_state;
mod audit;
mod bank;
mod customer;
mod database_id;
mod db;
mod endpoints;
mod error;
mod extract;
mod loan;
mod logging;
mod message;
mod routing;
#[cfg(test)]
mod test_utils;
mod transaction;

pub use app_state::AppState;
pub use db::{initialize as initialize_db, seed_sample_data};
pub use error::{Error, SchemaError};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
