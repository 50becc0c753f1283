#![allow(missing_docs)]

pub(crate) mod http;

use axum_test::TestServer;
use rusqlite::Connection;

use crate::{
    AppState, build_router,
    db::{initialize, seed_sample_data},
};

pub(crate) use http::{assert_message, parse_json};

/// An in-memory database with every table created and no rows.
pub(crate) fn get_test_connection() -> Connection {
    let connection = Connection::open_in_memory().expect("Could not open database in memory.");
    initialize(&connection).expect("Could not initialize database.");

    connection
}

/// An in-memory database holding the sample rows.
pub(crate) fn get_seeded_connection() -> Connection {
    let connection = get_test_connection();
    seed_sample_data(&connection).expect("Could not seed database.");

    connection
}

/// A server running the full router, including CORS, on top of `connection`.
pub(crate) fn get_test_server(connection: Connection) -> TestServer {
    let state = AppState::new(connection).expect("Could not create app state.");
    let app = build_router(state, "static");

    TestServer::new(app).expect("Could not create test server.")
}
