use axum::{body::Body, http::StatusCode, response::Response};
use axum_test::TestResponse;
use serde::de::DeserializeOwned;

use crate::message::Message;

/// Read the whole body of `response` and parse it as JSON.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not read response body");

    serde_json::from_slice(&body).expect("Response body is not valid JSON")
}

#[track_caller]
pub(crate) fn assert_message(response: &TestResponse, status: StatusCode, message: &str) {
    response.assert_status(status);
    assert_eq!(response.json::<Message>(), Message::new(message));
}
