//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The number of characters of a body to log at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] characters, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let Some(body_bytes) = read_body(body, "request").await else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    log_body(
        &format!("Received request: {} {}", parts.method, parts.uri),
        &body_bytes,
    );

    let response = next.run(Request::from_parts(parts, body_bytes.into())).await;

    let (parts, body) = response.into_parts();
    let Some(body_bytes) = read_body(body, "response").await else {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };

    log_body(&format!("Sending response: {}", parts.status), &body_bytes);

    Response::from_parts(parts, body_bytes.into())
}

async fn read_body(body: Body, kind: &str) -> Option<Bytes> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("Could not read {kind} body: {error}"))
        .ok()
}

fn log_body(summary: &str, body: &[u8]) {
    let body = String::from_utf8_lossy(body);

    match truncate(&body, LOG_BODY_LENGTH_LIMIT) {
        Some(truncated) => {
            tracing::info!("{summary}\nbody: {truncated}...");
            tracing::debug!("Full body: {body:?}");
        }
        None => tracing::info!("{summary}\nbody: {body:?}"),
    }
}

/// The first `limit` characters of `text`, or `None` if it is short enough to log in full.
fn truncate(text: &str, limit: usize) -> Option<&str> {
    text.char_indices()
        .nth(limit)
        .map(|(byte_index, _)| &text[..byte_index])
}

#[cfg(test)]
mod logging_tests {
    use axum::{Router, http::StatusCode, middleware, routing::post};
    use axum_test::TestServer;

    use super::{logging_middleware, truncate};

    #[test]
    fn short_text_is_not_truncated() {
        assert_eq!(truncate("hello", 5), None);
    }

    #[test]
    fn long_text_is_cut_at_limit() {
        assert_eq!(truncate("hello world", 5), Some("hello"));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate("héllo wörld", 2), Some("hé"));
    }

    #[tokio::test]
    async fn bodies_pass_through_unchanged() {
        let app = Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .layer(middleware::from_fn(logging_middleware));
        let server = TestServer::new(app).expect("Could not create test server.");
        let body = "x".repeat(200);

        let response = server.post("/echo").text(body.clone()).await;

        response.assert_status(StatusCode::OK);
        response.assert_text(body);
    }
}
