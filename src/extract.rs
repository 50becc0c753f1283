//! Request extractors that reject with the app [Error] so clients always get
//! a JSON `{"message": ...}` body.

use axum::{
    extract::{FromRequest, FromRequestParts},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::Error;

/// Drop-in replacement for [axum::Json] that rejects with [Error::InvalidJsonBody].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Drop-in replacement for [axum::extract::Path] that rejects with
/// [Error::InvalidPathParameter].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);
