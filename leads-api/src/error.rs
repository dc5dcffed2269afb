/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Application error type that implements Axum's `IntoResponse`.
//!
//! Every error is returned as `{ "error": "..." }` paired with the
//! appropriate HTTP status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use leads_types::{ErrorBody, FieldErrors};

/// Application-level error that pairs an HTTP status code with an [`ErrorBody`].
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl AppError {
    pub fn new(status: StatusCode, body: ErrorBody) -> Self {
        Self { status, body }
    }

    pub fn validation(errors: &FieldErrors) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorBody::validation(errors))
    }

    pub fn malformed_body(detail: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorBody::malformed_body(detail))
    }

    pub fn save_failed() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::save_failed())
    }

    pub fn fetch_failed() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::fetch_failed())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
