//! API error type with IntoResponse
//!
//! Every variant renders as the error envelope.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::envelope;
use crate::controller::Failure;

pub const MSG_INVALID_PAYLOAD: &str = "Invalid request payload";

#[derive(Debug)]
pub enum ApiError {
    /// Body could not be decoded into a ProductRequest (400)
    InvalidPayload(JsonRejection),

    /// Controller reported a failure (status chosen by the controller)
    Controller(Failure),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidPayload(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "rejected payload");
                envelope::error(
                    StatusCode::BAD_REQUEST,
                    MSG_INVALID_PAYLOAD,
                    rejection.body_text(),
                )
            }
            Self::Controller(failure) => {
                envelope::error(failure.status, failure.message, &failure.source)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        Self::InvalidPayload(e)
    }
}

impl From<Failure> for ApiError {
    fn from(e: Failure) -> Self {
        Self::Controller(e)
    }
}
