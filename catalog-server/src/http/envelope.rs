//! Uniform JSON response envelope
//!
//! ```text
//! {"status": 201, "message": "success"}
//! {"status": 200, "data": [...]}
//! {"status": 500, "error": "...", "reason": "..."}
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Body of mutation responses
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub status: u16,
    pub message: String,
}

/// Body of read responses
#[derive(Debug, Serialize)]
pub struct DataBody<T> {
    pub status: u16,
    pub data: T,
}

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub reason: String,
}

pub fn success(status: StatusCode, message: impl Into<String>) -> Response {
    let body = MessageBody {
        status: status.as_u16(),
        message: message.into(),
    };
    (status, Json(body)).into_response()
}

pub fn data<T: Serialize>(status: StatusCode, data: T) -> Response {
    let body = DataBody {
        status: status.as_u16(),
        data,
    };
    (status, Json(body)).into_response()
}

pub fn error(status: StatusCode, error: impl Into<String>, reason: impl ToString) -> Response {
    let body = ErrorBody {
        status: status.as_u16(),
        error: error.into(),
        reason: reason.to_string(),
    };
    (status, Json(body)).into_response()
}
