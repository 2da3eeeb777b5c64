//! Shared response envelope types for API handlers.
//!
//! All successful API responses use a `{ "statusCode": ..., "data": ... }`
//! envelope. Use [`DataResponse`] instead of ad-hoc
//! `serde_json::json!({ ... })` to get compile-time type safety and
//! consistent serialization. DELETE endpoints return 204 with no body.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Standard `{ "statusCode": u16, "data": T }` response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResponse<T: Serialize> {
    pub status_code: u16,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    /// Wrap a payload with an explicit status code.
    pub fn with_status(status: StatusCode, data: T) -> (StatusCode, Json<Self>) {
        (
            status,
            Json(Self {
                status_code: status.as_u16(),
                data,
            }),
        )
    }

    /// 200 OK envelope.
    pub fn ok(data: T) -> (StatusCode, Json<Self>) {
        Self::with_status(StatusCode::OK, data)
    }

    /// 201 Created envelope.
    pub fn created(data: T) -> (StatusCode, Json<Self>) {
        Self::with_status(StatusCode::CREATED, data)
    }
}
