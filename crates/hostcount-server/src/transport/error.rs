use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use hostcount_core::HostCountError;

/// HTTP face of `HostCountError`.
///
/// Every failure is a 500 carrying only the stable client code; the detailed
/// message stays in the logs.
#[derive(Debug)]
pub struct ApiError(pub HostCountError);

impl From<HostCountError> for ApiError {
    fn from(e: HostCountError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.0.client_code().as_str() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
