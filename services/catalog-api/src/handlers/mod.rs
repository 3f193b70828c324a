pub mod categories;
pub mod health;
pub mod products;
pub mod suppliers;

pub use categories::*;
pub use health::*;
pub use products::*;
pub use suppliers::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use comercio_utils::{CatalogError, ErrorResponse};

/// Renders the shared error taxonomy as the JSON error body with its mapped
/// HTTP status.
#[derive(Debug)]
pub struct ApiError(pub CatalogError);

impl From<CatalogError> for ApiError {
    fn from(error: CatalogError) -> Self {
        Self(error)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        Self(CatalogError::database(error.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = self.0.into();
        (status, Json(body)).into_response()
    }
}
