//! Mapping of handler errors to HTTP responses

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::generator::PageError;

/// Errors returned by request handlers
#[derive(Debug, Error)]
pub enum ServerError {
    /// Nothing lives at the requested path; carries the rendered 404 page
    #[error("not found")]
    NotFound(String),

    #[error(transparent)]
    Page(#[from] PageError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::NotFound(page) => (StatusCode::NOT_FOUND, Html(page)).into_response(),
            ServerError::Catalog(err) | ServerError::Page(PageError::Catalog(err)) => {
                tracing::warn!("{}", err);
                json_error(StatusCode::SERVICE_UNAVAILABLE, "unavailable", err.to_string())
            }
            ServerError::Page(PageError::NotFound(err)) => {
                (StatusCode::NOT_FOUND, err.to_string()).into_response()
            }
            ServerError::Page(err @ PageError::Template(_)) => {
                tracing::error!("{}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

/// JSON error body `{ "error": code, "message": message }`
pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
