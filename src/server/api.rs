//! JSON API handlers

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;

use super::{ServerError, ServerState};
use crate::catalog::Product;
use crate::health::HealthReport;

/// `GET /api/health`
pub(super) async fn health(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let report = HealthReport::now(&state.config.health_message);

    (
        [(header::CACHE_CONTROL, "no-store, no-cache, must-revalidate")],
        Json(report),
    )
}

/// `GET /api/products`
pub(super) async fn products(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<Vec<Product>>, ServerError> {
    let products = state.catalog.list_products().await?;
    tracing::debug!("Serving {} products", products.len());
    Ok(Json(products))
}
