//! HTML page handlers

use axum::extract::{Path, State};
use axum::http::{header, Uri};
use axum::response::{Html, IntoResponse};
use std::sync::Arc;

use super::{ServerError, ServerState};
use crate::generator::{PageError, Route};
use crate::templates::SITE_CSS;

type PageResult = Result<Html<String>, ServerError>;

/// Render a route, turning a missing post into the 404 page
async fn render_page(state: &ServerState, route: Route) -> PageResult {
    match state.generator.render(&route).await {
        Ok(html) => Ok(Html(html)),
        Err(PageError::NotFound(err)) => {
            tracing::debug!("{}", err);
            let page = state
                .generator
                .render_not_found("Post Not Found", &route.path())?;
            Err(ServerError::NotFound(page))
        }
        Err(err) => Err(err.into()),
    }
}

pub(super) async fn home(State(state): State<Arc<ServerState>>) -> PageResult {
    render_page(&state, Route::Home).await
}

pub(super) async fn about(State(state): State<Arc<ServerState>>) -> PageResult {
    render_page(&state, Route::About).await
}

pub(super) async fn blog_index(State(state): State<Arc<ServerState>>) -> PageResult {
    render_page(&state, Route::BlogIndex).await
}

pub(super) async fn blog_post(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> PageResult {
    render_page(&state, Route::BlogPost(slug)).await
}

pub(super) async fn dashboard(State(state): State<Arc<ServerState>>) -> PageResult {
    render_page(&state, Route::Dashboard).await
}

pub(super) async fn analytics(State(state): State<Arc<ServerState>>) -> PageResult {
    render_page(&state, Route::Analytics).await
}

pub(super) async fn settings(State(state): State<Arc<ServerState>>) -> PageResult {
    render_page(&state, Route::Settings).await
}

pub(super) async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], SITE_CSS)
}

/// Anything without a route
pub(super) async fn fallback(State(state): State<Arc<ServerState>>, uri: Uri) -> ServerError {
    match state.generator.render_not_found("Page Not Found", uri.path()) {
        Ok(page) => ServerError::NotFound(page),
        Err(err) => err.into(),
    }
}
