//! HTTP server: server-rendered pages and the JSON API

mod api;
mod error;
mod pages;

use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::generator::Generator;
use crate::App;

pub use error::{json_error, ServerError};

/// Server state
pub(crate) struct ServerState {
    config: SiteConfig,
    catalog: Catalog,
    generator: Generator,
}

/// Build the application router
pub fn router(app: &App) -> Result<Router> {
    let state = Arc::new(ServerState {
        config: app.config.clone(),
        catalog: app.catalog,
        generator: Generator::new(app)?,
    });

    let router = Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/blog", get(pages::blog_index))
        .route("/blog/:slug", get(pages::blog_post))
        .route("/dashboard", get(pages::dashboard))
        .route("/dashboard/analytics", get(pages::analytics))
        .route("/dashboard/settings", get(pages::settings))
        .route("/assets/site.css", get(pages::stylesheet))
        .route("/api/health", get(api::health))
        .route("/api/products", get(api::products))
        .fallback(pages::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

/// Start the server
pub async fn start(app: &App, ip: &str, port: u16) -> Result<()> {
    let router = router(app)?;

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    async fn get_path(path: &str) -> (StatusCode, Option<String>, String) {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(dir.path()).unwrap();
        let response = router(&app)
            .unwrap()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, content_type, body) = get_path("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["message"], "Server is running smoothly!");
        let timestamp = json["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_products_endpoint() {
        let (status, _, body) = get_path("/api/products").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "id": "p1", "name": "Starter Wallet", "price": 4900 },
                { "id": "p2", "name": "Minimal Belt", "price": 3900 },
                { "id": "p3", "name": "Classic Backpack", "price": 8900 },
            ])
        );
    }

    #[tokio::test]
    async fn test_pages_render() {
        for path in [
            "/",
            "/about",
            "/blog",
            "/blog/nextjs-routing",
            "/dashboard",
            "/dashboard/analytics",
            "/dashboard/settings",
        ] {
            let (status, content_type, body) = get_path(path).await;
            assert_eq!(status, StatusCode::OK, "{}", path);
            assert_eq!(
                content_type.as_deref(),
                Some("text/html; charset=utf-8"),
                "{}",
                path
            );
            assert!(body.starts_with("<!DOCTYPE html>"), "{}", path);
        }
    }

    #[tokio::test]
    async fn test_blog_post_page() {
        let (status, _, body) = get_path("/blog/nextjs-routing").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<h2 class="post-h2">Dynamic Routes</h2>"#));
        assert!(body.contains("January 20, 2024"));
        assert!(body.contains(r#"<span class="badge">Guide</span>"#));
    }

    #[tokio::test]
    async fn test_unknown_post_is_not_found() {
        let (status, content_type, body) = get_path("/blog/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));
        assert!(body.contains("<title>Post Not Found</title>"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (status, _, body) = get_path("/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page Not Found"));
    }

    #[tokio::test]
    async fn test_stylesheet() {
        let (status, content_type, body) = get_path("/assets/site.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/css; charset=utf-8"));
        assert!(body.contains("--primary"));
    }
}
