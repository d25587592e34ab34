//! List site content

use anyhow::Result;
use std::io::{self, Write};

use crate::content;
use crate::generator::Route;
use crate::helpers::format_money;
use crate::App;

/// List site content by type on stdout
pub async fn run(app: &App, content_type: &str) -> Result<()> {
    let mut buffer = Vec::new();
    write_listing(app, content_type, &mut buffer).await?;
    io::stdout().write_all(&buffer)?;
    Ok(())
}

/// Write the listing for `content_type` to `out`
pub async fn write_listing<W: Write>(app: &App, content_type: &str, out: &mut W) -> Result<()> {
    match content_type {
        "product" | "products" => {
            let products = app.catalog.list_products().await?;
            writeln!(out, "Products ({}):", products.len())?;
            for product in products {
                writeln!(
                    out,
                    "  {} - {} {}",
                    product.id,
                    product.name,
                    format_money(product.price)
                )?;
            }
        }
        "post" | "posts" => {
            let posts: Vec<_> = content::posts().collect();
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in posts {
                writeln!(
                    out,
                    "  {} - {} [{}] ({})",
                    post.date, post.title, post.slug, post.category
                )?;
            }
        }
        "route" | "routes" => {
            let routes = Route::all();
            writeln!(out, "Routes ({}):", routes.len() + 2)?;
            for route in routes {
                writeln!(out, "  GET {}", route.path())?;
            }
            writeln!(out, "  GET /api/health")?;
            writeln!(out, "  GET /api/products")?;
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: product, post, route",
                content_type
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn listing(content_type: &str) -> Result<String> {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(dir.path()).unwrap();
        let mut out = Vec::new();
        write_listing(&app, content_type, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_list_products() {
        let out = listing("products").await.unwrap();
        assert!(out.starts_with("Products (3):"));
        assert!(out.contains("p3 - Classic Backpack $89.00"));
    }

    #[tokio::test]
    async fn test_list_posts() {
        let out = listing("post").await.unwrap();
        assert!(out.contains("2024-01-20 - Understanding Next.js App Router [nextjs-routing] (Guide)"));
    }

    #[tokio::test]
    async fn test_list_routes() {
        let out = listing("routes").await.unwrap();
        assert!(out.starts_with("Routes (11):"));
        assert!(out.contains("GET /blog/shadcn-ui"));
        assert!(out.contains("GET /api/products"));
    }

    #[tokio::test]
    async fn test_list_unknown_type() {
        let err = listing("tags").await.unwrap_err();
        assert!(err.to_string().starts_with("Unknown type: tags"));
    }
}
