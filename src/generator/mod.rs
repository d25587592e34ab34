//! Generator module - renders site pages using built-in Tera templates
//!
//! The same renderer backs the HTTP server (one page per request) and the
//! static export (every route written under the public directory).

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tera::Context;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};
use crate::config::{MenuItem, SiteConfig};
use crate::content::{self, ContentError};
use crate::health::HealthReport;
use crate::helpers::{format_money, format_number};
use crate::templates::{
    ActivityItem, CategoryData, ConfigData, PostSummary, SettingToggle, StatCard, TemplateRenderer,
    TopPage, SITE_CSS,
};
use crate::App;

/// A page of the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    BlogIndex,
    BlogPost(String),
    Dashboard,
    Analytics,
    Settings,
}

impl Route {
    /// Every page of the site, with one post page per blog slug
    pub fn all() -> Vec<Route> {
        let mut routes = vec![Route::Home, Route::About, Route::BlogIndex];
        routes.extend(
            content::slugs()
                .into_iter()
                .map(|slug| Route::BlogPost(slug.to_string())),
        );
        routes.extend([Route::Dashboard, Route::Analytics, Route::Settings]);
        routes
    }

    /// URL path
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::BlogIndex => "/blog".to_string(),
            Route::BlogPost(slug) => format!("/blog/{}", slug),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Analytics => "/dashboard/analytics".to_string(),
            Route::Settings => "/dashboard/settings".to_string(),
        }
    }

    /// File the page is written to, relative to the public directory
    pub fn output_path(&self) -> PathBuf {
        let path = self.path();
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            PathBuf::from("index.html")
        } else {
            Path::new(trimmed).join("index.html")
        }
    }
}

/// Errors raised while rendering a page
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    NotFound(#[from] ContentError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("template rendering failed: {0}")]
    Template(#[from] tera::Error),
}

/// Page renderer using Tera templates
pub struct Generator {
    config: SiteConfig,
    renderer: TemplateRenderer,
    catalog: Catalog,
}

impl Generator {
    /// Create a new generator
    pub fn new(app: &App) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            config: app.config.clone(),
            renderer,
            catalog: app.catalog,
        })
    }

    /// Render a single page
    pub async fn render(&self, route: &Route) -> Result<String, PageError> {
        let html = match route {
            Route::Home => self.render_home().await?,
            Route::About => self.render_about()?,
            Route::BlogIndex => self.render_blog_index()?,
            Route::BlogPost(slug) => self.render_blog_post(slug)?,
            Route::Dashboard => self.render_dashboard()?,
            Route::Analytics => self.render_analytics()?,
            Route::Settings => self.render_settings()?,
        };
        Ok(html)
    }

    /// Render the not-found page
    pub fn render_not_found(&self, title: &str, path: &str) -> Result<String, PageError> {
        let context = self.base_context(title, path);
        Ok(self.renderer.render("not_found.html", &context)?)
    }

    /// Write every page, the stylesheet and the product list under `public_dir`
    ///
    /// Returns the number of files written.
    pub async fn generate(&self, public_dir: &Path) -> Result<usize> {
        fs::create_dir_all(public_dir)?;
        let mut written = 0;

        for route in Route::all() {
            let html = self.render(&route).await?;
            write_file(&public_dir.join(route.output_path()), &html)?;
            tracing::debug!("Generated: {}", route.path());
            written += 1;
        }

        let not_found = self.render_not_found("Page Not Found", "/404")?;
        write_file(&public_dir.join("404.html"), &not_found)?;
        write_file(&public_dir.join("assets").join("site.css"), SITE_CSS)?;

        let products = self.catalog.list_products().await?;
        let json = serde_json::to_string_pretty(&products)?;
        write_file(&public_dir.join("api").join("products.json"), &json)?;
        written += 3;

        Ok(written)
    }

    /// Context shared by every page: site config, title and current path
    fn base_context(&self, title: &str, path: &str) -> Context {
        let mut context = Context::new();
        context.insert("config", &ConfigData::from(&self.config));
        context.insert("page_title", title);
        context.insert("current_path", path);
        context
    }

    async fn render_home(&self) -> Result<String, PageError> {
        let products = self.catalog.list_products().await?;
        let health = HealthReport::now(&self.config.health_message);

        let mut context = self.base_context(&self.config.title, &Route::Home.path());
        context.insert("products", &products);
        context.insert("health", &health);
        context.insert(
            "badges",
            &["axum", "Tokio", "Tera", "Server-rendered"],
        );
        context.insert(
            "features",
            &[
                ("Beautiful UI", "Cards, badges and buttons styled with a single stylesheet"),
                ("Dark Mode", "Theme variables ready for a light and a dark palette"),
                ("Type Safe", "Strongly typed pages, payloads and configuration"),
            ],
        );

        Ok(self.renderer.render("home.html", &context)?)
    }

    fn render_about(&self) -> Result<String, PageError> {
        let title = format!("About - {}", self.config.title);
        let mut context = self.base_context(&title, &Route::About.path());
        context.insert(
            "stack",
            &[
                ("Web Framework", vec!["axum", "Tokio", "tower-http"]),
                ("Templates", vec!["Tera", "Nested layouts"]),
                ("Code Quality", vec!["rustfmt", "clippy", "thiserror"]),
                ("Testing", vec!["cargo test", "tokio::test", "tower oneshot"]),
            ],
        );
        context.insert(
            "learning",
            &[
                "Nested layouts through template inheritance (see Blog and Dashboard)",
                "Dynamic routes with one page per blog slug",
                "JSON API routes for backend functionality",
                "Theme variables for light and dark palettes",
                "Reusable card, badge and button markup",
                "Async data access behind a catalog accessor",
                "Unit and router tests",
                "Static export of every page",
            ],
        );

        Ok(self.renderer.render("about.html", &context)?)
    }

    /// Blog layout context: sidebar post list and category counts
    fn blog_context(&self, title: &str, path: &str) -> Context {
        let posts: Vec<PostSummary> = content::posts()
            .map(|post| PostSummary {
                slug: post.slug.clone(),
                title: post.title.clone(),
                date: post.date.clone(),
                category: post.category.clone(),
                path: post.path(),
            })
            .collect();
        let categories: Vec<CategoryData> = content::categories()
            .into_iter()
            .map(|(name, count)| CategoryData {
                name: name.to_string(),
                count,
            })
            .collect();

        let mut context = self.base_context(title, path);
        context.insert("posts", &posts);
        context.insert("categories", &categories);
        context
    }

    fn render_blog_index(&self) -> Result<String, PageError> {
        let title = format!("Blog - {}", self.config.title);
        let context = self.blog_context(&title, &Route::BlogIndex.path());
        Ok(self.renderer.render("blog/index.html", &context)?)
    }

    fn render_blog_post(&self, slug: &str) -> Result<String, PageError> {
        let post = content::find_post(slug)?;

        let title = format!("{} - {} Blog", post.title, self.config.title);
        let mut context = self.blog_context(&title, &post.path());
        context.insert(
            "post",
            &PostSummary {
                slug: post.slug.clone(),
                title: post.title.clone(),
                date: post.date.clone(),
                category: post.category.clone(),
                path: post.path(),
            },
        );
        context.insert("blocks", &post.blocks());

        Ok(self.renderer.render("blog/post.html", &context)?)
    }

    /// Dashboard layout context: sidebar navigation
    fn dashboard_context(&self, title: &str, path: &str) -> Context {
        let mut context = self.base_context(title, path);
        context.insert(
            "dashboard_menu",
            &[
                MenuItem::new("Overview", &Route::Dashboard.path()),
                MenuItem::new("Analytics", &Route::Analytics.path()),
                MenuItem::new("Settings", &Route::Settings.path()),
            ],
        );
        context
    }

    fn render_dashboard(&self) -> Result<String, PageError> {
        let title = format!("Dashboard - {}", self.config.title);
        let mut context = self.dashboard_context(&title, &Route::Dashboard.path());
        context.insert("stats", &dashboard_stats());
        context.insert("activity", &recent_activity());
        Ok(self.renderer.render("dashboard/index.html", &context)?)
    }

    fn render_analytics(&self) -> Result<String, PageError> {
        let mut context = self.dashboard_context("Analytics - Dashboard", &Route::Analytics.path());
        context.insert("stats", &analytics_stats());
        context.insert("top_pages", &top_pages());
        Ok(self.renderer.render("dashboard/analytics.html", &context)?)
    }

    fn render_settings(&self) -> Result<String, PageError> {
        let mut context = self.dashboard_context("Settings - Dashboard", &Route::Settings.path());
        context.insert("toggles", &settings_toggles());
        context.insert(
            "account",
            &[
                ("Email", "user@example.com"),
                ("Plan", "Pro"),
                ("Member Since", "January 2024"),
            ],
        );
        Ok(self.renderer.render("dashboard/settings.html", &context)?)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

fn stat(title: &str, value: String, change: &str, note: String) -> StatCard {
    StatCard {
        title: title.to_string(),
        value,
        change: change.to_string(),
        note,
    }
}

fn dashboard_stats() -> Vec<StatCard> {
    vec![
        stat(
            "Total Users",
            format_number(1234),
            "+12%",
            "+123 from last month".to_string(),
        ),
        stat("Active Posts", "89".to_string(), "+5%", "+4 from last week".to_string()),
        stat(
            "Revenue",
            format_money(1_234_500),
            "+23%",
            format!("+{} from last month", format_money(234_500)),
        ),
    ]
}

fn analytics_stats() -> Vec<StatCard> {
    vec![
        stat(
            "Page Views",
            format_number(45231),
            "+12.5%",
            "Last 30 days".to_string(),
        ),
        stat(
            "Unique Visitors",
            format_number(12543),
            "+8.2%",
            "Last 30 days".to_string(),
        ),
    ]
}

fn top_pages() -> Vec<TopPage> {
    [("/", 15234, 34), ("/blog", 8976, 20), ("/about", 5432, 12), ("/dashboard", 3210, 7)]
        .into_iter()
        .map(|(path, views, percentage)| TopPage {
            path: path.to_string(),
            views,
            percentage,
        })
        .collect()
}

fn recent_activity() -> Vec<ActivityItem> {
    [
        ("New user registered", "2 minutes ago", "user"),
        ("Blog post published", "1 hour ago", "content"),
        ("Payment received", "3 hours ago", "revenue"),
        ("Settings updated", "5 hours ago", "system"),
    ]
    .into_iter()
    .map(|(action, time, kind)| ActivityItem {
        action: action.to_string(),
        time: time.to_string(),
        kind: kind.to_string(),
    })
    .collect()
}

fn settings_toggles() -> Vec<SettingToggle> {
    [
        ("Email Notifications", "Receive email about your account activity", true),
        ("Push Notifications", "Receive push notifications on your device", false),
        ("Marketing Emails", "Receive emails about new products and features", true),
    ]
    .into_iter()
    .map(|(name, description, enabled)| SettingToggle {
        name: name.to_string(),
        description: description.to_string(),
        enabled,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> Generator {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(dir.path()).unwrap();
        Generator::new(&app).unwrap()
    }

    #[test]
    fn test_routes() {
        let paths: Vec<_> = Route::all().iter().map(Route::path).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/about",
                "/blog",
                "/blog/getting-started",
                "/blog/nextjs-routing",
                "/blog/shadcn-ui",
                "/dashboard",
                "/dashboard/analytics",
                "/dashboard/settings",
            ]
        );
    }

    #[test]
    fn test_output_path() {
        assert_eq!(Route::Home.output_path(), PathBuf::from("index.html"));
        assert_eq!(
            Route::BlogPost("shadcn-ui".into()).output_path(),
            PathBuf::from("blog/shadcn-ui/index.html")
        );
    }

    #[tokio::test]
    async fn test_render_home_shows_formatted_prices() {
        let html = generator().render(&Route::Home).await.unwrap();
        assert!(html.contains("Starter Wallet"));
        assert!(html.contains("$49.00"));
        assert!(html.contains("$39.00"));
        assert!(html.contains("$89.00"));
        assert!(html.contains("Server is running smoothly!"));
    }

    #[tokio::test]
    async fn test_render_blog_post() {
        let html = generator()
            .render(&Route::BlogPost("getting-started".into()))
            .await
            .unwrap();
        assert!(html.contains("<title>Getting Started with Evolve-UI - Evolve-UI Blog</title>"));
        assert!(html.contains(r#"<h2 class="post-h2">Prerequisites</h2>"#));
        assert!(html.contains(r#"<li class="post-li">pnpm package manager</li>"#));
        assert!(html.contains("January 15, 2024"));
    }

    #[tokio::test]
    async fn test_render_unknown_post() {
        let err = generator()
            .render(&Route::BlogPost("nope".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, PageError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_render_dashboard_pages() {
        let generator = generator();

        let overview = generator.render(&Route::Dashboard).await.unwrap();
        assert!(overview.contains("Recent Activity"));
        assert!(overview.contains("$12,345.00"));

        let analytics = generator.render(&Route::Analytics).await.unwrap();
        assert!(analytics.contains("45,231"));
        assert!(analytics.contains("15,234 views"));

        let settings = generator.render(&Route::Settings).await.unwrap();
        assert!(settings.contains("user@example.com"));
    }

    #[tokio::test]
    async fn test_generate_writes_every_route() {
        let out = tempfile::tempdir().unwrap();
        let written = generator().generate(out.path()).await.unwrap();

        assert_eq!(written, Route::all().len() + 3);
        for route in Route::all() {
            assert!(out.path().join(route.output_path()).is_file(), "{:?}", route);
        }
        assert!(out.path().join("404.html").is_file());
        assert!(out.path().join("assets/site.css").is_file());

        let products = fs::read_to_string(out.path().join("api/products.json")).unwrap();
        let products: serde_json::Value = serde_json::from_str(&products).unwrap();
        assert_eq!(products[2]["name"], "Classic Backpack");
    }
}
