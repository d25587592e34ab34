//! evolve-ui: a server-rendered web starter
//!
//! Marketing pages, a blog and a dashboard with nested layouts, and a
//! small JSON API, rendered with embedded Tera templates and served by
//! axum. The logic underneath is three leaf components: money formatting
//! ([`helpers::format_money`]), the product catalog ([`catalog::Catalog`])
//! and the blog block classifier ([`content::render_blocks`]).

pub mod catalog;
pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod health;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main application
#[derive(Debug, Clone)]
pub struct App {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Public (static export) directory
    pub public_dir: std::path::PathBuf,
    /// Product data source
    pub catalog: catalog::Catalog,
}

impl App {
    /// Create a new application from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            public_dir,
            catalog: catalog::Catalog::new(),
        })
    }

    /// Export every page to the public directory
    pub async fn generate(&self) -> Result<()> {
        commands::generate::run(self).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(dir.path()).unwrap();
        assert_eq!(app.config.title, "Evolve-UI");
        assert_eq!(app.public_dir, dir.path().join("public"));
    }

    #[test]
    fn test_new_with_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("_config.yml"), "public_dir: dist\n").unwrap();

        let app = App::new(dir.path()).unwrap();
        assert_eq!(app.public_dir, dir.path().join("dist"));
    }

    #[test]
    fn test_new_with_bad_date_format() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("_config.yml"), "date_format: \"%Q\"\n").unwrap();

        assert!(App::new(dir.path()).is_err());
    }
}
