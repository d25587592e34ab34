//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub url: String,

    // Navigation
    #[serde(default)]
    pub menu: Vec<MenuItem>,

    // Server
    pub ip: String,
    pub port: u16,
    pub health_message: String,

    // Directory
    pub public_dir: String,

    // Date format used for post pages (chrono strftime)
    pub date_format: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Evolve-UI".to_string(),
            tagline: "From API to UI — where pixels meet products.".to_string(),
            description: "A modern server-rendered starter with a blog, a dashboard and a JSON API"
                .to_string(),
            url: "http://localhost:3000".to_string(),

            menu: vec![
                MenuItem::new("Home", "/"),
                MenuItem::new("About", "/about"),
                MenuItem::new("Blog", "/blog"),
                MenuItem::new("Dashboard", "/dashboard"),
            ],

            ip: "localhost".to_string(),
            port: 3000,
            health_message: "Server is running smoothly!".to_string(),

            public_dir: "public".to_string(),

            date_format: crate::helpers::LONG_DATE_FORMAT.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        if !crate::helpers::is_valid_date_format(&config.date_format) {
            anyhow::bail!("invalid date_format: {:?}", config.date_format);
        }
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }
}

/// A top navigation entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub path: String,
}

impl MenuItem {
    pub fn new(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
        }
    }
}
