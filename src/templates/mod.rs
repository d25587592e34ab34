//! Built-in site templates using Tera template engine
//!
//! All templates are embedded in the binary. Layouts nest through Tera
//! inheritance: `base.html` is the root layout, `blog/layout.html` and
//! `dashboard/layout.html` add a sidebar for their sections.

use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::helpers::{format_date, format_money, format_number, long_date};

/// Stylesheet shared by every page
pub const SITE_CSS: &str = include_str!("site/site.css");

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all site templates loaded
    pub fn new() -> tera::Result<Self> {
        let mut tera = Tera::default();

        // Autoescaping stays on: post bodies contain literal markup such as `<Card>`
        tera.add_raw_templates(vec![
            ("base.html", include_str!("site/base.html")),
            ("home.html", include_str!("site/home.html")),
            ("about.html", include_str!("site/about.html")),
            ("not_found.html", include_str!("site/not_found.html")),
            ("blog/layout.html", include_str!("site/blog/layout.html")),
            ("blog/index.html", include_str!("site/blog/index.html")),
            ("blog/post.html", include_str!("site/blog/post.html")),
            (
                "dashboard/layout.html",
                include_str!("site/dashboard/layout.html"),
            ),
            (
                "dashboard/index.html",
                include_str!("site/dashboard/index.html"),
            ),
            (
                "dashboard/analytics.html",
                include_str!("site/dashboard/analytics.html"),
            ),
            (
                "dashboard/settings.html",
                include_str!("site/dashboard/settings.html"),
            ),
        ])?;

        tera.register_filter("money", money_filter);
        tera.register_filter("number", number_filter);
        tera.register_filter("date_format", date_format_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> tera::Result<String> {
        self.tera.render(template_name, context)
    }
}

/// Tera filter: format cents as dollars
fn money_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let cents = tera::try_get_value!("money", "value", i64, value);
    Ok(tera::Value::String(format_money(cents)))
}

/// Tera filter: group a count by thousands
fn number_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let count = tera::try_get_value!("number", "value", u64, value);
    Ok(tera::Value::String(format_number(count)))
}

/// Tera filter: reformat a `YYYY-MM-DD` date string
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let formatted = match args.get("format") {
        Some(val) => {
            let format = tera::try_get_value!("date_format", "format", String, val);
            format_date(&s, &format)
        }
        None => long_date(&s),
    };

    // Anything that is not a calendar date is shown as-is
    Ok(tera::Value::String(formatted.unwrap_or(s)))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub url: String,
    pub date_format: String,
    pub menu: Vec<crate::config::MenuItem>,
}

impl From<&SiteConfig> for ConfigData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            tagline: config.tagline.clone(),
            description: config.description.clone(),
            url: config.url.clone(),
            date_format: config.date_format.clone(),
            menu: config.menu.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub category: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryData {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: String,
    pub note: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopPage {
    pub path: String,
    pub views: u64,
    pub percentage: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingToggle {
    pub name: String,
    pub description: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityItem {
    pub action: String,
    pub time: String,
    pub kind: String,
}
