//! Service health report

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::helpers::iso_timestamp;

/// Body of `GET /api/health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub timestamp: String,
    pub message: String,
}

impl HealthReport {
    /// Report taken at the current instant
    pub fn now(message: &str) -> Self {
        Self::at(Utc::now(), message)
    }

    pub fn at(at: DateTime<Utc>, message: &str) -> Self {
        Self {
            status: "ok",
            timestamp: iso_timestamp(&at),
            message: message.to_string(),
        }
    }
}
