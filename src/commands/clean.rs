//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::App;

/// Remove the exported site
pub fn run(app: &App) -> Result<()> {
    if app.public_dir.exists() {
        fs::remove_dir_all(&app.public_dir)?;
        tracing::info!("Deleted: {:?}", app.public_dir);
    } else {
        tracing::debug!("Nothing to clean at {:?}", app.public_dir);
    }

    Ok(())
}
