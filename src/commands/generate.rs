//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::App;

/// Export the whole site into the public directory
pub async fn run(app: &App) -> Result<()> {
    let start = std::time::Instant::now();

    let generator = Generator::new(app)?;
    let written = generator.generate(&app.public_dir).await?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} files into {:?} in {:.2}s",
        written,
        app.public_dir,
        duration.as_secs_f64()
    );

    Ok(())
}
