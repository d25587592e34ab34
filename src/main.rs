//! CLI entry point for evolve-ui

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "evolve-ui")]
#[command(version)]
#[command(about = "A server-rendered web starter with a blog, a dashboard and a JSON API", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to the configured address)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Export every page as static files
    #[command(alias = "g")]
    Generate,

    /// Remove the exported files
    Clean,

    /// List site information
    List {
        /// Type of content to list (product, post, route)
        #[arg(default_value = "product")]
        r#type: String,
    },

    /// Show how a blog post's content is classified
    Render {
        /// Slug of the post
        slug: String,

        /// Print the full rendered page instead of the block list
        #[arg(long)]
        html: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "evolve_ui=debug,tower_http=debug,info"
    } else {
        "evolve_ui=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Server { port, ip } => {
            let app = evolve_ui::App::new(&base_dir)?;
            let port = port.unwrap_or(app.config.port);
            let ip = ip.unwrap_or_else(|| app.config.ip.clone());

            tracing::info!("Starting server at http://{}:{}", ip, port);
            evolve_ui::server::start(&app, &ip, port).await?;
        }

        Commands::Generate => {
            let app = evolve_ui::App::new(&base_dir)?;
            tracing::info!("Generating static files...");
            app.generate().await?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            let app = evolve_ui::App::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            app.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let app = evolve_ui::App::new(&base_dir)?;
            evolve_ui::commands::list::run(&app, &r#type).await?;
        }

        Commands::Render { slug, html } => {
            let app = evolve_ui::App::new(&base_dir)?;
            evolve_ui::commands::render::run(&app, &slug, html).await?;
        }

        Commands::Version => {
            println!("evolve-ui version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
