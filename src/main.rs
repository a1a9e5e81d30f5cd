//! CoastWatch CLI
//!
//! - `coastwatch serve`: run the host server for the UI bundle
//! - `coastwatch config`: print or write a default config file
//! - `coastwatch routes`: list the client routes and their access rules

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use coastwatch::config::{generate_default_config, Config, LoadReport};
use coastwatch::server::routes::spa::CLIENT_ROUTES;
use coastwatch::server::{serve, AppState};
use coastwatch::telemetry::init_logging;

#[derive(Parser)]
#[command(name = "coastwatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Ocean hazard reporting prototype")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the UI bundle
    Serve {
        /// Config file (default: search standard locations)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Built UI bundle directory
        #[arg(long)]
        dist: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List client routes
    Routes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            dist,
        } => {
            let (mut config, report) = match config {
                Some(path) => (Config::load_with_env(&path)?, LoadReport::file(path)),
                None => Config::load_default(),
            };
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dist) = dist {
                config.server.dist_dir = dist;
            }

            init_logging(&config.logging).context("failed to initialize logging")?;
            tracing::info!("Starting CoastWatch v{}", env!("CARGO_PKG_VERSION"));
            report.log();

            serve(AppState::new(config.server)).await?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }

        Commands::Routes => {
            println!("{:<12} {:<22} {}", "PATH", "VIEW", "ACCESS");
            for route in CLIENT_ROUTES {
                let access = match route.requires {
                    Some(role) => format!("{} session (else redirect to /login)", role),
                    None => "anyone".to_string(),
                };
                println!("{:<12} {:<22} {}", route.path, route.view, access);
            }
        }
    }

    Ok(())
}
