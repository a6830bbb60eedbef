//! Locale gate (v1)
//!
//! Sits in front of a site server and makes sure every page request lands on
//! a locale-prefixed URL.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │                 LOCALE GATE                   │
//!     Client Request      │  ┌────────┐   ┌──────────┐   ┌────────────┐  │
//!     ────────────────────┼─▶│ scope  │──▶│ cookie / │──▶│  resolver  │──┼──▶ 307 + Set-Cookie
//!                         │  │ filter │   │  prefix  │   │ country →  │  │
//!                         │  └───┬────┘   └────┬─────┘   │ accept-lang│  │
//!                         │      │ excluded    │ pass    │ → default  │  │
//!                         │      ▼             ▼         └────────────┘  │
//!                         │   ┌─────────────────────┐                    │
//!     Client Response     │   │   upstream proxy    │◀───────────────────┼──── Site Server
//!     ◀───────────────────┼───│  (hyper-util client)│                    │
//!                         │   └─────────────────────┘                    │
//!                         └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use locale_gate::config;
use locale_gate::lifecycle::startup;
use locale_gate::locale::{resolve, ResolutionContext};
use locale_gate::observability::logging;

#[derive(Parser)]
#[command(name = "locale-gate")]
#[command(about = "Locale-negotiating edge gate", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults plus environment when omitted.
    #[arg(short, long, env = "LOCALE_GATE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the gate (default)
    Serve,
    /// Validate configuration and print the served locales
    Check,
    /// Resolve a locale for the given signals without starting a server
    Resolve {
        #[arg(short, long)]
        accept_language: Option<String>,
        #[arg(short = 'C', long)]
        country: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            logging::init(&config.observability);
            tracing::info!("locale-gate v{} starting", env!("CARGO_PKG_VERSION"));
            startup::run(config).await?;
            tracing::info!("Shutdown complete");
        }
        Commands::Check => {
            println!("configuration ok");
            println!("locales: {}", config.locale_set());
            println!("default: {}", config.locales.default_locale);
        }
        Commands::Resolve {
            accept_language,
            country,
        } => {
            let available = config.locale_set();
            let resolution = resolve(&ResolutionContext {
                available: &available,
                accept_language: accept_language.as_deref(),
                country: country.as_deref(),
                default_locale: &config.locales.default_locale,
            });
            println!("{} ({})", resolution.locale, resolution.source);
        }
    }

    Ok(())
}
