//! # partsel - COTS Component Selection
//!
//! The main binary for the partsel selection engine.
//!
//! This application provides:
//! - HTTP REST API server (axum-based)
//! - CLI interface for catalog, selection and report operations
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │               apps/partsel (THE BINARY)              │
//! │                                                      │
//! │   ┌─────────────┐            ┌─────────────┐         │
//! │   │    CLI      │            │  HTTP API   │         │
//! │   │   (clap)    │            │   (axum)    │         │
//! │   └──────┬──────┘            └──────┬──────┘         │
//! │          └────────────┬─────────────┘                │
//! │                       ▼                              │
//! │               ┌───────────────┐                      │
//! │               │ partsel-core  │                      │
//! │               │ (THE ENGINE)  │                      │
//! │               └───────────────┘                      │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! partsel server --host 0.0.0.0 --port 8080
//!
//! # CLI operations
//! partsel import -f demos/catalog.json
//! partsel select -t bearing -r demos/bearing-requirements.json
//! partsel bom -f demos/bom.json -o bom.csv
//! ```

use clap::Parser;
use partsel::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // PARTSEL_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("PARTSEL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "partsel=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_banner() {
    println!(
        r#"
  ┌─┐┌─┐┬─┐┌┬┐┌─┐┌─┐┬
  ├─┘├─┤├┬┘ │ └─┐├┤ │
  ┴  ┴ ┴┴└─ ┴ └─┘└─┘┴─┘

  COTS Component Selection v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
