//! # partsel CLI Module
//!
//! This module implements the CLI interface for partsel.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `status` - Show catalog status
//! - `init` - Initialize a new database
//! - `import` - Import components from a JSON file
//! - `list` - List cataloged components
//! - `select` - Rank a family against a requirements file
//! - `report` - Evaluate one component and write its spec sheet or datasheet
//! - `bom` - Render a bill of materials
//! - `history` - Show recent selections

mod commands;

use crate::config::AppConfig;
use clap::{Parser, Subcommand, ValueEnum};
use partsel_core::PartselError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// partsel - COTS component selection
///
/// Scores catalog bearings, motors, gears, seals and fasteners against
/// engineering requirements and renders reports and bills of materials.
#[derive(Parser, Debug)]
#[command(name = "partsel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the catalog database
    #[arg(short = 'D', long, global = true, default_value = "partsel.db")]
    pub database: PathBuf,

    /// Storage backend
    #[arg(short = 'B', long, global = true, value_enum, default_value_t = Backend::Redb)]
    pub backend: Backend,

    /// Path to a TOML config file (default: partsel.toml if present)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the catalog lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// ACID database file
    Redb,
    /// Snapshot file rewritten after every change
    File,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Redb => "redb",
            Backend::File => "file",
        }
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Specification sheet CSV
    Csv,
    /// Plain-text technical datasheet
    Text,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to (overrides config)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show catalog status
    Status,

    /// Initialize a new empty database
    Init {
        /// Overwrite an existing database
        #[arg(short, long)]
        force: bool,
    },

    /// Import components from a JSON array
    Import {
        /// Path to the catalog file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List cataloged components
    List {
        /// Component family (bearing, motor, gear, seal, fastener)
        #[arg(short = 't', long)]
        family: Option<String>,

        /// Case-insensitive search over name, part number and manufacturer
        #[arg(short, long)]
        search: Option<String>,

        /// Exact manufacturer
        #[arg(short, long)]
        manufacturer: Option<String>,
    },

    /// Rank a family against a requirements file
    Select {
        /// Component family
        #[arg(short = 't', long)]
        family: String,

        /// JSON object of requirement fields
        #[arg(short, long)]
        requirements: PathBuf,
    },

    /// Evaluate one component and write a report
    Report {
        /// Component family
        #[arg(short = 't', long)]
        family: String,

        /// JSON object of requirement fields
        #[arg(short, long)]
        requirements: PathBuf,

        /// Component id
        #[arg(short, long)]
        component: u64,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
        format: ReportFormat,
    },

    /// Render a bill of materials CSV
    Bom {
        /// JSON file with `projectName` and `components`
        #[arg(short, long)]
        file: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show recent selections
    History {
        /// Maximum records to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), PartselError> {
    let db = cli.database.as_path();
    let backend = cli.backend;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port }) => {
            let mut config = AppConfig::load(cli.config.as_deref())?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            cmd_server(db, backend, config).await
        }
        Some(Commands::Status) => cmd_status(db, backend, json_mode),
        Some(Commands::Init { force }) => cmd_init(db, backend, force),
        Some(Commands::Import { file }) => cmd_import(db, backend, json_mode, &file),
        Some(Commands::List {
            family,
            search,
            manufacturer,
        }) => cmd_list(db, backend, json_mode, family, search, manufacturer),
        Some(Commands::Select {
            family,
            requirements,
        }) => cmd_select(db, backend, json_mode, &family, &requirements),
        Some(Commands::Report {
            family,
            requirements,
            component,
            output,
            format,
        }) => cmd_report(db, backend, &family, &requirements, component, &output, format),
        Some(Commands::Bom { file, output }) => cmd_bom(&file, &output),
        Some(Commands::History { limit }) => cmd_history(db, backend, json_mode, limit),
        None => cmd_status(db, backend, json_mode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "partsel", "select", "-t", "bearing", "-r", "req.json", "--backend", "file",
            "--json-mode",
        ])
        .map_err(|e| e.to_string());
        let Ok(cli) = cli else {
            unreachable!("parse failed: {cli:?}");
        };
        assert_eq!(cli.backend, Backend::File);
        assert!(cli.json_mode);
        assert!(matches!(cli.command, Some(Commands::Select { ref family, .. }) if family == "bearing"));
    }

    #[test]
    fn report_format_defaults_to_csv() {
        let parsed = Cli::try_parse_from([
            "partsel", "report", "-t", "motor", "-r", "r.json", "-c", "3", "-o", "out.csv",
        ]);
        assert!(matches!(
            parsed,
            Ok(Cli { command: Some(Commands::Report { format: ReportFormat::Csv, component: 3, .. }), .. })
        ));
    }

    #[test]
    fn unknown_backend_rejected() {
        assert!(Cli::try_parse_from(["partsel", "--backend", "sqlite", "status"]).is_err());
    }
}
