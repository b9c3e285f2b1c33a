//! Binary entry point for legalaid.
//!
//! This binary provides the CLI and HTTP server for the legal aid rule matcher.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

mod commands;

use clap::{Parser, Subcommand};
use commands::{cmd_ask, cmd_categories, cmd_keywords, cmd_scenarios, cmd_serve, cmd_status};
use legalaid::config::LegalAidConfig;
use legalaid::observability::{self, InitOptions};
use std::path::PathBuf;
use std::process::ExitCode;

/// Legalaid - rule-matching legal aid expert system.
#[derive(Parser)]
#[command(name = "legalaid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API.
    Serve {
        /// Bind host (overrides config).
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config).
        #[arg(short, long)]
        port: Option<u16>,

        /// Rule file (overrides config).
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },

    /// Answer one question and print the advice as JSON.
    Ask {
        /// Category label (aliases such as "landlord" are accepted).
        #[arg(short = 'C', long)]
        category: String,

        /// The question.
        query: String,
    },

    /// Print the keywords extracted from a text, one per line.
    Keywords {
        /// Text to analyze.
        text: String,
    },

    /// List rule categories.
    Categories,

    /// Print example scenarios for a category as JSON.
    Scenarios {
        /// Category label.
        category: String,
    },

    /// Show status.
    Status,
}

/// Main entry point.
#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match LegalAidConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    let expose_metrics = matches!(cli.command, Commands::Serve { .. });
    let _observability = match observability::init_from_config(
        &config.observability,
        InitOptions {
            verbose: cli.verbose,
            metrics_expose: expose_metrics,
        },
    ) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to initialize observability: {e}");
            return ExitCode::FAILURE;
        },
    };

    match run_command(cli.command, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
async fn run_command(command: Commands, config: LegalAidConfig) -> anyhow::Result<()> {
    match command {
        Commands::Serve { host, port, rules } => cmd_serve(config, host, port, rules).await,
        Commands::Ask { category, query } => cmd_ask(&config, category, query),
        Commands::Keywords { text } => cmd_keywords(&text),
        Commands::Categories => cmd_categories(&config),
        Commands::Scenarios { category } => cmd_scenarios(&config, &category),
        Commands::Status => cmd_status(&config),
    }
}
