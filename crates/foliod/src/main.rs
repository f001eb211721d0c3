//! Command line host for the folio paper importer.
//!
//! This binary is the thin interactive wrapper around the `folio` library:
//! it parses arguments, loads settings, sets up logging, runs the import
//! pipeline, and presents the outcome. All the real behavior lives in the
//! library.
//!
//! # Usage
//!
//! ```bash
//! # Write a default settings file
//! folio init
//!
//! # Import a paper by URL (or bare arXiv id)
//! folio import https://arxiv.org/abs/2301.07041
//!
//! # Import and skip the PDF download prompt
//! folio import --no-pdf https://aclanthology.org/2020.acl-main.1/
//! ```
//!
//! Verbosity is controlled with `-v` flags; destructive choices (like
//! overwriting an existing settings file) always prompt.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use folio::config::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;

use crate::{commands::*, error::*};

/// Prefix for information messages
static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
static ERROR_PREFIX: &str = "✗ ";

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Turn paper URLs into structured notes")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the settings file. If not specified, uses the default
  /// platform-specific config directory.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}

/// Resolves the settings file path from the CLI override or the platform
/// default.
fn config_path(cli: &Cli) -> Result<PathBuf> {
  match &cli.config {
    Some(path) => Ok(path.clone()),
    None => Ok(Config::default_path()?),
  }
}

/// Entry point for the folio CLI.
///
/// Parses arguments, sets up logging, and dispatches to the requested
/// command. Failures print a single styled error line; full detail is
/// available at higher verbosity.
#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  setup_logging(cli.verbose);
  debug!("logging configured at verbosity {}", cli.verbose);

  let result = match &cli.command {
    Commands::Init(init_args) => init(&cli, init_args.clone()).await,
    Commands::Import(import_args) => import(&cli, import_args.clone()).await,
  };

  if let Err(e) = result {
    eprintln!("{} {e}", style(ERROR_PREFIX).red());
    std::process::exit(1);
  }
}
