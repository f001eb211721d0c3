//! CLI subcommands.

use super::*;

pub mod import;
pub mod init;

pub use import::{import, ImportArgs};
pub use init::{init, InitArgs};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Write a default settings file and create the note/PDF folders
  Init(InitArgs),

  /// Import a paper by URL (arXiv, ACL Anthology, Semantic Scholar)
  Import(ImportArgs),
}
