//! Paper-to-note ingestion library.
//!
//! `folio` turns a URL pointing at an academic paper into a structured,
//! locally persisted Markdown note, optionally caching the paper's PDF
//! alongside it. It supports papers from:
//!
//! - arXiv (abstract pages and direct PDF links)
//! - ACL Anthology (resolved through the Semantic Scholar Graph API)
//! - Semantic Scholar (native paper pages)
//!
//! # Pipeline
//!
//! An import is a straight line through five stages, each stage's output
//! feeding the next:
//!
//! 1. [`source`]: classify the URL and extract the source-native identifier
//! 2. [`retriever`]: fetch and normalize metadata into a [`PaperMetadata`]
//! 3. [`format`]: derive a filesystem-safe note basename from the title
//! 4. [`note`]: assemble canonical YAML frontmatter and the note body
//! 5. [`vault`]: persist the note (and optionally the PDF), never
//!    overwriting an existing note
//!
//! # Getting Started
//!
//! ```no_run
//! use folio::{config::Config, importer::Importer, vault::LocalVault};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let config = Config::default();
//!   let mut importer = Importer::new(LocalVault, config);
//!
//!   match importer.import("https://arxiv.org/abs/2301.07041").await? {
//!     folio::importer::ImportOutcome::Created(path) => {
//!       println!("Note created at {}", path.display());
//!     },
//!     outcome => println!("{outcome:?}"),
//!   }
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`source`]: URL classification and identifier extraction
//! - [`retriever`]: per-source metadata fetchers (arXiv Atom, Semantic
//!   Scholar Graph API)
//! - [`paper`]: the unified [`PaperMetadata`] record
//! - [`format`]: title sanitization and whitespace handling
//! - [`note`]: frontmatter and note body synthesis
//! - [`vault`]: filesystem collaborator and artifact persistence
//! - [`importer`]: the pipeline orchestrator and its session guard
//! - [`config`]: persisted user settings
//! - [`prelude`]: common traits and types for ergonomic imports

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub mod config;
pub mod error;
pub mod format;
pub mod importer;
pub mod note;
pub mod paper;
pub mod retriever;
pub mod source;
pub mod vault;

use crate::{error::*, paper::PaperMetadata};

/// Common traits and types for ergonomic imports.
///
/// Brings in the pieces nearly every consumer of the library touches:
/// the error type, the `Result` alias, the pipeline outcome, and the
/// filesystem collaborator trait.
pub mod prelude {
  pub use crate::{
    error::{FolioError, Result},
    importer::ImportOutcome,
    paper::PaperMetadata,
    vault::Vault,
  };
}
