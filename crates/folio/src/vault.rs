//! Artifact persistence: the filesystem collaborator and the terminal
//! pipeline stage.
//!
//! [`Vault`] is the narrow surface the pipeline needs from its host
//! filesystem: an existence check, a text-file create, and a binary-file
//! create. [`LocalVault`] implements it over the local filesystem.
//!
//! [`ArtifactWriter`] is the last stage of the pipeline. Its contract, in
//! order:
//!
//! 1. If a note already exists at the target path, signal
//!    [`ImportOutcome::AlreadyExists`] and write nothing. An import must
//!    never clobber a user's existing notes or annotations.
//! 2. If PDF download is enabled and the paper resolved a PDF URL, reuse a
//!    cached PDF at the deterministic path if one exists; otherwise fetch
//!    and persist it.
//! 3. Persist the note.
//! 4. Signal [`ImportOutcome::Created`].
//!
//! A note-persistence failure after a successful PDF fetch leaves the PDF
//! behind; the cache entry is keyed only by path, so a later retry reuses
//! it.

use async_trait::async_trait;

use super::*;
use crate::{
  config::Config,
  importer::ImportOutcome,
  note::{ArtifactList, NoteDocument, NoteTarget},
};

/// The filesystem surface consumed from the host.
///
/// Existence at a path is the sole cache-hit signal for PDFs — no checksum
/// or freshness check is ever performed.
#[async_trait]
pub trait Vault: Send + Sync {
  /// Whether a file already exists at `path`.
  fn exists(&self, path: &Path) -> bool;

  /// Creates a UTF-8 text file at `path`, creating parent directories as
  /// needed.
  async fn create_note(&self, path: &Path, content: &str) -> Result<()>;

  /// Creates a binary file at `path`, creating parent directories as
  /// needed.
  async fn create_binary(&self, path: &Path, bytes: &[u8]) -> Result<()>;
}

/// [`Vault`] implementation over the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalVault;

#[async_trait]
impl Vault for LocalVault {
  fn exists(&self, path: &Path) -> bool { path.exists() }

  async fn create_note(&self, path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, content).await?;
    Ok(())
  }

  async fn create_binary(&self, path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, bytes).await?;
    Ok(())
  }
}

/// Terminal pipeline stage: persists the note and, when enabled, the PDF.
pub struct ArtifactWriter<V: Vault> {
  /// Host filesystem surface.
  vault:  V,
  /// Web client for PDF downloads.
  client: reqwest::Client,
  /// User settings (target folders, PDF toggle, `discovered_via`).
  config: Config,
}

impl<V: Vault> ArtifactWriter<V> {
  /// Creates a writer over the given vault and settings.
  pub fn new(vault: V, config: Config) -> Self {
    Self { vault, client: reqwest::Client::new(), config }
  }

  /// Runs the write contract for one paper.
  ///
  /// Composes the note only after the PDF step so the frontmatter
  /// `artifacts` field can reference the cached file.
  ///
  /// # Errors
  ///
  /// Propagates PDF fetch failures and filesystem failures. A PDF cached
  /// before a later failure is left in place.
  pub async fn write(&self, paper: &PaperMetadata, target: &NoteTarget) -> Result<ImportOutcome> {
    let note_path = self.config.note_path(&target.basename);
    if self.vault.exists(&note_path) {
      debug!("note already exists at {}", note_path.display());
      return Ok(ImportOutcome::AlreadyExists(note_path));
    }

    let artifacts = if self.config.download_pdfs {
      match &paper.pdf_url {
        Some(pdf_url) => {
          self.try_fetch_pdf(pdf_url, target).await?;
          ArtifactList::Pdf(target.pdf_filename())
        },
        None => ArtifactList::Empty,
      }
    } else {
      ArtifactList::Omitted
    };

    let document =
      NoteDocument::build(paper, target, self.config.discovered_via.as_deref(), &artifacts);
    self.vault.create_note(&note_path, &document.content).await?;
    debug!("note created at {}", note_path.display());

    Ok(ImportOutcome::Created(note_path))
  }

  /// Resolves the PDF for `target`, downloading it only on a cache miss.
  ///
  /// Returns the deterministic cache path either way. A pre-existing file
  /// at that path short-circuits before any network call.
  pub async fn try_fetch_pdf(&self, pdf_url: &str, target: &NoteTarget) -> Result<PathBuf> {
    let pdf_path = self.config.pdf_path(&target.basename);
    if self.vault.exists(&pdf_path) {
      debug!("PDF cache hit at {}", pdf_path.display());
      return Ok(pdf_path);
    }

    debug!("downloading PDF from {pdf_url}");
    let response = self.client.get(pdf_url).send().await?;
    if !response.status().is_success() {
      return Err(FolioError::Api(format!("PDF download returned {}", response.status())));
    }

    let bytes = response.bytes().await?;
    self.vault.create_binary(&pdf_path, &bytes).await?;
    Ok(pdf_path)
  }
}
