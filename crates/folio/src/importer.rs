//! Pipeline orchestration for one interactive session.
//!
//! An [`Importer`] runs the whole pipeline for one URL: classify, fetch,
//! derive the note target, synthesize the note, persist. Stages run
//! strictly in sequence; no stage retries a prior stage, and there is no
//! timeout or cancellation — a hung network call blocks the run.
//!
//! The importer owns an explicit session state ([`SessionState`]) standing
//! in for the host's "import in flight" guard: a re-entrant trigger while a
//! run is active (a double key-press, say) is ignored and reported as
//! [`ImportOutcome::Busy`]. The guard is local to this session only. Across
//! sessions the filesystem is the only shared state, so two concurrent runs
//! on the same identifier race on the existence check; the loser sees
//! [`ImportOutcome::AlreadyExists`], which is an accepted limitation.

use super::*;
use crate::{
  note::NoteTarget,
  retriever::fetch_metadata,
  source::SourceRef,
  vault::{ArtifactWriter, Vault},
};

/// Whether an import is currently in flight in this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
  /// No run in flight; imports are accepted.
  Idle,
  /// A run is in flight; further triggers are ignored.
  Running,
}

/// The signaled result of a pipeline run.
///
/// None of these are errors: an existing note redirects the user to it, and
/// a busy session simply drops the duplicate trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
  /// A new note was created at this path; the caller should open it.
  Created(PathBuf),
  /// A note already existed at this path and was left untouched; the
  /// caller should open the existing file.
  AlreadyExists(PathBuf),
  /// A run was already in flight; this trigger was ignored.
  Busy,
}

/// Runs the import pipeline for one interactive session.
pub struct Importer<V: Vault> {
  /// Terminal pipeline stage, which also owns the settings.
  writer: ArtifactWriter<V>,
  /// Session-local re-entrancy guard.
  state:  SessionState,
}

impl<V: Vault> Importer<V> {
  /// Creates an importer over the given vault and settings.
  pub fn new(vault: V, config: crate::config::Config) -> Self {
    Self { writer: ArtifactWriter::new(vault, config), state: SessionState::Idle }
  }

  /// The current session state.
  pub fn state(&self) -> SessionState { self.state }

  /// Imports one paper URL end to end.
  ///
  /// Trims and lower-cases the input, classifies it, fetches metadata,
  /// derives the note target, and hands off to the artifact writer. The
  /// session guard is held for the duration of the run and released on
  /// both success and failure.
  ///
  /// # Errors
  ///
  /// Returns [`FolioError::UnsupportedSource`] before any network call when
  /// the URL matches no known source, and the fetch/write stages' errors
  /// otherwise. No partial note is written on any error path.
  pub async fn import(&mut self, raw_url: &str) -> Result<ImportOutcome> {
    if self.state == SessionState::Running {
      debug!("import already in flight, ignoring trigger");
      return Ok(ImportOutcome::Busy);
    }

    self.state = SessionState::Running;
    let result = self.run(raw_url).await;
    self.state = SessionState::Idle;
    result
  }

  /// The guarded pipeline body.
  async fn run(&self, raw_url: &str) -> Result<ImportOutcome> {
    let input = raw_url.trim().to_lowercase();

    let source = SourceRef::classify(&input);
    if source == SourceRef::Unsupported {
      return Err(FolioError::UnsupportedSource);
    }
    debug!("classified {input} as {source}");

    let paper = fetch_metadata(&source).await?;
    let target = NoteTarget::from_title(&paper.title);
    self.writer.write(&paper, &target).await
  }
}
