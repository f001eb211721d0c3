//! Error types for the foliod CLI.

use thiserror::Error;

/// Result type alias used for the CLI.
pub type Result<T> = core::result::Result<T, FoliodError>;

/// Errors that can occur while running CLI commands.
#[derive(Error, Debug)]
pub enum FoliodError {
  /// An error bubbled up from the folio library.
  #[error(transparent)]
  Folio(#[from] folio::error::FolioError),

  /// A filesystem operation in the CLI layer failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// An interactive prompt failed (e.g. the terminal went away).
  #[error(transparent)]
  Dialoguer(#[from] dialoguer::Error),
}
