//! Error types for the folio library.
//!
//! One enum covers every failure mode of the import pipeline: URL
//! classification, upstream API access, response parsing, and artifact
//! persistence. Note that "a note already exists at the target path" is
//! deliberately *not* an error — it is a normal, signaled outcome of the
//! pipeline (see [`crate::importer::ImportOutcome::AlreadyExists`]), since
//! redirecting the user to their existing note is expected behavior.
//!
//! # Examples
//!
//! ```no_run
//! use folio::prelude::*;
//!
//! # async fn example(mut importer: folio::importer::Importer<folio::vault::LocalVault>) {
//! match importer.import("https://example.com/not-a-paper").await {
//!   Err(FolioError::UnsupportedSource) => println!("Not a supported paper URL"),
//!   Err(FolioError::Network(e)) => println!("Network error: {e}"),
//!   Err(e) => println!("Other error: {e}"),
//!   Ok(outcome) => println!("{outcome:?}"),
//! }
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`folio`](crate) crate.
pub type Result<T> = core::result::Result<T, FolioError>;

/// Errors that can occur while importing a paper.
///
/// Variants map onto the pipeline's failure taxonomy:
/// - [`FolioError::UnsupportedSource`] aborts before any network call
/// - [`FolioError::Api`] and [`FolioError::MissingField`] are upstream
///   failures (bad status, malformed body, structurally absent fields)
/// - [`FolioError::Network`] and [`FolioError::Path`] wrap transport and
///   filesystem failures
///
/// No partial note is ever written on any of these paths; the only artifact
/// that may outlive a failed run is a PDF cached before note persistence
/// failed.
#[derive(Error, Debug)]
pub enum FolioError {
  /// The URL matches none of the supported paper sources.
  ///
  /// Surfaced to the user before any network call is made. This is the
  /// normal outcome for arbitrary non-paper URLs, not a bug.
  #[error("URL does not match any supported paper source (arXiv, ACL Anthology, Semantic Scholar)")]
  UnsupportedSource,

  /// An upstream API returned an error response.
  ///
  /// Covers non-success HTTP statuses, response bodies that fail to parse,
  /// and Graph API responses carrying a top-level `error` field (which the
  /// API returns with a 200 status). The string holds the detail for
  /// logging; the user sees a single generic message.
  #[error("API error: {0}")]
  Api(String),

  /// A structurally required field was absent from an otherwise
  /// well-formed upstream response.
  #[error("Upstream response is missing required field: {0}")]
  MissingField(&'static str),

  /// A network request failed.
  ///
  /// This can occur when:
  /// - The network is unavailable
  /// - The server is unreachable
  /// - TLS/SSL errors occur
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// A filesystem operation failed.
  ///
  /// This occurs when creating the note or PDF file fails, or when the
  /// configuration file cannot be read or written.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// The configuration file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The configuration could not be serialized for writing.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// A configuration value is invalid or the environment is unusable.
  #[error("{0}")]
  Config(String),
}
