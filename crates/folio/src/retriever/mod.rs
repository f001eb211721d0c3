//! Per-source metadata retrieval.
//!
//! Each supported source has an adapter that issues one HTTP GET and
//! normalizes the response into a [`PaperMetadata`]:
//!
//! - [`arxiv::ArxivFetcher`] queries the arXiv Atom API and parses XML
//! - [`semantic_scholar::SemanticScholarFetcher`] queries the Semantic
//!   Scholar Graph API and parses JSON; ACL Anthology identifiers are
//!   resolved through the same endpoint using the `ACL:` prefix
//!
//! [`fetch_metadata`] dispatches on the classified [`SourceRef`]. Any
//! network error, non-success status, or structurally missing field aborts
//! the pipeline with a single error — no partial note is written.

use super::*;
use crate::source::SourceRef;

pub mod arxiv;
pub mod semantic_scholar;

pub use arxiv::ArxivFetcher;
pub use semantic_scholar::SemanticScholarFetcher;

/// Fetches metadata for a classified paper reference.
///
/// arXiv identifiers go to the Atom API; ACL Anthology and native Semantic
/// Scholar identifiers both go to the Graph API, disambiguated by an
/// identifier prefix (`ACL:<id>` vs. the bare id).
///
/// # Errors
///
/// Returns [`FolioError::UnsupportedSource`] for an unclassified reference,
/// and the adapter's error for any fetch or parse failure.
pub async fn fetch_metadata(source: &SourceRef) -> Result<PaperMetadata> {
  match source {
    SourceRef::Arxiv(id) => ArxivFetcher::new().fetch(id).await,
    SourceRef::AclAnthology(id) =>
      SemanticScholarFetcher::new().fetch(&format!("ACL:{id}")).await,
    SourceRef::SemanticScholar(id) => SemanticScholarFetcher::new().fetch(id).await,
    SourceRef::Unsupported => Err(FolioError::UnsupportedSource),
  }
}
