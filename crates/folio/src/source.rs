//! URL classification and identifier extraction.
//!
//! The first pipeline stage: given a raw URL (trimmed and lower-cased by
//! the caller), decide which upstream source it belongs to and pull out the
//! source-native identifier. Classification is substring matching on the
//! host name, first match wins; anything unmatched is [`SourceRef::Unsupported`],
//! which is a normal return value rather than an error — the caller surfaces
//! a message and stops before any network call.
//!
//! # Examples
//!
//! ```
//! use folio::source::SourceRef;
//!
//! assert_eq!(
//!   SourceRef::classify("https://arxiv.org/abs/2301.07041"),
//!   SourceRef::Arxiv("2301.07041".to_string())
//! );
//! assert_eq!(
//!   SourceRef::classify("https://aclanthology.org/2020.acl-main.1/"),
//!   SourceRef::AclAnthology("2020.acl-main.1".to_string())
//! );
//! assert_eq!(SourceRef::classify("https://example.com/paper"), SourceRef::Unsupported);
//! ```

use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

/// A classified paper reference: the upstream source plus the
/// source-native identifier extracted from the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
  /// arXiv.org, identified by an arXiv id (e.g. `2301.07041`).
  Arxiv(String),
  /// ACL Anthology, identified by an anthology id (e.g. `2020.acl-main.1`).
  /// Resolved through the Semantic Scholar Graph API.
  AclAnthology(String),
  /// Semantic Scholar, identified by a paper id (SHA-like hex string).
  SemanticScholar(String),
  /// The URL matches no supported source.
  Unsupported,
}

impl SourceRef {
  /// Classifies an input URL and extracts its identifier.
  ///
  /// Host detection is substring matching (`arxiv`, `aclanthology`,
  /// `semanticscholar`), first match wins. The identifier is the last
  /// `/`-delimited path segment after stripping a single trailing `/`,
  /// with a `.pdf` suffix removed so arXiv PDF-direct links classify the
  /// same as abstract pages.
  ///
  /// Bare arXiv identifiers (new-style `2301.07041` or old-style
  /// `math.ag/0601001`) are also accepted, so an id pasted without its URL
  /// still resolves.
  pub fn classify(input: &str) -> Self {
    lazy_static! {
      /// New-style arXiv identifier, e.g. `2301.07041`.
      static ref ARXIV_NEW: Regex = Regex::new(r"^(\d{4}\.\d{4,5})(v\d+)?$").unwrap();
      /// Old-style arXiv identifier, e.g. `math.ag/0601001`.
      static ref ARXIV_OLD: Regex = Regex::new(r"^([a-z-]+(\.[a-z]{2})?/\d{7})$").unwrap();
    }

    let lowered = input.to_ascii_lowercase();
    if lowered.contains("arxiv") {
      Self::Arxiv(extract_identifier(input))
    } else if lowered.contains("aclanthology") {
      Self::AclAnthology(extract_identifier(input))
    } else if lowered.contains("semanticscholar") {
      Self::SemanticScholar(extract_identifier(input))
    } else if ARXIV_NEW.is_match(&lowered) || ARXIV_OLD.is_match(&lowered) {
      Self::Arxiv(input.to_string())
    } else {
      Self::Unsupported
    }
  }
}

impl Display for SourceRef {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SourceRef::Arxiv(_) => write!(f, "arXiv"),
      SourceRef::AclAnthology(_) => write!(f, "ACL Anthology"),
      SourceRef::SemanticScholar(_) => write!(f, "Semantic Scholar"),
      SourceRef::Unsupported => write!(f, "unsupported"),
    }
  }
}

/// Takes the last path segment of a URL as the identifier.
///
/// Strips one trailing `/` first, then a `.pdf` suffix if present
/// (arXiv serves `/pdf/<id>.pdf` direct links).
fn extract_identifier(input: &str) -> String {
  let trimmed = input.strip_suffix('/').unwrap_or(input);
  let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);
  segment.strip_suffix(".pdf").unwrap_or(segment).to_string()
}
