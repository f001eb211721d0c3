//! The unified paper metadata record produced by the retrievers.
//!
//! Every source adapter, whatever the wire format it parses, normalizes its
//! response into a single [`PaperMetadata`] value. The record is immutable
//! once built: later pipeline stages only read from it.

use super::*;

/// Normalized metadata for one academic paper.
///
/// Produced by [`crate::retriever`], consumed by the note-synthesis stages.
/// Only `title`, `authors`, and `source_url` are always present; every other
/// field is independently nullable, and no field's absence blocks note
/// creation.
///
/// # Examples
///
/// ```
/// use folio::paper::PaperMetadata;
///
/// let paper = PaperMetadata {
///   title:            "Attention Is All You Need".to_string(),
///   authors:          vec!["Ashish Vaswani".to_string()],
///   abstract_text:    None,
///   venue:            Some("NeurIPS 2017".to_string()),
///   publication_date: Some("2017-06-12".to_string()),
///   source_url:       "https://arxiv.org/abs/1706.03762".to_string(),
///   pdf_url:          Some("https://arxiv.org/pdf/1706.03762".to_string()),
/// };
/// assert!(!paper.title.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperMetadata {
  /// Whitespace-collapsed, non-empty title. Sources that omit the title
  /// entirely yield the literal sentinel `"undefined"`.
  pub title:            String,
  /// Author display names, trimmed, in source order. May be empty.
  pub authors:          Vec<String>,
  /// Full abstract text, if the source provides one.
  pub abstract_text:    Option<String>,
  /// Venue label, possibly combined with a publication year
  /// (e.g. `"EMNLP 2021"`).
  pub venue:            Option<String>,
  /// Publication date in bare ISO form, `YYYY-MM-DD`.
  pub publication_date: Option<String>,
  /// Canonical URL(s) to cite in the note. May hold several equivalent
  /// URLs separated by newlines (e.g. a Semantic Scholar page plus the
  /// paper's arXiv abstract page).
  pub source_url:       String,
  /// Direct PDF link, present only for arXiv-style sources. Always an
  /// `https:` URL by the time it lands here.
  pub pdf_url:          Option<String>,
}
