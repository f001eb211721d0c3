//! Text normalization helpers for note naming and frontmatter values.
//!
//! Two concerns live here: collapsing the whitespace runs that upstream
//! APIs love to embed in titles and venue labels, and deriving a
//! filesystem-safe note basename from a raw title.
//!
//! Title sanitization applies exactly three rules, in order:
//!
//! 1. every `/` or `\` becomes `_`
//! 2. every `": "` (colon-space) becomes `" – "`, keeping subtitle
//!    separators readable
//! 3. any remaining `:` becomes `-`
//!
//! No other characters are altered, and the function is idempotent.

use lazy_static::lazy_static;
use regex::Regex;

/// Collapses runs of whitespace (including newlines) to single spaces and
/// trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
  lazy_static! {
    /// Any run of whitespace characters.
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
  }
  WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Derives a filesystem-safe note basename from a raw title.
///
/// # Examples
///
/// ```
/// use folio::format::normalize_title;
///
/// assert_eq!(normalize_title("BERT: Pre-training"), "BERT – Pre-training");
/// assert_eq!(normalize_title("I/O Models"), "I_O Models");
/// assert_eq!(normalize_title("12:30"), "12-30");
/// ```
pub fn normalize_title(title: &str) -> String {
  title.replace(['/', '\\'], "_").replace(": ", " – ").replace(':', "-")
}
