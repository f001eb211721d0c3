//! Metadata retrieval from the arXiv Atom API.
//!
//! Issues one GET against `https://export.arxiv.org/api/query?id_list=<id>`
//! and parses the Atom/XML response. The feed carries its own `<title>`
//! element before the entry's; deserializing into typed [`Feed`]/[`Entry`]
//! structs reads `entry/title` directly, so the feed-level title is never
//! consulted. (The historical behavior this replaces picked the *second*
//! `<title>` element by position — same result on well-formed feeds, but
//! fragile if the feed format ever reorders.)
//!
//! # Examples
//!
//! ```no_run
//! use folio::retriever::ArxivFetcher;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let paper = ArxivFetcher::new().fetch("2301.07041").await?;
//! println!("Title: {}", paper.title);
//! # Ok(())
//! # }
//! ```

use super::*;
use crate::format::collapse_whitespace;

/// The arXiv Atom query endpoint.
const ARXIV_API: &str = "https://export.arxiv.org/api/query";

/// Internal representation of the arXiv API's Atom feed response.
///
/// Only the entries are declared; the feed's own `<title>` and pagination
/// elements are ignored by the deserializer.
#[derive(Debug, Deserialize)]
struct Feed {
  /// A feed may contain multiple entries; with `id_list=<id>` we expect
  /// exactly one.
  #[serde(rename = "entry", default)]
  entries: Vec<Entry>,
}

/// One paper entry from the Atom feed.
#[derive(Debug, Deserialize)]
struct Entry {
  /// Paper title (may contain LaTeX markup and folded whitespace).
  title:     String,
  /// Paper abstract.
  summary:   Option<String>,
  /// Paper authors, in feed order.
  #[serde(rename = "author", default)]
  authors:   Vec<EntryAuthor>,
  /// Publication timestamp, RFC 3339.
  published: Option<String>,
  /// Alternate and related links; the PDF link carries `title="pdf"`.
  #[serde(rename = "link", default)]
  links:     Vec<Link>,
}

/// An author element, `<author><name>…</name></author>`.
#[derive(Debug, Deserialize)]
struct EntryAuthor {
  /// Author display name.
  name: Option<String>,
}

/// A `<link>` element with its attributes.
#[derive(Debug, Deserialize)]
struct Link {
  /// The link's `title` attribute (`"pdf"` marks the PDF link).
  #[serde(rename = "@title")]
  title: Option<String>,
  /// The link's `href` attribute.
  #[serde(rename = "@href")]
  href:  Option<String>,
}

/// Client for the arXiv Atom API.
pub struct ArxivFetcher {
  /// Internal web client reused across requests.
  client: reqwest::Client,
}

impl ArxivFetcher {
  /// Creates a new arXiv fetcher.
  pub fn new() -> Self { Self { client: reqwest::Client::new() } }

  /// Fetches and normalizes metadata for one arXiv identifier.
  ///
  /// # Errors
  ///
  /// Returns [`FolioError::Network`] for transport failures,
  /// [`FolioError::Api`] for a non-success status or unparseable feed, and
  /// [`FolioError::MissingField`] when the feed carries no entry or the
  /// entry has no usable title.
  pub async fn fetch(&self, identifier: &str) -> Result<PaperMetadata> {
    let url = format!("{ARXIV_API}?id_list={identifier}");
    debug!("fetching arXiv metadata via: {url}");

    let response = self.client.get(&url).send().await?;
    if !response.status().is_success() {
      return Err(FolioError::Api(format!("arXiv query returned {}", response.status())));
    }

    let body = response.text().await?;
    trace!("arXiv response: {body}");
    parse_atom_feed(&body, identifier)
  }
}

impl Default for ArxivFetcher {
  fn default() -> Self { Self::new() }
}

/// Normalizes a raw Atom feed body into [`PaperMetadata`].
fn parse_atom_feed(xml: &str, identifier: &str) -> Result<PaperMetadata> {
  let feed: Feed = quick_xml::de::from_str(xml)
    .map_err(|e| FolioError::Api(format!("failed to parse Atom feed: {e}")))?;

  let entry = feed.entries.into_iter().next().ok_or(FolioError::MissingField("entry"))?;

  let title = collapse_whitespace(&entry.title);
  if title.is_empty() {
    return Err(FolioError::MissingField("title"));
  }

  let authors: Vec<String> = entry
    .authors
    .into_iter()
    .filter_map(|author| author.name)
    .map(|name| name.trim().to_string())
    .filter(|name| !name.is_empty())
    .collect();

  let abstract_text =
    entry.summary.map(|summary| summary.trim().to_string()).filter(|s| !s.is_empty());

  // Truncate the RFC 3339 timestamp at the `T` separator to a bare date.
  let publication_date = entry.published.map(|published| match published.split_once('T') {
    Some((date, _)) => date.to_string(),
    None => published,
  });

  let pdf_url = entry
    .links
    .into_iter()
    .find(|link| link.title.as_deref() == Some("pdf"))
    .and_then(|link| link.href)
    .map(|href| force_https(&href));

  Ok(PaperMetadata {
    title,
    authors,
    abstract_text,
    venue: None,
    publication_date,
    source_url: format!("https://arxiv.org/abs/{identifier}"),
    pdf_url,
  })
}

/// Rewrites an `http:` scheme to `https:` so the PDF fetch never trips
/// mixed-content restrictions.
fn force_https(url: &str) -> String {
  match url.strip_prefix("http://") {
    Some(rest) => format!("https://{rest}"),
    None => url.to_string(),
  }
}
