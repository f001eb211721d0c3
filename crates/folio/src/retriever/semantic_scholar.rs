//! Metadata retrieval from the Semantic Scholar Graph API.
//!
//! One GET against the Graph API paper endpoint with a fixed field list
//! resolves both native Semantic Scholar paper ids and ACL Anthology ids
//! (the latter prefixed with `ACL:` by the dispatcher). The API signals
//! some failures with a 200 status and a top-level `error` field in the
//! body, so that case is checked explicitly after parsing.
//!
//! When the response carries `externalIds`, equivalent arXiv and ACL
//! Anthology URLs are derived and appended to the canonical URL, one per
//! line, so the note cites every known home of the paper.

use super::*;
use crate::format::collapse_whitespace;

/// The Graph API paper endpoint.
const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1/paper";

/// The fixed field list requested from the Graph API.
const GRAPH_FIELDS: &str = "authors,title,abstract,url,venue,year,publicationDate,externalIds";

/// Internal representation of a Graph API paper response.
#[derive(Debug, Deserialize)]
struct GraphPaper {
  /// Error message the API returns in the body, possibly alongside a 200
  /// status.
  error:            Option<String>,
  /// Paper title; may be null.
  title:            Option<String>,
  /// Paper authors, in API order.
  #[serde(default)]
  authors:          Vec<GraphAuthor>,
  /// Abstract text.
  #[serde(rename = "abstract")]
  abstract_text:    Option<String>,
  /// Canonical Semantic Scholar URL for the paper.
  url:              Option<String>,
  /// Venue label; may be an empty string.
  venue:            Option<String>,
  /// Publication year.
  year:             Option<i64>,
  /// Publication date, ISO `YYYY-MM-DD`.
  #[serde(rename = "publicationDate")]
  publication_date: Option<String>,
  /// Cross-source identifiers for the same paper.
  #[serde(rename = "externalIds")]
  external_ids:     Option<ExternalIds>,
}

/// One author record from the Graph API.
#[derive(Debug, Deserialize)]
struct GraphAuthor {
  /// Author display name.
  name: Option<String>,
}

/// The subset of `externalIds` keys the pipeline derives URLs from.
#[derive(Debug, Deserialize)]
struct ExternalIds {
  /// arXiv identifier, when the paper is also on arXiv.
  #[serde(rename = "ArXiv")]
  arxiv: Option<String>,
  /// ACL Anthology identifier, when the paper is in the anthology.
  #[serde(rename = "ACL")]
  acl:   Option<String>,
}

/// Client for the Semantic Scholar Graph API.
pub struct SemanticScholarFetcher {
  /// Internal web client reused across requests.
  client: reqwest::Client,
}

impl SemanticScholarFetcher {
  /// Creates a new Graph API fetcher.
  pub fn new() -> Self { Self { client: reqwest::Client::new() } }

  /// Fetches and normalizes metadata for one (possibly prefixed)
  /// identifier.
  ///
  /// The identifier is passed through verbatim: `ACL:<id>` for ACL
  /// Anthology papers, the bare paper id for native Semantic Scholar
  /// lookups.
  ///
  /// # Errors
  ///
  /// Returns [`FolioError::Network`] for transport failures and
  /// [`FolioError::Api`] for a non-success status, an unparseable body, or
  /// a body carrying the API's `error` field.
  pub async fn fetch(&self, identifier: &str) -> Result<PaperMetadata> {
    let url = format!("{GRAPH_API}/{identifier}?fields={GRAPH_FIELDS}");
    debug!("fetching Semantic Scholar metadata via: {url}");

    let response = self.client.get(&url).send().await?;
    if !response.status().is_success() {
      return Err(FolioError::Api(format!(
        "Semantic Scholar query returned {}",
        response.status()
      )));
    }

    let data = response.bytes().await?;
    trace!("Semantic Scholar response: {}", String::from_utf8_lossy(&data));
    parse_graph_paper(&data)
  }
}

impl Default for SemanticScholarFetcher {
  fn default() -> Self { Self::new() }
}

/// Normalizes a raw Graph API body into [`PaperMetadata`].
fn parse_graph_paper(data: &[u8]) -> Result<PaperMetadata> {
  let paper: GraphPaper = serde_json::from_slice(data)
    .map_err(|e| FolioError::Api(format!("failed to parse Graph API response: {e}")))?;

  // The API reports "paper not found" and similar in-band.
  if let Some(error) = paper.error {
    return Err(FolioError::Api(error));
  }

  let title = match paper.title {
    Some(title) => collapse_whitespace(&title),
    None => "undefined".to_string(),
  };

  let authors: Vec<String> = paper
    .authors
    .into_iter()
    .filter_map(|author| author.name)
    .map(|name| name.trim().to_string())
    .filter(|name| !name.is_empty())
    .collect();

  let venue = paper
    .venue
    .map(|venue| collapse_whitespace(&venue))
    .filter(|venue| !venue.is_empty())
    .map(|venue| match paper.year {
      Some(year) => format!("{venue} {year}"),
      None => venue,
    });

  let mut url_lines = vec![paper.url.ok_or(FolioError::MissingField("url"))?];
  if let Some(external) = paper.external_ids {
    if let Some(arxiv_id) = external.arxiv {
      url_lines.push(format!("https://arxiv.org/abs/{arxiv_id}"));
    }
    if let Some(acl_id) = external.acl {
      url_lines.push(format!("https://aclanthology.org/{acl_id}"));
    }
  }

  Ok(PaperMetadata {
    title,
    authors,
    abstract_text: paper.abstract_text.filter(|s| !s.trim().is_empty()),
    venue,
    publication_date: paper.publication_date,
    source_url: url_lines.join("\n"),
    pdf_url: None,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  const RESPONSE: &str = r#"{
    "paperId": "649def34f8be52c8b66281af98ae884c09aef38b",
    "externalIds": { "ArXiv": "2101.00001", "ACL": "2021.naacl-main.208", "CorpusId": 12345 },
    "url": "https://www.semanticscholar.org/paper/649def34f8be52c8b66281af98ae884c09aef38b",
    "title": "Tracking the  Growth of\nScience",
    "abstract": "We measure growth.",
    "venue": " Transactions of the ACL ",
    "year": 2021,
    "publicationDate": "2021-06-06",
    "authors": [
      { "authorId": "1", "name": "Grace Hopper" },
      { "authorId": "2", "name": " Edsger Dijkstra " }
    ]
  }"#;

  #[test]
  fn title_is_whitespace_collapsed() {
    let paper = parse_graph_paper(RESPONSE.as_bytes()).unwrap();
    assert_eq!(paper.title, "Tracking the Growth of Science");
  }

  #[test]
  fn venue_is_combined_with_year() {
    let paper = parse_graph_paper(RESPONSE.as_bytes()).unwrap();
    assert_eq!(paper.venue.as_deref(), Some("Transactions of the ACL 2021"));
  }

  #[test]
  fn external_ids_become_extra_url_lines() {
    let paper = parse_graph_paper(RESPONSE.as_bytes()).unwrap();
    let lines: Vec<&str> = paper.source_url.lines().collect();
    assert_eq!(lines, vec![
      "https://www.semanticscholar.org/paper/649def34f8be52c8b66281af98ae884c09aef38b",
      "https://arxiv.org/abs/2101.00001",
      "https://aclanthology.org/2021.naacl-main.208",
    ]);
  }

  #[test]
  fn authors_are_trimmed_in_api_order() {
    let paper = parse_graph_paper(RESPONSE.as_bytes()).unwrap();
    assert_eq!(paper.authors, vec!["Grace Hopper", "Edsger Dijkstra"]);
  }

  #[test]
  fn no_pdf_url_is_available_through_this_path() {
    let paper = parse_graph_paper(RESPONSE.as_bytes()).unwrap();
    assert_eq!(paper.pdf_url, None);
  }

  #[test]
  fn null_title_becomes_the_undefined_sentinel() {
    let body = r#"{ "title": null, "url": "https://www.semanticscholar.org/paper/x" }"#;
    let paper = parse_graph_paper(body.as_bytes()).unwrap();
    assert_eq!(paper.title, "undefined");
  }

  #[test]
  fn empty_venue_is_dropped_entirely() {
    let body = r#"{ "title": "T", "url": "https://x", "venue": "", "year": 2020 }"#;
    let paper = parse_graph_paper(body.as_bytes()).unwrap();
    assert_eq!(paper.venue, None);
  }

  #[test]
  fn in_band_error_field_fails_even_with_ok_status() {
    let body = r#"{ "error": "Paper not found" }"#;
    match parse_graph_paper(body.as_bytes()) {
      Err(FolioError::Api(message)) => assert_eq!(message, "Paper not found"),
      other => panic!("expected Api error, got {other:?}"),
    }
  }

  #[test]
  fn missing_url_is_a_missing_field() {
    let body = r#"{ "title": "T" }"#;
    assert!(matches!(parse_graph_paper(body.as_bytes()), Err(FolioError::MissingField("url"))));
  }
}
