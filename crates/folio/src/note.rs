//! Note synthesis: target naming, canonical frontmatter, and the body
//! template.
//!
//! A [`NoteTarget`] is derived from the paper title alone and decides where
//! the note (and its optional PDF) will live. A [`NoteDocument`] is the
//! final artifact text: a YAML frontmatter block in canonical field order
//! followed by a fixed body template. Both the field order and the body
//! structure are load-bearing for downstream note-taking workflows, so they
//! are reproduced exactly and covered by round-trip tests.

use chrono::NaiveDate;

use super::*;
use crate::format::{collapse_whitespace, normalize_title};

/// Where a note will be written, derived purely from the paper title.
///
/// `alias` is recorded iff sanitization altered the title, so the original
/// title stays searchable inside the note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTarget {
  /// Sanitized filename stem (see [`crate::format::normalize_title`]).
  pub basename: String,
  /// The original, unsanitized title — present only when it differs from
  /// `basename`.
  pub alias:    Option<String>,
}

impl NoteTarget {
  /// Derives the note target from a raw paper title.
  pub fn from_title(title: &str) -> Self {
    let basename = normalize_title(title);
    let alias = (basename != title).then(|| title.to_string());
    Self { basename, alias }
  }

  /// The note's filename, `<basename>.md`.
  pub fn note_filename(&self) -> String { format!("{}.md", self.basename) }

  /// The PDF cache filename, `<basename>.pdf`.
  pub fn pdf_filename(&self) -> String { format!("{}.pdf", self.basename) }
}

/// What the frontmatter `artifacts` field should carry.
///
/// The field is only present at all in the PDF-aware pipeline variant;
/// a metadata-only run omits it entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactList {
  /// PDF handling disabled: no `artifacts` field is emitted.
  Omitted,
  /// PDF handling enabled but no PDF was resolved: `artifacts: []`.
  Empty,
  /// One cached PDF, referenced by filename as a cross-reference link.
  Pdf(String),
}

/// The final note artifact: frontmatter plus body, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDocument {
  /// Full UTF-8 note text, frontmatter delimited by `---` lines.
  pub content: String,
}

impl NoteDocument {
  /// Composes a note with `created_at` set to today's local date.
  pub fn build(
    paper: &PaperMetadata,
    target: &NoteTarget,
    discovered_via: Option<&str>,
    artifacts: &ArtifactList,
  ) -> Self {
    Self::compose(paper, target, discovered_via, artifacts, chrono::Local::now().date_naive())
  }

  /// Composes a note with an explicit `created_at` date.
  ///
  /// Frontmatter field order is canonical and stable: `created_at`, `url`,
  /// `authors`, `tags`, then the optional `alias`, `discovered_via`,
  /// `publication_venue`, `date`, and finally `artifacts` when the PDF
  /// variant is active. Optional fields are emitted only when their source
  /// value is present; `publication_venue` is whitespace-collapsed first.
  pub fn compose(
    paper: &PaperMetadata,
    target: &NoteTarget,
    discovered_via: Option<&str>,
    artifacts: &ArtifactList,
    created_at: NaiveDate,
  ) -> Self {
    let mut lines = Vec::new();

    lines.push("---".to_string());
    lines.push(format!("created_at: {}", created_at.format("%Y-%m-%d")));
    lines.push(format!("url: {}", paper.source_url));
    lines.push(format!("authors: {}", link_list(&paper.authors)));
    lines.push("tags: [\"paper\"]".to_string());
    if let Some(alias) = &target.alias {
      lines.push(format!("alias: {alias}"));
    }
    if let Some(via) = discovered_via {
      lines.push(format!("discovered_via: {via}"));
    }
    if let Some(venue) = &paper.venue {
      lines.push(format!("publication_venue: {}", collapse_whitespace(venue)));
    }
    if let Some(date) = &paper.publication_date {
      lines.push(format!("date: {date}"));
    }
    match artifacts {
      ArtifactList::Omitted => {},
      ArtifactList::Empty => lines.push("artifacts: []".to_string()),
      ArtifactList::Pdf(filename) => lines.push(format!("artifacts: [\"[[{filename}]]\"]")),
    }
    lines.push("---".to_string());

    // Body template, reproduced verbatim.
    lines.push(String::new());
    lines.push("# Abstract".to_string());
    lines.push(paper.abstract_text.as_deref().unwrap_or("").trim().to_string());
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push("# Notes".to_string());
    lines.push(String::new());

    Self { content: lines.join("\n") }
  }
}

/// Renders author names as a YAML list of cross-reference link tokens,
/// e.g. `["[[Ada Lovelace]]", "[[Alan Turing]]"]`.
fn link_list(authors: &[String]) -> String {
  let links: Vec<String> = authors.iter().map(|name| format!("\"[[{name}]]\"")).collect();
  format!("[{}]", links.join(", "))
}
