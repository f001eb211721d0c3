//! End-to-end note synthesis and persistence, network excluded.
//!
//! Exercises the pipeline from a normalized [`PaperMetadata`] record down
//! to files on disk, covering the idempotency gate and the PDF cache
//! behavior the way a host application would observe them.

use std::path::Path;

use folio::{
  config::Config,
  importer::ImportOutcome,
  note::{ArtifactList, NoteDocument, NoteTarget},
  paper::PaperMetadata,
  vault::{ArtifactWriter, LocalVault},
};
use tempfile::tempdir;

fn semantic_scholar_paper() -> PaperMetadata {
  PaperMetadata {
    title:            "Measuring Progress: A Longitudinal Study".to_string(),
    authors:          vec!["Grace Hopper".to_string(), "Edsger Dijkstra".to_string()],
    abstract_text:    Some("We measure progress over a decade.".to_string()),
    venue:            Some("EMNLP 2021".to_string()),
    publication_date: Some("2021-11-07".to_string()),
    source_url:       "https://www.semanticscholar.org/paper/649def34f8be52c8b66281af98ae884c09aef38b\nhttps://arxiv.org/abs/2101.00001".to_string(),
    pdf_url:          None,
  }
}

fn config_in(root: &Path, download_pdfs: bool) -> Config {
  Config {
    note_dir:       root.join("notes"),
    pdf_dir:        root.join("pdfs"),
    download_pdfs,
    discovered_via: Some("reading group".to_string()),
  }
}

#[tokio::test]
async fn note_lands_at_the_deterministic_path_with_full_frontmatter() {
  let dir = tempdir().unwrap();
  let writer = ArtifactWriter::new(LocalVault, config_in(dir.path(), false));
  let paper = semantic_scholar_paper();
  let target = NoteTarget::from_title(&paper.title);

  let outcome = writer.write(&paper, &target).await.unwrap();
  let ImportOutcome::Created(path) = outcome else {
    panic!("expected Created, got {outcome:?}");
  };
  assert_eq!(
    path,
    dir.path().join("notes").join("Measuring Progress – A Longitudinal Study.md")
  );

  let content = std::fs::read_to_string(&path).unwrap();
  assert!(content.starts_with("---\ncreated_at: "));
  assert!(content.contains("alias: Measuring Progress: A Longitudinal Study\n"));
  assert!(content.contains("discovered_via: reading group\n"));
  assert!(content.contains("publication_venue: EMNLP 2021\n"));
  assert!(content.contains("date: 2021-11-07\n"));
  assert!(content
    .contains("authors: [\"[[Grace Hopper]]\", \"[[Edsger Dijkstra]]\"]\n"));
  // Both equivalent URLs cited, one per line.
  assert!(content.contains(
    "url: https://www.semanticscholar.org/paper/649def34f8be52c8b66281af98ae884c09aef38b\n\
     https://arxiv.org/abs/2101.00001\n"
  ));
  assert!(content.ends_with("# Abstract\nWe measure progress over a decade.\n\n---\n\n# Notes\n"));
}

#[tokio::test]
async fn second_run_with_unchanged_state_writes_nothing() {
  let dir = tempdir().unwrap();
  let writer = ArtifactWriter::new(LocalVault, config_in(dir.path(), false));
  let paper = semantic_scholar_paper();
  let target = NoteTarget::from_title(&paper.title);

  let ImportOutcome::Created(path) = writer.write(&paper, &target).await.unwrap() else {
    panic!("expected Created");
  };
  let original = std::fs::read_to_string(&path).unwrap();

  // Simulate the user annotating the note between runs.
  std::fs::write(&path, format!("{original}\nmy own annotations\n")).unwrap();

  let second = writer.write(&paper, &target).await.unwrap();
  assert!(matches!(second, ImportOutcome::AlreadyExists(p) if p == path));
  let after = std::fs::read_to_string(&path).unwrap();
  assert!(after.ends_with("my own annotations\n"));
}

#[tokio::test]
async fn pdf_cache_hit_references_the_existing_file() {
  let dir = tempdir().unwrap();
  let writer = ArtifactWriter::new(LocalVault, config_in(dir.path(), true));
  let mut paper = semantic_scholar_paper();
  // An address that refuses connections: any accidental fetch fails loudly.
  paper.pdf_url = Some("http://127.0.0.1:1/cached.pdf".to_string());
  let target = NoteTarget::from_title(&paper.title);

  let pdf_path = dir.path().join("pdfs").join(target.pdf_filename());
  std::fs::create_dir_all(pdf_path.parent().unwrap()).unwrap();
  std::fs::write(&pdf_path, b"%PDF-1.4 cached bytes").unwrap();

  let ImportOutcome::Created(note_path) = writer.write(&paper, &target).await.unwrap() else {
    panic!("expected Created");
  };
  let content = std::fs::read_to_string(note_path).unwrap();
  assert!(content
    .contains("artifacts: [\"[[Measuring Progress – A Longitudinal Study.pdf]]\"]"));
  // Cache entry untouched.
  assert_eq!(std::fs::read(&pdf_path).unwrap(), b"%PDF-1.4 cached bytes");
}

#[test]
fn note_document_is_stable_across_rebuilds() -> anyhow::Result<()> {
  let paper = semantic_scholar_paper();
  let target = NoteTarget::from_title(&paper.title);
  let date = chrono::NaiveDate::from_ymd_opt(2026, 8, 27)
    .ok_or_else(|| anyhow::anyhow!("invalid date"))?;

  let first = NoteDocument::compose(&paper, &target, Some("rg"), &ArtifactList::Empty, date);
  let second = NoteDocument::compose(&paper, &target, Some("rg"), &ArtifactList::Empty, date);
  assert_eq!(first, second);
  Ok(())
}
