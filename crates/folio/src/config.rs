//! Persisted user settings.
//!
//! The settings surface is deliberately small: where notes go, where PDFs
//! go, whether PDFs are downloaded at all, and an optional free-form
//! `discovered_via` label carried into every note's frontmatter. Settings
//! live in a TOML file under the platform config directory.

use super::*;

/// User settings for the import pipeline.
///
/// # Examples
///
/// Example TOML configuration:
///
/// ```toml
/// note_dir       = "/home/ada/vault/papers"
/// pdf_dir        = "/home/ada/vault/papers/pdfs"
/// download_pdfs  = true
/// discovered_via = "weekly reading list"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
  /// Folder notes are written into.
  pub note_dir:       PathBuf,
  /// Folder PDFs are cached into.
  pub pdf_dir:        PathBuf,
  /// Whether to download and cache PDFs at all.
  #[serde(default)]
  pub download_pdfs:  bool,
  /// Optional provenance label included in every note's frontmatter.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub discovered_via: Option<String>,
}

impl Default for Config {
  fn default() -> Self {
    let root = dirs::document_dir()
      .or_else(dirs::home_dir)
      .unwrap_or_else(|| PathBuf::from("."))
      .join("folio");
    Self {
      note_dir:       root.join("papers"),
      pdf_dir:        root.join("papers/pdfs"),
      download_pdfs:  true,
      discovered_via: None,
    }
  }
}

impl Config {
  /// The default config file location,
  /// `<platform config dir>/folio/config.toml`.
  pub fn default_path() -> Result<PathBuf> {
    dirs::config_dir()
      .map(|dir| dir.join("folio/config.toml"))
      .ok_or_else(|| FolioError::Config("no platform config directory available".to_string()))
  }

  /// Loads settings from a TOML file.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
  }

  /// Writes settings to a TOML file, creating parent directories as
  /// needed.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string(self)?)?;
    Ok(())
  }

  /// The note path for a basename, `<note_dir>/<basename>.md`.
  pub fn note_path(&self, basename: &str) -> PathBuf {
    self.note_dir.join(format!("{basename}.md"))
  }

  /// The PDF cache path for a basename, `<pdf_dir>/<basename>.pdf`.
  pub fn pdf_path(&self, basename: &str) -> PathBuf {
    self.pdf_dir.join(format!("{basename}.pdf"))
  }
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  #[test]
  fn config_round_trips_through_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config/config.toml");

    let config = Config {
      note_dir:       PathBuf::from("/vault/papers"),
      pdf_dir:        PathBuf::from("/vault/papers/pdfs"),
      download_pdfs:  true,
      discovered_via: Some("reading group".to_string()),
    };
    config.save(&path).unwrap();

    let loaded = Config::from_path(&path).unwrap();
    assert_eq!(loaded.note_dir, config.note_dir);
    assert_eq!(loaded.pdf_dir, config.pdf_dir);
    assert!(loaded.download_pdfs);
    assert_eq!(loaded.discovered_via.as_deref(), Some("reading group"));
  }

  #[test]
  fn omitted_optional_fields_take_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "note_dir = \"notes\"\npdf_dir = \"pdfs\"\n").unwrap();

    let loaded = Config::from_path(&path).unwrap();
    assert!(!loaded.download_pdfs);
    assert_eq!(loaded.discovered_via, None);
  }

  #[test]
  fn derived_paths_use_the_configured_folders() {
    let config = Config {
      note_dir:       PathBuf::from("/vault/notes"),
      pdf_dir:        PathBuf::from("/vault/pdfs"),
      download_pdfs:  false,
      discovered_via: None,
    };
    assert_eq!(config.note_path("A Title"), PathBuf::from("/vault/notes/A Title.md"));
    assert_eq!(config.pdf_path("A Title"), PathBuf::from("/vault/pdfs/A Title.pdf"));
  }
}
