//! The `import` command: run the pipeline for one URL.

use folio::{
  importer::{ImportOutcome, Importer},
  vault::LocalVault,
};

use super::*;

/// Arguments for [`Commands::Import`].
#[derive(Args, Clone)]
pub struct ImportArgs {
  /// Paper URL (arXiv, ACL Anthology, Semantic Scholar) or bare arXiv id
  pub url: String,

  /// Force PDF download
  #[arg(long, group = "pdf_behavior")]
  pub pdf: bool,

  /// Skip PDF download
  #[arg(long, group = "pdf_behavior")]
  pub no_pdf: bool,
}

/// Runs the import pipeline and presents the outcome.
///
/// `--pdf` / `--no-pdf` override the settings file's `download_pdfs` for
/// this run only.
pub async fn import(cli: &Cli, import_args: ImportArgs) -> Result<()> {
  let ImportArgs { url, pdf, no_pdf } = import_args;

  let path = config_path(cli)?;
  if !path.exists() {
    return Err(
      folio::error::FolioError::Config(format!(
        "no settings found at {}; run `folio init` first",
        path.display()
      ))
      .into(),
    );
  }
  // A settings file that exists but fails to load is a real error the
  // user needs to see, not a missing-settings hint.
  let mut config = Config::from_path(&path)?;

  if pdf {
    config.download_pdfs = true;
  } else if no_pdf {
    config.download_pdfs = false;
  }

  println!("{} Importing {url}", style(INFO_PREFIX).cyan());
  let mut importer = Importer::new(LocalVault, config);

  match importer.import(&url).await? {
    ImportOutcome::Created(note_path) => {
      println!("{} Note created at {}", style(SUCCESS_PREFIX).green(), note_path.display());
    },
    ImportOutcome::AlreadyExists(note_path) => {
      println!(
        "{} Note already exists at {} — opening the existing note",
        style(INFO_PREFIX).cyan(),
        note_path.display()
      );
    },
    ImportOutcome::Busy => {
      println!("{} An import is already in flight; ignoring.", style(INFO_PREFIX).cyan());
    },
  }
  Ok(())
}
