//! The `init` command: write a default settings file.

use super::*;

/// Arguments for [`Commands::Init`].
#[derive(Args, Clone)]
pub struct InitArgs {
  /// Folder notes are written into (defaults to the platform documents
  /// directory)
  #[arg(long)]
  pub note_dir: Option<PathBuf>,

  /// Folder PDFs are cached into (defaults to a `pdfs` folder next to the
  /// notes)
  #[arg(long)]
  pub pdf_dir: Option<PathBuf>,

  /// Disable PDF downloading in the generated settings
  #[arg(long)]
  pub no_pdf: bool,
}

/// Writes a settings file and creates the configured folders.
///
/// Prompts before overwriting an existing settings file.
pub async fn init(cli: &Cli, init_args: InitArgs) -> Result<()> {
  let path = config_path(cli)?;

  if path.exists() {
    let overwrite = dialoguer::Confirm::new()
      .with_prompt(format!("Settings already exist at {}. Overwrite?", path.display()))
      .default(false)
      .interact()?;
    if !overwrite {
      println!("{} Keeping existing settings.", style(INFO_PREFIX).cyan());
      return Ok(());
    }
  }

  let mut config = Config::default();
  if let Some(note_dir) = init_args.note_dir {
    config.pdf_dir = note_dir.join("pdfs");
    config.note_dir = note_dir;
  }
  if let Some(pdf_dir) = init_args.pdf_dir {
    config.pdf_dir = pdf_dir;
  }
  config.download_pdfs = !init_args.no_pdf;

  config.save(&path)?;
  std::fs::create_dir_all(&config.note_dir)?;
  std::fs::create_dir_all(&config.pdf_dir)?;

  println!("{} Settings written to {}", style(SUCCESS_PREFIX).green(), path.display());
  println!("{} Notes folder: {}", style(INFO_PREFIX).cyan(), config.note_dir.display());
  println!("{} PDF folder:   {}", style(INFO_PREFIX).cyan(), config.pdf_dir.display());
  Ok(())
}
