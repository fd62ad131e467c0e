//! Init command implementation.
//!
//! Writes a drawio-pages.yaml with the default export settings. When the
//! directory holds exactly one project file it becomes the `input_file`.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{ExportConfig, CONFIG_FILENAME};
use crate::error::{DrawioError, Result};
use crate::output::{display_path, plural, Printer};
use crate::scan::scan_directory;

/// Initialize an export config (generates drawio-pages.yaml)
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing drawio-pages.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(DrawioError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let found = scan_directory(&args.path);

    let mut config = ExportConfig::default();
    if let [only] = found.as_slice() {
        // Stored relative to the config file, which is how it is loaded back.
        let relative = only.strip_prefix(&args.path).unwrap_or(only);
        config.input_file = Some(relative.to_path_buf());
    }

    if !found.is_empty() {
        let names: Vec<String> = found.iter().map(|p| display_path(p)).collect();
        printer.info("Discovered", &names.join(", "));
    }

    fs::write(&config_path, config.to_yaml()?).map_err(|e| DrawioError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.status(
        "Created",
        &format!(
            "{} ({} found)",
            CONFIG_FILENAME,
            plural(found.len(), "project file", "project files")
        ),
    );

    Ok(())
}
