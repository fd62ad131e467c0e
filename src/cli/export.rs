//! Export command implementation.
//!
//! Resolves configuration and inputs, then exports every page of every
//! project file through the draw.io command line.

use std::path::PathBuf;

use clap::Args;

use crate::config::{ExportConfig, CONFIG_FILENAME};
use crate::error::{DrawioError, Result};
use crate::export::{finish, DryRun, ExportDriver, ExportReport};
use crate::output::Printer;
use crate::scan::collect_inputs;

/// Project files and the config that goes with them
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Project files or directories (default: input_file from the config)
    pub inputs: Vec<PathBuf>,

    /// Config file (default: ./drawio-pages.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl InputArgs {
    /// Load the config file, or defaults.
    pub fn load_config(&self) -> Result<ExportConfig> {
        ExportConfig::discover(self.config.as_deref())
    }

    /// Project files to process, falling back to the config's `input_file`.
    pub fn project_files(&self, config: &ExportConfig) -> Result<Vec<PathBuf>> {
        let files = if self.inputs.is_empty() {
            config.input_file.iter().cloned().collect()
        } else {
            collect_inputs(&self.inputs)
        };

        if files.is_empty() {
            return Err(DrawioError::Config {
                message: "No project files to export".to_string(),
                help: Some(format!(
                    "Pass a .drawio file or directory, or set input_file in {}",
                    CONFIG_FILENAME
                )),
            });
        }

        Ok(files)
    }
}

/// Export every page of draw.io project files to PNG
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Path to the draw.io executable
    #[arg(long)]
    pub tool: Option<PathBuf>,

    /// Output image width
    #[arg(long)]
    pub width: Option<u32>,

    /// Keep the page background instead of exporting it transparent
    #[arg(long)]
    pub opaque: bool,

    /// Output directory (default: current directory)
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,

    /// Print the draw.io commands instead of running them
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    /// Config file values with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<ExportConfig> {
        let mut config = self.input.load_config()?;

        if let Some(tool) = &self.tool {
            config.tool_path = tool.clone();
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if self.opaque {
            config.transparent = false;
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = Some(dir.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let config = args.resolve_config()?;
    let inputs = args.input.project_files(&config)?;

    let report = export_inputs(&config, &inputs, args.dry_run, printer)?;
    finish(&report, printer)
}

/// Export all inputs with either the real tool or a dry run.
pub fn export_inputs(
    config: &ExportConfig,
    inputs: &[PathBuf],
    dry_run: bool,
    printer: &Printer,
) -> Result<ExportReport> {
    if dry_run {
        ExportDriver::new(config.clone(), DryRun::new(config.tool_path.clone()))
            .export_all(inputs, printer)
    } else {
        ExportDriver::from_config(config.clone()).export_all(inputs, printer)
    }
}
