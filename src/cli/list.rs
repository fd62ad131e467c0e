//! List command implementation.
//!
//! Scans project files and prints each page with the index and output file
//! it would be exported with. Nothing is rendered.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::config::ExportConfig;
use crate::error::{DrawioError, Result};
use crate::export::ExportJob;
use crate::output::{display_path, plural, Printer};
use crate::scan::scan_pages;

use super::export::InputArgs;

/// List the pages of draw.io project files
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory used to build the listed paths
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,

    /// Print a JSON array to stdout
    #[arg(long)]
    pub json: bool,
}

/// One page as listed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageEntry {
    pub source: PathBuf,
    pub index: usize,
    pub name: String,
    pub output: PathBuf,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let mut config = args.input.load_config()?;
    if let Some(dir) = args.output_dir {
        config.output_dir = Some(dir);
    }
    let inputs = args.input.project_files(&config)?;

    let mut entries = Vec::new();
    for input in &inputs {
        entries.extend(list_pages(&config, input)?);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&entries).map_err(|e| DrawioError::Export {
            message: format!("Failed to serialize page list: {}", e),
            help: None,
        })?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", json)?;
    } else {
        print_pages(&entries, &inputs, printer);
    }

    Ok(())
}

/// Pages of one project file, in export order.
pub fn list_pages(config: &ExportConfig, source: &Path) -> Result<Vec<PageEntry>> {
    scan_pages(source)?
        .enumerate()
        .map(|(index, name)| {
            let job = ExportJob::for_page(config, source, index, name?);
            Ok(PageEntry {
                source: job.source,
                index: job.page_index,
                name: job.page_name,
                output: job.output,
            })
        })
        .collect()
}

fn print_pages(entries: &[PageEntry], inputs: &[PathBuf], printer: &Printer) {
    for input in inputs {
        let pages: Vec<&PageEntry> = entries.iter().filter(|e| &e.source == input).collect();
        printer.status(
            "Scanned",
            &format!("{} ({})", display_path(input), plural(pages.len(), "page", "pages")),
        );
        for page in pages {
            printer.info(
                &format!("page {}", page.index),
                &format!("{} {} {}", page.name, printer.dim("->"), display_path(&page.output)),
            );
        }
    }
}
