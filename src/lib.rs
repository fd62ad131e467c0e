//! drawio-pages - Per-page exporter for draw.io projects
//!
//! A library for discovering the pages of a draw.io project file and
//! exporting each one to its own PNG through the draw.io command line.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod naming;
pub mod output;
pub mod scan;

pub use config::{ExportConfig, CONFIG_FILENAME, DEFAULT_WIDTH};
pub use error::{DrawioError, Result};
pub use export::{finish, DrawioCli, DryRun, ExportDriver, ExportJob, ExportReport, Exporter, PageOutcome};
pub use naming::output_file_name;
pub use output::Printer;
pub use scan::{collect_inputs, page_names, scan_pages, PageScanner};
