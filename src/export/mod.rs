//! Page export through the external draw.io command line.
//!
//! The [`ExportDriver`] reads page names from a project file and hands each
//! one, with its zero-based index, to an [`Exporter`]. Failed pages are
//! collected in an [`ExportReport`] rather than stopping the run.
//!
//! # Example
//!
//! ```ignore
//! use drawio_pages::{ExportConfig, ExportDriver, Printer};
//!
//! let driver = ExportDriver::from_config(ExportConfig::default());
//! let report = driver.export_file(Path::new("ui.drawio"), &Printer::new())?;
//! println!("{} of {} exported", report.success_count(), report.total());
//! ```

mod driver;
mod exporter;
mod job;
mod report;

pub use driver::{finish, ExportDriver};
pub use exporter::{DrawioCli, DryRun, Exporter};
pub use job::ExportJob;
pub use report::{ExportReport, PageOutcome};
