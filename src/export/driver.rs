//! Export driver: one external export per discovered page.

use std::io::BufRead;
use std::path::Path;

use crate::config::ExportConfig;
use crate::error::{DrawioError, Result};
use crate::output::{display_path, plural, Printer};
use crate::scan::{scan_pages, PageScanner};

use super::exporter::{DrawioCli, Exporter};
use super::job::ExportJob;
use super::report::{ExportReport, PageOutcome};

/// Pairs each scanned page with its index and hands it to an exporter.
///
/// Pages are exported strictly in sequence. A failed page is recorded in
/// the report and the remaining pages are still attempted.
pub struct ExportDriver<E> {
    config: ExportConfig,
    exporter: E,
}

impl ExportDriver<DrawioCli> {
    /// Driver that runs the draw.io binary named in the config.
    pub fn from_config(config: ExportConfig) -> Self {
        let exporter = DrawioCli::new(config.tool_path.clone());
        Self::new(config, exporter)
    }
}

impl<E: Exporter> ExportDriver<E> {
    pub fn new(config: ExportConfig, exporter: E) -> Self {
        Self { config, exporter }
    }

    /// Build the job for one page of `source`.
    pub fn job(&self, source: &Path, page_index: usize, page_name: String) -> ExportJob {
        ExportJob::for_page(&self.config, source, page_index, page_name)
    }

    /// Export every page of the configured `input_file`.
    pub fn run(&self, printer: &Printer) -> Result<ExportReport> {
        let input = self.config.input_file.as_deref().ok_or_else(|| DrawioError::Config {
            message: "No input file configured".to_string(),
            help: Some("Set input_file in the config or pass a project file".to_string()),
        })?;
        self.export_file(input, printer)
    }

    /// Export every page of `source`.
    pub fn export_file(&self, source: &Path, printer: &Printer) -> Result<ExportReport> {
        self.export_all(&[source], printer)
    }

    /// Export every page of every source, in order.
    ///
    /// All sources are opened before the first export, so an unopenable
    /// source fails the call with no tool invocations. A line that cannot be
    /// read stops the run; pages that already failed are summarized first.
    /// Tool failures do not fail the call; they are in the report.
    pub fn export_all<P: AsRef<Path>>(&self, sources: &[P], printer: &Printer) -> Result<ExportReport> {
        self.config.validate()?;

        let scanners = sources
            .iter()
            .map(|source| {
                let source = source.as_ref();
                scan_pages(source).map(|scanner| (source, scanner))
            })
            .collect::<Result<Vec<_>>>()?;

        if let Some(dir) = &self.config.output_dir {
            std::fs::create_dir_all(dir).map_err(|e| DrawioError::Io {
                path: dir.clone(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }

        let mut report = ExportReport::new();

        for (source, scanner) in scanners {
            printer.status("Scanning", &display_path(source));

            if let Err(e) = self.export_pages(source, scanner, &mut report, printer) {
                if !report.is_ok() {
                    if let Err(summary) = finish(&report, printer) {
                        printer.error("Aborted", &summary.to_string());
                    }
                }
                return Err(e);
            }
        }

        Ok(report)
    }

    fn export_pages<R: BufRead>(
        &self,
        source: &Path,
        scanner: PageScanner<R>,
        report: &mut ExportReport,
        printer: &Printer,
    ) -> Result<()> {
        for (page_index, name) in scanner.enumerate() {
            let job = self.job(source, page_index, name?);

            printer.status(
                "Exporting",
                &format!(
                    "{} -> {} {}",
                    job.page_name,
                    display_path(&job.output),
                    printer.dim(&format!("(page {})", page_index))
                ),
            );

            let error = match self.exporter.export(&job) {
                Ok(()) => None,
                Err(e) => {
                    printer.error("Failed", &format!("{}: {}", job.page_name, e));
                    Some(e.to_string())
                }
            };

            report.push(PageOutcome {
                source: job.source,
                page_index: job.page_index,
                page_name: job.page_name,
                output: job.output,
                error,
            });
        }

        Ok(())
    }
}

/// Turn a finished report into the process result.
///
/// Any failed page makes the whole run fail with an aggregate count.
pub fn finish(report: &ExportReport, printer: &Printer) -> Result<()> {
    let total = report.total();
    let failed = report.failure_count();

    if failed == 0 {
        printer.status("Finished", &plural(total, "page", "pages"));
        return Ok(());
    }

    for page in report.failures() {
        printer.error(
            "Failed",
            &format!(
                "{} {}",
                page.page_name,
                printer.dim(&format!("({}, page {})", display_path(&page.source), page.page_index))
            ),
        );
    }

    Err(DrawioError::Export {
        message: format!("{} of {} failed to export", failed, plural(total, "page", "pages")),
        help: Some("Check that the draw.io executable runs and the output location is writable".to_string()),
    })
}
