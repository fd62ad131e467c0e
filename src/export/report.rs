//! Outcome of an export run.

use std::path::PathBuf;

/// What happened to one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    /// Project file the page came from.
    pub source: PathBuf,
    /// Zero-based page index passed to the tool.
    pub page_index: usize,
    /// Page name as declared.
    pub page_name: String,
    /// Image file the tool was asked to write.
    pub output: PathBuf,
    /// Failure reason, if the export failed.
    pub error: Option<String>,
}

impl PageOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Collects page outcomes across one or more project files.
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    pages: Vec<PageOutcome>,
}

impl ExportReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome.
    pub fn push(&mut self, outcome: PageOutcome) {
        self.pages.push(outcome);
    }

    /// Number of pages attempted.
    pub fn total(&self) -> usize {
        self.pages.len()
    }

    /// Count successful exports.
    pub fn success_count(&self) -> usize {
        self.pages.iter().filter(|p| p.is_ok()).count()
    }

    /// Count failed exports.
    pub fn failure_count(&self) -> usize {
        self.pages.iter().filter(|p| !p.is_ok()).count()
    }

    /// Check if every page exported.
    pub fn is_ok(&self) -> bool {
        self.failure_count() == 0
    }

    /// Merge another report into this one.
    pub fn merge(&mut self, other: ExportReport) {
        self.pages.extend(other.pages);
    }

    /// Iterate over outcomes in export order.
    pub fn iter(&self) -> impl Iterator<Item = &PageOutcome> {
        self.pages.iter()
    }

    /// Iterate over failed pages.
    pub fn failures(&self) -> impl Iterator<Item = &PageOutcome> {
        self.pages.iter().filter(|p| !p.is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(index: usize, error: Option<&str>) -> PageOutcome {
        PageOutcome {
            source: PathBuf::from("ui.drawio"),
            page_index: index,
            page_name: format!("Page {}", index),
            output: PathBuf::from(format!("Page-{}.png", index)),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_report() {
        let report = ExportReport::new();
        assert!(report.is_ok());
        assert_eq!(report.total(), 0);
        assert_eq!(report.failure_count(), 0);
    }

    #[test]
    fn test_counts() {
        let mut report = ExportReport::new();
        report.push(outcome(0, None));
        report.push(outcome(1, Some("exit code 1")));
        report.push(outcome(2, None));

        assert!(!report.is_ok());
        assert_eq!(report.total(), 3);
        assert_eq!(report.success_count(), 2);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.failures().next().unwrap().page_index, 1);
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut a = ExportReport::new();
        a.push(outcome(0, None));

        let mut b = ExportReport::new();
        b.push(outcome(0, Some("boom")));

        a.merge(b);
        let errors: Vec<bool> = a.iter().map(|p| p.is_ok()).collect();
        assert_eq!(errors, vec![true, false]);
        assert_eq!(a.failure_count(), 1);
    }
}
