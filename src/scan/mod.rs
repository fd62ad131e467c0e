//! Scanning project files for pages, and finding project files to scan.
//!
//! # Example
//!
//! ```ignore
//! use drawio_pages::scan::scan_pages;
//!
//! for name in scan_pages(Path::new("ui.drawio"))? {
//!     println!("{}", name?);
//! }
//! ```

mod inputs;
mod pages;

pub use inputs::{collect_inputs, is_project_file, scan_directory, PROJECT_EXTENSION};
pub use pages::{page_names, scan_pages, PageScanner};
