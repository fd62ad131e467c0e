//! A single page export and the argument list it turns into.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::ExportConfig;
use crate::naming::output_file_name;

/// Everything the external tool needs to render one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    /// Project file the page lives in.
    pub source: PathBuf,
    /// Zero-based position of the page in scan order.
    pub page_index: usize,
    /// Page name as declared in the project file.
    pub page_name: String,
    /// Image file to write.
    pub output: PathBuf,
    /// Output raster width.
    pub width: u32,
    /// Request a transparent background.
    pub transparent: bool,
}

impl ExportJob {
    /// Job for one page, with output path and render options from `config`.
    pub fn for_page(
        config: &ExportConfig,
        source: &Path,
        page_index: usize,
        page_name: String,
    ) -> Self {
        Self {
            source: source.to_path_buf(),
            page_index,
            output: config.output_path(&output_file_name(&page_name)),
            page_name,
            width: config.width,
            transparent: config.transparent,
        }
    }

    /// Arguments for the draw.io command line, source path last.
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "--export".into(),
            "--page-index".into(),
            self.page_index.to_string().into(),
        ];
        if self.transparent {
            args.push("--transparent".into());
        }
        args.push("--width".into());
        args.push(self.width.to_string().into());
        args.push("--output".into());
        args.push(self.output.clone().into_os_string());
        args.push(self.source.clone().into_os_string());
        args
    }

    /// Shell-style rendering of the full command, for dry runs.
    pub fn command_line(&self, tool: &Path) -> String {
        std::iter::once(tool.as_os_str().to_owned())
            .chain(self.args())
            .map(|arg| quote(&arg.to_string_lossy()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
