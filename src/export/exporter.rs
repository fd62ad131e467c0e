//! Exporter backends.
//!
//! [`DrawioCli`] runs the real draw.io binary, one blocking process per
//! page. [`DryRun`] prints the command it would have run.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::Command;

use crate::error::{DrawioError, Result};

use super::job::ExportJob;

/// Renders one page of a project file.
pub trait Exporter {
    /// Export a single page, blocking until it is written or has failed.
    fn export(&self, job: &ExportJob) -> Result<()>;
}

impl<E: Exporter + ?Sized> Exporter for &E {
    fn export(&self, job: &ExportJob) -> Result<()> {
        (**self).export(job)
    }
}

/// The draw.io desktop command line.
#[derive(Debug, Clone)]
pub struct DrawioCli {
    tool_path: PathBuf,
}

impl DrawioCli {
    pub fn new(tool_path: impl Into<PathBuf>) -> Self {
        Self {
            tool_path: tool_path.into(),
        }
    }
}

impl Exporter for DrawioCli {
    fn export(&self, job: &ExportJob) -> Result<()> {
        // stdout and stderr are inherited so draw.io's own messages show up.
        let status = Command::new(&self.tool_path)
            .args(job.args())
            .status()
            .map_err(|e| DrawioError::ToolLaunch {
                tool: self.tool_path.clone(),
                help: (e.kind() == io::ErrorKind::NotFound)
                    .then(|| "Set tool_path or pass --tool with the draw.io executable".to_string()),
                message: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            let status = match status.code() {
                Some(code) => format!("exit code {}", code),
                None => "no exit code (terminated by signal)".to_string(),
            };
            Err(DrawioError::ToolFailed {
                tool: self.tool_path.clone(),
                page_index: job.page_index,
                status,
            })
        }
    }
}

/// Prints each command to stdout instead of running it.
#[derive(Debug, Clone)]
pub struct DryRun {
    tool_path: PathBuf,
}

impl DryRun {
    pub fn new(tool_path: impl Into<PathBuf>) -> Self {
        Self {
            tool_path: tool_path.into(),
        }
    }
}

impl Exporter for DryRun {
    fn export(&self, job: &ExportJob) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", job.command_line(&self.tool_path))?;
        Ok(())
    }
}
