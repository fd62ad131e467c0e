//! Page-name scanner for draw.io project files.
//!
//! The file is treated as plain text: every `name="..."` attribute on every
//! line is taken to be a page declaration. Matches are yielded left to right
//! within a line, lines top to bottom. `\n`, `\r\n` and a lone `\r` all end
//! a line, so a value never spans a carriage return.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{DrawioError, Result};

fn page_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"name="(.*?)""#).expect("valid regex"))
}

/// Names in one `\n`-terminated line, treating each `\r` as a line break.
fn names_in_line(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split('\r').flat_map(|part| {
        page_name_regex()
            .captures_iter(part)
            .map(|caps| caps[1].to_string())
    })
}

/// Lazy iterator over the page names in a project file.
///
/// Reads one line at a time; a line's matches are buffered until consumed.
/// Once exhausted it stays exhausted.
pub struct PageScanner<R> {
    lines: Lines<R>,
    pending: VecDeque<String>,
    path: Option<PathBuf>,
    done: bool,
}

impl<R: BufRead> PageScanner<R> {
    /// Scan any buffered reader.
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: VecDeque::new(),
            path: None,
            done: false,
        }
    }

    fn read_error(&self, e: std::io::Error) -> DrawioError {
        match &self.path {
            Some(path) => DrawioError::Io {
                path: path.clone(),
                message: format!("Failed to read line: {}", e),
            },
            None => DrawioError::IoError(e),
        }
    }
}

impl<R: BufRead> Iterator for PageScanner<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(name) = self.pending.pop_front() {
                return Some(Ok(name));
            }
            if self.done {
                return None;
            }

            match self.lines.next() {
                Some(Ok(line)) => self.pending.extend(names_in_line(&line)),
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(self.read_error(e)));
                }
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }
}

/// Open a project file for scanning.
///
/// Fails immediately if the file cannot be opened, before any name is read.
pub fn scan_pages(path: &Path) -> Result<PageScanner<BufReader<File>>> {
    let file = File::open(path).map_err(|e| DrawioError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to open project file: {}", e),
    })?;

    let mut scanner = PageScanner::from_reader(BufReader::new(file));
    scanner.path = Some(path.to_path_buf());
    Ok(scanner)
}

/// All page names in an in-memory document.
pub fn page_names(text: &str) -> Vec<String> {
    text.split('\n').flat_map(names_in_line).collect()
}
