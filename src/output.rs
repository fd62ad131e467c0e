//! Status lines for the terminal.
//!
//! Every line is a right-aligned verb followed by a message, written to
//! stderr so that `list --json` can own stdout.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const VERB_COLUMN: usize = 12;

/// What a status line reports, which decides its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Progress,
    Info,
    Warning,
    Failure,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Progress => "\x1b[1;32m",
            Tone::Info => "\x1b[1;36m",
            Tone::Warning => "\x1b[1;33m",
            Tone::Failure => "\x1b[1;31m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Writes status lines to stderr, coloured when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Work in progress or done, e.g. `   Exporting Cover -> Cover.png`.
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(Tone::Progress, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(Tone::Info, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(Tone::Warning, verb, message);
    }

    /// A page or run that failed.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(Tone::Failure, verb, message);
    }

    /// Secondary detail such as page indices, greyed out on a terminal.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("\x1b[2m{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn format_line(&self, tone: Tone, verb: &str, message: &str) -> String {
        if self.color {
            format!("{}{verb:>VERB_COLUMN$}{RESET} {message}", tone.ansi())
        } else {
            format!("{verb:>VERB_COLUMN$} {message}")
        }
    }

    fn print_line(&self, tone: Tone, verb: &str, message: &str) {
        let line = self.format_line(tone, verb, message);
        // A closed stderr is not worth failing an export over.
        let _ = writeln!(io::stderr().lock(), "{line}");
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// `plural(1, "page", "pages")` is "1 page"; any other count takes the plural.
pub fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{n} {}", if n == 1 { one } else { many })
}

/// `path` relative to the working directory when it lies under it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
