use miette::Diagnostic;
use thiserror::Error;

/// Main error type for drawio-pages operations
#[derive(Error, Diagnostic, Debug)]
pub enum DrawioError {
    #[error("IO error: {0}")]
    #[diagnostic(code(drawio::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(drawio::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(drawio::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Could not run {tool}: {message}")]
    #[diagnostic(code(drawio::tool))]
    ToolLaunch {
        tool: std::path::PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{tool} exited with {status} on page {page_index}")]
    #[diagnostic(code(drawio::tool))]
    ToolFailed {
        tool: std::path::PathBuf,
        page_index: usize,
        status: String,
    },

    #[error("Export error: {message}")]
    #[diagnostic(code(drawio::export))]
    Export {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Watch error: {message}")]
    #[diagnostic(code(drawio::watch))]
    Watch { message: String },
}

pub type Result<T> = std::result::Result<T, DrawioError>;
