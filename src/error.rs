use miette::Diagnostic;
use thiserror::Error;

/// Main error type for acidentiton operations
#[derive(Error, Diagnostic, Debug)]
pub enum AcidError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(acid::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(acid::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid input: {message}")]
    #[diagnostic(code(acid::input))]
    Input {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(acid::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, AcidError>;
