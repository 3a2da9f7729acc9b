//! cvrun error Type

use std::{str::Utf8Error, string::FromUtf8Error};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid arguments
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    /// Io error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A required external program could not be found
    #[error("required tool `{0}` not found")]
    MissingTool(String),
    /// The flag discovery tool failed
    #[error("library flag discovery failed: {0}")]
    DiscoveryFailure(String),
    /// The compiler exited unsuccessfully
    #[error("compilation failed (exit status: {})", display_code(.0))]
    CompilationFailure(Option<i32>),
    /// Command execution failure
    #[error("execution failure: {0}")]
    ExecutionFailure(String),
    /// String error
    #[error("string error: {0}")]
    StringError(String),
    /// Logger error
    #[error("logger error: {0}")]
    LoggerError(String),
    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "terminated by signal".to_string(), |code| code.to_string())
}

impl From<Utf8Error> for Error {
    fn from(value: Utf8Error) -> Self {
        Self::StringError(format!("{}", value))
    }
}

impl From<FromUtf8Error> for Error {
    fn from(value: FromUtf8Error) -> Self {
        Self::StringError(format!("{}", value))
    }
}
