//! Utility functions

/// Command-line rendering utility functions
mod command_utils;
pub use command_utils::*;

/// Logging setup
mod logging_utils;
pub use logging_utils::*;

/// Filepath-related utility functions
mod path_utils;
pub use path_utils::*;
