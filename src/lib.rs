//! Compile and run OpenCV C++ programs with a single command

/// Build request, compiler invocation, and orchestration
pub mod build;

/// Command-line interface
pub mod cli;

/// Optional on-disk configuration
pub mod config;

/// Flag tables and tool defaults
pub mod constants;

/// Colored diagnostics
pub mod diagnostics;

/// Library flag discovery
pub mod discovery;

/// Error Type
pub mod error;

/// Debug and release profiles
pub mod flags;

/// Process runner capability
pub mod runner;

/// Utility functions
pub mod utils;
