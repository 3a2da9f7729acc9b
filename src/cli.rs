//! Command-line interface of `cvrun`

use std::{ffi::OsString, path::PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand};

/// A simple program to compile and run OpenCV programs
#[derive(Parser, Debug)]
#[command(
    name = "cvrun",
    about = "A simple program to compile and run OpenCV programs",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Use this sub-command to build the OpenCV program
    Build(BuildArgs),
}

/// Build arguments
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct BuildArgs {
    /// OpenCV C++ source files
    #[arg(
        short = 's',
        long = "sources",
        value_name = "SOURCE_FILE",
        required = true,
        num_args = 1..
    )]
    pub sources: Vec<PathBuf>,

    /// OpenCV C++ output file
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Arguments to pass to the output file
    #[arg(short = 'a', long = "arguments", value_name = "ARGUMENT", num_args = 1..)]
    pub arguments: Vec<String>,

    /// Enable release compilation
    #[arg(short = 'r', conflicts_with = "debug")]
    pub release: bool,

    /// Enable debug compilation
    #[arg(short = 'd')]
    pub debug: bool,

    /// Enable automatic execution of the output file
    #[arg(short = 'x')]
    pub execute: bool,

    /// Enable verbose mode (repeat for more logging)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Further arguments to pass to the output file, may start with `-`
    #[arg(last = true, value_name = "PROGRAM_ARGS")]
    pub trailing_arguments: Vec<String>,
}

/// Outcome of parsing the command line
#[derive(Debug)]
pub enum ParsedCli {
    /// A subcommand to run
    Run(Commands),
    /// Text to print before exiting with `code`
    Exit {
        message: String,
        to_stderr: bool,
        code: i32,
    },
}

/// Parse the command line. Usage errors, a missing subcommand, and unknown
/// subcommands all exit with 1; `--help` and `--version` exit with 0.
pub fn parse_cli_from<I, T>(args: I) -> ParsedCli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(Cli {
            command: Some(command),
        }) => ParsedCli::Run(command),
        Ok(Cli { command: None }) => ParsedCli::Exit {
            message: Cli::command().render_help().to_string(),
            to_stderr: true,
            code: 1,
        },
        Err(err) => {
            let to_stderr = err.use_stderr();
            ParsedCli::Exit {
                message: err.render().to_string(),
                to_stderr,
                code: if to_stderr { 1 } else { 0 },
            }
        }
    }
}
