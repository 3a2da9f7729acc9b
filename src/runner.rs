//! Process runner capability
//!
//! Every external program (flag discovery, compiler, the built binary) is
//! spawned through a [`ProcessRunner`], so callers can substitute fakes.

use std::{
    ffi::{OsStr, OsString},
    io,
    process::{Command, ExitStatus},
};

use crate::error::Error;

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` if terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Spawns external programs synchronously. `args[0]` is the program.
///
/// Arguments are OS strings so paths reach the program byte for byte.
pub trait ProcessRunner {
    /// Run the program and capture its standard output and error
    fn capture(&self, args: &[OsString]) -> Result<ProcessOutput, Error>;

    /// Run the program with inherited standard streams and return its exit code
    fn run(&self, args: &[OsString]) -> Result<Option<i32>, Error>;
}

impl<R> ProcessRunner for &R
where
    R: ProcessRunner + ?Sized,
{
    fn capture(&self, args: &[OsString]) -> Result<ProcessOutput, Error> {
        (**self).capture(args)
    }

    fn run(&self, args: &[OsString]) -> Result<Option<i32>, Error> {
        (**self).run(args)
    }
}

/// Runs programs with [`std::process::Command`]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(args: &[OsString]) -> Result<Command, Error> {
        let (program, rest) = args.split_first().ok_or_else(|| {
            Error::InvalidArguments("The number of arguments cannot be 0".into())
        })?;
        let mut command = Command::new(program);
        command.args(rest);
        Ok(command)
    }
}

fn spawn_error(program: &OsStr, err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::NotFound {
        Error::MissingTool(program.to_string_lossy().into_owned())
    } else {
        Error::Io(err)
    }
}

impl ProcessRunner for SystemRunner {
    fn capture(&self, args: &[OsString]) -> Result<ProcessOutput, Error> {
        let output = Self::command(args)?
            .output()
            .map_err(|err| spawn_error(&args[0], err))?;
        tracing::trace!("Captured {:?}: status={}", args, output.status);

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8(output.stdout)?,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn run(&self, args: &[OsString]) -> Result<Option<i32>, Error> {
        let status: ExitStatus = Self::command(args)?
            .status()
            .map_err(|err| spawn_error(&args[0], err))?;
        tracing::debug!("Exit status of {:?}: {}", args[0], status);
        Ok(status.code())
    }
}
