use std::{
    ffi::OsString,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    build::{BuildRequest, CompilerInvocation},
    config::CvrunConfig,
    discovery::discover_library_flags,
    error::Error,
    runner::ProcessRunner,
    utils::{absolute_filepath, render_command_line},
};

/// Result of a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    /// The compiled binary
    pub output_filepath: PathBuf,
    /// Exit code of the executed program, if it ran and exited normally
    pub run_status: Option<RunStatus>,
}

/// How the executed program finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Exited(i32),
    Signaled,
}

impl BuildOutcome {
    /// The wrapper's exit code. The program's own status is surfaced only
    /// when `propagate_exit_status` is set.
    pub fn exit_code(&self, propagate_exit_status: bool) -> i32 {
        match (propagate_exit_status, self.run_status) {
            (true, Some(RunStatus::Exited(code))) => code,
            (true, Some(RunStatus::Signaled)) => 1,
            _ => 0,
        }
    }
}

/// Runs library flag discovery, compilation, and the optional execution of
/// the produced binary, strictly in that order.
pub struct BuildOrchestrator<'a, R, W = io::Stdout>
where
    R: ProcessRunner,
    W: Write,
{
    config: &'a CvrunConfig,
    runner: R,
    stdout: W,
}

impl<'a, R> BuildOrchestrator<'a, R, io::Stdout>
where
    R: ProcessRunner,
{
    pub fn new(config: &'a CvrunConfig, runner: R) -> Self {
        Self {
            config,
            runner,
            stdout: io::stdout(),
        }
    }
}

impl<'a, R, W> BuildOrchestrator<'a, R, W>
where
    R: ProcessRunner,
    W: Write,
{
    /// Send the verbose command-line echo to `stdout` instead of the process' stdout
    pub fn with_stdout<V: Write>(self, stdout: V) -> BuildOrchestrator<'a, R, V> {
        BuildOrchestrator {
            config: self.config,
            runner: self.runner,
            stdout,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn stdout(&self) -> &W {
        &self.stdout
    }

    /// Query the vision library's compiler and linker flags
    pub fn discover_library_flags(&self) -> Result<Vec<String>, Error> {
        discover_library_flags(
            &self.runner,
            self.config.pkg_config_filepath(),
            self.config.library_package(),
        )
    }

    /// Assemble the compiler invocation for `request`
    pub fn assemble_invocation(
        &self,
        request: &BuildRequest,
        library_flags: &[String],
    ) -> CompilerInvocation {
        CompilerInvocation::new(
            self.config.compiler_filepath(),
            self.config.language_standard(),
            request.mode(),
            request.output_filepath(),
            request.sources(),
            library_flags,
        )
    }

    /// Run the compiler. A non-zero exit is a [`Error::CompilationFailure`].
    pub fn compile(
        &mut self,
        request: &BuildRequest,
        invocation: &CompilerInvocation,
    ) -> Result<(), Error> {
        if request.is_verbose() {
            writeln!(self.stdout, "Compiler call:")?;
            writeln!(self.stdout, "{}\n", invocation.command_line())?;
            self.stdout.flush()?;
        }

        tracing::info!("[{}] Compile {:?}", request.mode(), request.sources());
        let code = self.runner.run(invocation.args())?;
        tracing::debug!("Compiler exit code: {:?}", code);
        match code {
            Some(0) => Ok(()),
            code => Err(Error::CompilationFailure(code)),
        }
    }

    /// Run the compiled binary by its absolute filepath with the forwarded arguments
    pub fn execute<P>(&mut self, request: &BuildRequest, output_filepath: P) -> Result<RunStatus, Error>
    where
        P: AsRef<Path>,
    {
        let program = absolute_filepath(output_filepath)?;
        let mut args = vec![program.clone().into_os_string()];
        args.extend(request.arguments().iter().map(OsString::from));

        if request.is_verbose() {
            writeln!(self.stdout, "Program call:")?;
            writeln!(self.stdout, "{}", render_command_line(&args))?;
            self.stdout.flush()?;
        }

        tracing::info!("Execute {:?}", program);
        let status = match self.runner.run(&args) {
            Ok(Some(code)) => RunStatus::Exited(code),
            Ok(None) => RunStatus::Signaled,
            Err(Error::MissingTool(name)) => {
                return Err(Error::ExecutionFailure(format!(
                    "Built program not found: {name}"
                )));
            }
            Err(err) => return Err(err),
        };
        if status != RunStatus::Exited(0) {
            tracing::warn!("{:?} finished unsuccessfully: {:?}", program, status);
        }

        Ok(status)
    }

    /// Discover, compile, and optionally execute
    pub fn run(&mut self, request: &BuildRequest) -> Result<BuildOutcome, Error> {
        let library_flags = self.discover_library_flags()?;
        let invocation = self.assemble_invocation(request, &library_flags);
        self.compile(request, &invocation)?;

        let output_filepath = request.output_filepath();
        let run_status = if request.is_execute() {
            Some(self.execute(request, &output_filepath)?)
        } else {
            None
        };

        Ok(BuildOutcome {
            output_filepath,
            run_status,
        })
    }
}
