use std::path::{Path, PathBuf};

use crate::{cli::BuildArgs, error::Error, flags::BuildMode, utils::resolve_output_filepath};

/// A single build, constructed once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    sources: Vec<PathBuf>,
    output: Option<PathBuf>,
    arguments: Vec<String>,
    mode: BuildMode,
    execute: bool,
    verbose: bool,
}

impl BuildRequest {
    pub fn new<P>(sources: &[P]) -> Result<Self, Error>
    where
        P: AsRef<Path>,
    {
        if sources.is_empty() {
            return Err(Error::InvalidArguments(
                "At least one source file is required".to_string(),
            ));
        }

        Ok(Self {
            sources: sources.iter().map(|x| x.as_ref().to_path_buf()).collect(),
            output: None,
            arguments: Vec::new(),
            mode: BuildMode::default(),
            execute: false,
            verbose: false,
        })
    }

    pub fn with_output<P: AsRef<Path>>(mut self, output: P) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn with_arguments<S: AsRef<str>>(mut self, arguments: &[S]) -> Self {
        self.arguments = arguments.iter().map(|x| x.as_ref().to_string()).collect();
        self
    }

    pub fn with_mode(mut self, mode: BuildMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_execute(mut self, value: bool) -> Self {
        self.execute = value;
        self
    }

    pub fn with_verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Arguments forwarded to the built program
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    pub fn is_execute(&self) -> bool {
        self.execute
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// The filepath the compiler writes to
    pub fn output_filepath(&self) -> PathBuf {
        resolve_output_filepath(&self.sources, self.output())
    }
}

impl TryFrom<&BuildArgs> for BuildRequest {
    type Error = Error;

    fn try_from(args: &BuildArgs) -> Result<Self, Self::Error> {
        let mut request = Self::new(&args.sources)?
            .with_mode(BuildMode::from_flags(args.release))
            .with_execute(args.execute)
            .with_verbose(args.verbose > 0);
        if let Some(output) = &args.output {
            request = request.with_output(output);
        }
        request.arguments = args
            .arguments
            .iter()
            .chain(&args.trailing_arguments)
            .cloned()
            .collect();

        Ok(request)
    }
}
