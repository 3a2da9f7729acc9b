use std::{ffi::OsString, path::Path};

use crate::{flags::BuildMode, utils::render_command_line};

/// The fully assembled compiler argument list:
/// `[compiler, std] + mode flags + ["-o", output] + sources + library flags`
///
/// Paths are kept as OS strings and passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerInvocation {
    args: Vec<OsString>,
}

impl CompilerInvocation {
    pub fn new<C, O, P>(
        compiler_filepath: C,
        language_standard: &str,
        mode: BuildMode,
        output_filepath: O,
        src_filepaths: &[P],
        library_flags: &[String],
    ) -> Self
    where
        C: AsRef<Path>,
        O: AsRef<Path>,
        P: AsRef<Path>,
    {
        let mut args = vec![
            compiler_filepath.as_ref().as_os_str().to_os_string(),
            OsString::from(language_standard),
        ];
        args.extend(mode.flags().iter().map(OsString::from));
        args.extend([
            OsString::from("-o"),
            output_filepath.as_ref().as_os_str().to_os_string(),
        ]);
        args.extend(
            src_filepaths
                .iter()
                .map(|src_filepath| src_filepath.as_ref().as_os_str().to_os_string()),
        );
        args.extend(library_flags.iter().map(OsString::from));

        Self { args }
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Printable form for the verbose echo
    pub fn command_line(&self) -> String {
        render_command_line(&self.args)
    }
}
