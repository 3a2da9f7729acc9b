//! Command-line rendering utility functions

use std::ffi::OsStr;

/// Join an argument list into a single printable command line.
///
/// Non-UTF-8 arguments are rendered lossily; only use this for display.
pub fn render_command_line<S>(args: &[S]) -> String
where
    S: AsRef<OsStr>,
{
    args.iter()
        .map(|arg| arg.as_ref().to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Map a program's exit code onto a process exit byte. Codes outside
/// `0..=255` cannot be represented and become 1.
pub fn exit_code_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
