//! Library flag discovery through `pkg-config`

use std::{ffi::OsString, path::Path};

use crate::{error::Error, runner::ProcessRunner, utils::render_command_line};

/// The `pkg-config` query for compiler and linker flags of `package`
pub fn discovery_command<P>(pkg_config_filepath: P, package: &str) -> Vec<OsString>
where
    P: AsRef<Path>,
{
    vec![
        pkg_config_filepath.as_ref().as_os_str().to_os_string(),
        OsString::from(package),
        OsString::from("--cflags"),
        OsString::from("--libs"),
    ]
}

/// Query the compiler and linker flags of `package`.
///
/// The output is split on whitespace and returned verbatim. A missing tool
/// or a non-zero exit is an error; no fallback flags are substituted.
pub fn discover_library_flags<R, P>(
    runner: &R,
    pkg_config_filepath: P,
    package: &str,
) -> Result<Vec<String>, Error>
where
    R: ProcessRunner + ?Sized,
    P: AsRef<Path>,
{
    let args = discovery_command(pkg_config_filepath, package);
    tracing::debug!("Discover library flags: {:?}", args);

    let output = runner.capture(&args)?;
    if !output.success() {
        let reason = output.stderr.trim();
        return Err(Error::DiscoveryFailure(format!(
            "`{}` exited with {:?}{}",
            render_command_line(&args),
            output.code,
            if reason.is_empty() {
                String::new()
            } else {
                format!(": {reason}")
            }
        )));
    }

    let flags: Vec<String> = output
        .stdout
        .split_whitespace()
        .map(String::from)
        .collect();
    tracing::info!("Library flags for `{}`: {:?}", package, flags);

    Ok(flags)
}
