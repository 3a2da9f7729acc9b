//! Filepath-related utility functions

use std::path::{Path, PathBuf};

use crate::{
    constants::{DEFAULT_MULTI_SOURCE_OUTPUT, OUTPUT_EXTENSION},
    error::Error,
};

/// Resolve the output filepath of a build.
///
/// An explicit output is used verbatim. A single source gets its extension
/// replaced by `.out`; a source without an extension keeps its whole file
/// name (`foo` becomes `foo.out`). Several sources default to `result.out`.
pub fn resolve_output_filepath<P>(src_filepaths: &[P], output: Option<&Path>) -> PathBuf
where
    P: AsRef<Path>,
{
    if let Some(output) = output {
        return output.to_path_buf();
    }

    match src_filepaths {
        [src_filepath] => derive_output_filepath(src_filepath),
        _ => PathBuf::from(DEFAULT_MULTI_SOURCE_OUTPUT),
    }
}

/// Replace the last extension of the file name with `.out`.
///
/// Dots in parent directories are never considered.
pub fn derive_output_filepath<P>(src_filepath: P) -> PathBuf
where
    P: AsRef<Path>,
{
    let src_filepath = src_filepath.as_ref();
    match src_filepath.extension() {
        Some(_) => src_filepath.with_extension(OUTPUT_EXTENSION),
        None => {
            let mut output = src_filepath.as_os_str().to_os_string();
            output.push(".");
            output.push(OUTPUT_EXTENSION);
            PathBuf::from(output)
        }
    }
}

/// Make `filepath` absolute against the current directory without touching
/// the filesystem.
pub fn absolute_filepath<P>(filepath: P) -> Result<PathBuf, Error>
where
    P: AsRef<Path>,
{
    let filepath = filepath.as_ref();
    if filepath.as_os_str().is_empty() {
        return Err(Error::InvalidArguments(
            "Cannot resolve an empty filepath".to_string(),
        ));
    }
    if filepath.is_absolute() {
        return Ok(filepath.to_path_buf());
    }
    Ok(std::path::absolute(filepath)?)
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn test_derive_output_filepath() {
        let test_inputs = [
            ("foo.cpp", "foo.out"),
            ("src/foo.cpp", "src/foo.out"),
            ("foo", "foo.out"),
            ("v1.2/foo", "v1.2/foo.out"),
            ("a.b.cpp", "a.b.out"),
            (".cpp", ".cpp.out"),
        ];

        for (src_filepath, expected) in test_inputs {
            assert_eq!(
                derive_output_filepath(src_filepath),
                PathBuf::from(expected),
                "src_filepath={src_filepath}"
            );
        }
    }

    #[test]
    fn test_absolute_filepath() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(absolute_filepath("foo.out").unwrap(), cwd.join("foo.out"));
        assert_eq!(
            absolute_filepath("/tmp/foo.out").unwrap(),
            PathBuf::from("/tmp/foo.out")
        );
        assert!(absolute_filepath("").is_err());
    }
}
