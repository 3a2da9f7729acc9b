//! Diagnostic utilities for install hints and colored output.

use std::path::Path;

use owo_colors::OwoColorize;

use crate::error::Error;

/// Package providing each known tool, as (apt, brew, choco) names
fn tool_packages(tool_name: &str) -> Option<(&'static str, &'static str, &'static str)> {
    // Tools may be spawned by absolute path, e.g., `/usr/bin/pkg-config`
    let file_name = Path::new(tool_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(tool_name);
    let file_name = file_name.strip_suffix(".exe").unwrap_or(file_name);

    match file_name {
        "pkg-config" | "pkgconf" => Some(("pkg-config", "pkg-config", "pkgconfiglite")),
        "opencv" | "opencv4" => Some(("libopencv-dev", "opencv", "opencv")),
        "g++" | "gcc" | "c++" | "cc" => Some(("g++", "gcc", "mingw")),
        "clang++" | "clang" => Some(("clang", "llvm", "llvm")),
        name if name.starts_with("g++-") || name.starts_with("x86_64-linux-gnu-g++") => {
            Some(("g++", "gcc", "mingw"))
        }
        name if name.starts_with("clang++-") => Some(("clang", "llvm", "llvm")),
        _ => None,
    }
}

/// Returns a platform-specific install suggestion for the given tool, if
/// the tool is one cvrun knows how to install.
pub fn install_suggestion(tool_name: &str) -> Option<String> {
    let (apt, brew, choco) = tool_packages(tool_name)?;

    Some(if cfg!(target_os = "macos") {
        format!("brew install {brew}  # provides {tool_name}")
    } else if cfg!(target_os = "windows") {
        format!("choco install {choco}  # provides {tool_name}")
    } else {
        // Linux (Debian/Ubuntu-style as most common)
        format!("sudo apt install {apt}  # provides {tool_name}")
    })
}

fn print_install_hint(tool_name: &str) {
    match install_suggestion(tool_name) {
        Some(suggestion) => eprintln!(
            "  {} install it with: {}",
            "hint:".cyan().bold(),
            suggestion,
        ),
        None => eprintln!(
            "  {} check that `{}` is installed and the path is correct",
            "hint:".cyan().bold(),
            tool_name,
        ),
    }
}

/// Prints a colored error message for a missing tool with an install suggestion.
pub fn print_missing_tool_error(tool_name: &str) {
    eprintln!(
        "{} required tool `{}` not found on this system",
        "error:".red().bold(),
        tool_name.bold(),
    );
    print_install_hint(tool_name);
}

/// Prints a colored warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}

/// Prints a colored error message.
pub fn print_error(message: &str) {
    eprintln!("{} {message}", "error:".red().bold());
}

/// Reports `err` on stderr the way `cvrun` users expect to read it
pub fn report_error(err: &Error, library_package: &str) {
    match err {
        Error::CompilationFailure(_) => print_error("Failed building, check your code"),
        Error::MissingTool(tool_name) => print_missing_tool_error(tool_name),
        Error::DiscoveryFailure(_) => {
            print_error(&err.to_string());
            print_install_hint(library_package);
        }
        err => print_error(&err.to_string()),
    }
}
