use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use clap::Parser;
use cvrun::{
    config::{CvrunConfig, default_config_filepath},
    constants::{DEFAULT_COMPILER, DEFAULT_PKG_CONFIG, LIBRARY_PACKAGE_CANDIDATES},
    diagnostics::{print_missing_tool_error, print_warning},
    error::Error,
    runner::{ProcessRunner, SystemRunner},
    utils::{init_logging, render_command_line},
};

/// CLI arguments for cvrun-init
#[derive(Parser, Debug)]
#[command(
    name = "cvrun-init",
    about = "Auto-detect the C++ compiler, pkg-config and OpenCV, and generate cvrun configuration",
    version
)]
struct InitArgs {
    /// Output path for the generated config file (default: $CVRUN_CONFIG or ~/.cvrun/config.toml)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Print detected configuration without writing to disk
    #[arg(long)]
    dry_run: bool,

    /// Compiler to look for instead of g++
    #[arg(long, default_value = DEFAULT_COMPILER)]
    compiler: String,

    /// Verbose mode
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn find_tool(name: &str) -> Result<PathBuf, Error> {
    which::which(name).map_err(|_| {
        print_missing_tool_error(name);
        Error::MissingTool(name.to_string())
    })
}

/// The first OpenCV package name `pkg-config` knows about
fn detect_library_package(pkg_config: &Path) -> Option<&'static str> {
    LIBRARY_PACKAGE_CANDIDATES.iter().copied().find(|package| {
        let args = [
            pkg_config.as_os_str().to_os_string(),
            OsString::from("--exists"),
            OsString::from(package),
        ];
        match SystemRunner.capture(&args) {
            Ok(output) => output.success(),
            Err(err) => {
                tracing::warn!("`{}` failed: {}", render_command_line(&args), err);
                false
            }
        }
    })
}

fn detect_config(compiler: &str) -> Result<CvrunConfig, Error> {
    eprintln!("Auto-detecting build tools...");
    let compiler_filepath = find_tool(compiler)?;
    eprintln!("  {}: {}", compiler, compiler_filepath.display());

    let pkg_config_filepath = find_tool(DEFAULT_PKG_CONFIG)?;
    eprintln!("  pkg-config: {}", pkg_config_filepath.display());

    let mut config = CvrunConfig::default()
        .with_compiler_filepath(&compiler_filepath)
        .with_pkg_config_filepath(&pkg_config_filepath);
    match detect_library_package(&pkg_config_filepath) {
        Some(package) => {
            eprintln!("  OpenCV package: {}", package);
            config = config.with_library_package(package);
        }
        None => print_warning(&format!(
            "no OpenCV package found (tried: {}), keeping `{}`",
            LIBRARY_PACKAGE_CANDIDATES.join(", "),
            config.library_package()
        )),
    }

    Ok(config)
}

fn main() -> Result<(), Error> {
    let args = InitArgs::parse();
    init_logging(args.verbose)?;

    let config = detect_config(&args.compiler)?;

    eprintln!();
    eprintln!("=== Configuration Summary ===");
    eprintln!("compiler          : {}", config.compiler_filepath().display());
    eprintln!("language standard : {}", config.language_standard());
    eprintln!("pkg-config        : {}", config.pkg_config_filepath().display());
    eprintln!("library package   : {}", config.library_package());

    let output_path = args.output.unwrap_or_else(default_config_filepath);
    if args.dry_run {
        eprintln!();
        eprintln!("=== {} (dry run) ===", output_path.display());
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    config.store_path(&output_path)?;

    eprintln!();
    eprintln!("Config written to: {}", output_path.display());
    eprintln!("To customize, edit: {}", output_path.display());

    Ok(())
}
