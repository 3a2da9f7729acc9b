//! Compiler flag tables, tool defaults, and environment variable names.

/// Compiler flags used for debug builds (the default mode).
pub const DEBUG_FLAGS: &[&str] = &[
    "-ggdb",
    "-pipe",
    "-Wundef",
    "-Wstrict-overflow=5",
    "-Wsign-promo",
    "-Woverloaded-virtual",
    "-Wold-style-cast",
    "-Wctor-dtor-privacy",
    "-Wformat=2",
    "-Winvalid-pch",
    "-Wmissing-include-dirs",
    "-Wpacked",
    "-Wpadded",
    "-Wall",
    "-Wextra",
    "-pedantic",
    "-Wdouble-promotion",
    "-Wshadow",
    "-Wfloat-equal",
    "-Wcast-align",
    "-Wcast-qual",
    "-Wwrite-strings",
    "-Wconversion",
    "-Wsign-conversion",
    "-Wmissing-declarations",
    "-Wredundant-decls",
    "-Wdisabled-optimization",
    "-Winline",
    "-Wswitch-default",
    "-Wswitch-enum",
    "-Wuseless-cast",
    "-Wlogical-op",
    "-Wzero-as-null-pointer-constant",
    "-Wnoexcept",
    "-Wstrict-null-sentinel",
];

/// Compiler flags used for release builds. Replaces [`DEBUG_FLAGS`] entirely.
pub const RELEASE_FLAGS: &[&str] = &[
    "-O2",
    "-pipe",
    "-s",
    "-DNDEBUG",
    "-Wall",
    "-D_FORTIFY_SOURCE=1",
    "-fstack-protector-strong",
    "-Wdisabled-optimization",
    "-Wstack-protector",
    "-Winline",
];

/// The default C++ compiler
pub const DEFAULT_COMPILER: &str = "g++";

/// The default language standard flag passed right after the compiler
pub const DEFAULT_LANGUAGE_STANDARD: &str = "-std=c++14";

/// The default flag discovery tool
pub const DEFAULT_PKG_CONFIG: &str = "pkg-config";

/// The default `pkg-config` package name of the vision library
pub const DEFAULT_LIBRARY_PACKAGE: &str = "opencv";

/// Package names tried by `cvrun-init`, most recent first
pub const LIBRARY_PACKAGE_CANDIDATES: &[&str] = &["opencv4", "opencv"];

/// Output filename used when several sources are given without `-o`
pub const DEFAULT_MULTI_SOURCE_OUTPUT: &str = "result.out";

/// Extension appended to a single source's stem to derive the output
pub const OUTPUT_EXTENSION: &str = "out";

/// Environment variable name for overriding the cvrun config file path.
pub const CVRUN_CONFIG_ENV_NAME: &str = "CVRUN_CONFIG";

/// Environment variable name for the log filter directive.
pub const CVRUN_LOG_ENV_NAME: &str = "CVRUN_LOG";

/// Environment variable name for the user's home directory.
pub const HOME_ENV_NAME: &str = "HOME";

/// The default filepath of the configuration file under `$HOME`.
pub const DEFAULT_CONF_FILEPATH_UNDER_HOME: &str = ".cvrun/config.toml";
