//! Optional on-disk configuration

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        CVRUN_CONFIG_ENV_NAME, DEFAULT_COMPILER, DEFAULT_CONF_FILEPATH_UNDER_HOME,
        DEFAULT_LANGUAGE_STANDARD, DEFAULT_LIBRARY_PACKAGE, DEFAULT_PKG_CONFIG, HOME_ENV_NAME,
    },
    error::Error,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CvrunConfig {
    /// The filepath (or name on `PATH`) of the C++ compiler
    compiler_filepath: PathBuf,

    /// The language standard flag, e.g., `-std=c++14`
    language_standard: String,

    /// The filepath (or name on `PATH`) of `pkg-config`
    pkg_config_filepath: PathBuf,

    /// The `pkg-config` package name of the vision library
    library_package: String,

    /// Exit with the executed program's status instead of 0
    propagate_exit_status: bool,
}

impl CvrunConfig {
    pub fn compiler_filepath(&self) -> &Path {
        &self.compiler_filepath
    }

    pub fn language_standard(&self) -> &str {
        &self.language_standard
    }

    pub fn pkg_config_filepath(&self) -> &Path {
        &self.pkg_config_filepath
    }

    pub fn library_package(&self) -> &str {
        &self.library_package
    }

    pub fn propagate_exit_status(&self) -> bool {
        self.propagate_exit_status
    }

    pub fn with_compiler_filepath<P: AsRef<Path>>(mut self, compiler_filepath: P) -> Self {
        self.compiler_filepath = compiler_filepath.as_ref().to_path_buf();
        self
    }

    pub fn with_pkg_config_filepath<P: AsRef<Path>>(mut self, pkg_config_filepath: P) -> Self {
        self.pkg_config_filepath = pkg_config_filepath.as_ref().to_path_buf();
        self
    }

    pub fn with_library_package(mut self, library_package: &str) -> Self {
        self.library_package = library_package.to_string();
        self
    }

    pub fn with_propagate_exit_status(mut self, value: bool) -> Self {
        self.propagate_exit_status = value;
        self
    }
}

impl Default for CvrunConfig {
    fn default() -> Self {
        Self {
            compiler_filepath: PathBuf::from(DEFAULT_COMPILER),
            language_standard: DEFAULT_LANGUAGE_STANDARD.to_string(),
            pkg_config_filepath: PathBuf::from(DEFAULT_PKG_CONFIG),
            library_package: DEFAULT_LIBRARY_PACKAGE.to_string(),
            propagate_exit_status: false,
        }
    }
}

/// The configuration filepath: `$CVRUN_CONFIG`, else `$HOME/.cvrun/config.toml`
pub fn default_config_filepath() -> PathBuf {
    if let Ok(filepath) = env::var(CVRUN_CONFIG_ENV_NAME) {
        return PathBuf::from(filepath);
    }
    PathBuf::from(env::var(HOME_ENV_NAME).unwrap_or_default()).join(DEFAULT_CONF_FILEPATH_UNDER_HOME)
}

impl CvrunConfig {
    pub fn load() -> Result<Self, Error> {
        Self::load_path(default_config_filepath())
    }

    /// Load the configuration file, falling back to the defaults when it does
    /// not exist. Nothing is written to disk.
    pub fn load_path<P>(config_filepath: P) -> Result<Self, Error>
    where
        P: AsRef<Path> + std::fmt::Debug,
    {
        let config_filepath = config_filepath.as_ref();
        if !config_filepath.exists() {
            tracing::debug!("No configuration at {:?}, using defaults", config_filepath);
            return Ok(Self::default());
        }

        tracing::debug!("Load configuration: {:?}", config_filepath);
        confy::load_path(config_filepath).map_err(|err| {
            Error::ConfigError(format!(
                "Failed to load configuration: config_filepath={:?}, err={}",
                config_filepath, err
            ))
        })
    }

    /// The TOML text written by [`CvrunConfig::store_path`]
    pub fn to_toml_string(&self) -> Result<String, Error> {
        toml::to_string_pretty(self)
            .map_err(|err| Error::ConfigError(format!("Failed to serialize configuration: {err}")))
    }

    pub fn store_path<P>(&self, config_filepath: P) -> Result<(), Error>
    where
        P: AsRef<Path>,
    {
        let config_filepath = config_filepath.as_ref();
        let contents = self.to_toml_string()?;
        if let Some(parent) = config_filepath.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                Error::ConfigError(format!(
                    "Failed to create config directory {:?}: {}",
                    parent, err
                ))
            })?;
        }
        fs::write(config_filepath, contents).map_err(|err| {
            Error::ConfigError(format!(
                "Failed to write configuration: config_filepath={:?}, err={}",
                config_filepath, err
            ))
        })
    }
}

/// Returns the process-wide configuration, loaded on first use.
pub fn cvrun_config() -> Result<&'static CvrunConfig, Error> {
    static CVRUN_CONFIG: OnceLock<CvrunConfig> = OnceLock::new();

    if let Some(config) = CVRUN_CONFIG.get() {
        return Ok(config);
    }
    let config = CvrunConfig::load()?;
    Ok(CVRUN_CONFIG.get_or_init(|| config))
}
