//! Logging setup shared by the binaries

use std::env;

use tracing::Level;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use crate::{constants::CVRUN_LOG_ENV_NAME, error::Error};

/// Map the `-v` count onto a log level
pub fn log_level_from_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the stderr subscriber. `$CVRUN_LOG` overrides the verbosity.
pub fn init_logging(verbose: u8) -> Result<(), Error> {
    let filter = match env::var(CVRUN_LOG_ENV_NAME) {
        Ok(directive) => EnvFilter::try_new(directive)
            .map_err(|err| Error::LoggerError(format!("{CVRUN_LOG_ENV_NAME}: {err}")))?,
        Err(_) => EnvFilter::default()
            .add_directive(LevelFilter::from_level(log_level_from_verbosity(verbose)).into()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .map_err(|err| Error::LoggerError(err.to_string()))
}
