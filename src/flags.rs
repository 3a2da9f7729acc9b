//! Compilation profiles

use std::fmt;

use crate::constants::{DEBUG_FLAGS, RELEASE_FLAGS};

/// Compilation mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildMode {
    /// Warning-heavy debug build
    #[default]
    Debug,
    /// Optimized, hardened build
    Release,
}

impl BuildMode {
    /// Release wins only when explicitly requested; `-d` and no flag both mean debug
    pub fn from_flags(is_release: bool) -> Self {
        if is_release { Self::Release } else { Self::Debug }
    }

    /// The flag set of this mode. Release flags fully replace debug flags.
    pub fn flags(&self) -> &'static [&'static str] {
        match self {
            Self::Debug => DEBUG_FLAGS,
            Self::Release => RELEASE_FLAGS,
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Release => write!(f, "release"),
        }
    }
}
