//! Settings loading.
//!
//! All tunables live in one TOML file. Missing fields and sections fall back
//! to their defaults, and a missing file is written out once so there is a
//! template to edit. No global state: the loaded value is passed down
//! explicitly.

mod settings;

pub use settings::{
    DetectionSettings, SamplingSettings, Settings, TrimSettings, VideoSettings,
};

use std::io;

use thiserror::Error;

/// Errors that can occur during config operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
