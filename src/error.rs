//! Config loading errors
//!
//! The simulation itself never fails; only reading and validating a config
//! file can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config value `{name}` = {value} is out of range (expected {expected})")]
    OutOfRange {
        name: &'static str,
        value: f32,
        expected: &'static str,
    },
}
