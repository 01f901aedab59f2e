use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::kernel::services::ports::DeckConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid settings {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Loads deck settings. Fields missing from the file keep their defaults; a missing file is
/// the default config.
pub fn load_config(path: &Path) -> Result<DeckConfig, ConfigError> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(DeckConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse_config(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(data: &str) -> Result<DeckConfig, serde_json::Error> {
    serde_json::from_str(data)
}

pub fn load_config_or_default(path: &Path) -> DeckConfig {
    load_config(path).unwrap_or_else(|error| {
        tracing::warn!(error = %error, "falling back to default deck settings");
        DeckConfig::default()
    })
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
