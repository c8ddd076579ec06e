use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures while reading one of the optional project files. Checks turn these
/// into findings; nothing here escapes the runner.
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("{source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ValidatorError>;

pub fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ValidatorError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_json(path: &Path) -> Result<serde_json::Value> {
    let content = read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| ValidatorError::Json {
        path: path.to_path_buf(),
        source,
    })
}
