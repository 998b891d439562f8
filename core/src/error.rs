use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("failed to read file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("encoding failed: {0}")]
    Encode(String),

    #[error("failed to write file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
