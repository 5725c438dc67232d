use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Error reading state file: {} | {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error
    },
    #[error("State file {} is not a JSON object: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error
    },
    #[error("Error writing state file: {} | {source}", path.display())]
    Write {
        path: PathBuf,
        source: io::Error
    },
    #[error("Error encoding state: {0}")]
    Encode(#[from] serde_json::Error)
}

impl StorageError {
    pub fn read(path: PathBuf, source: io::Error) -> Self {
        Self::Read { path, source }
    }

    pub fn parse(path: PathBuf, source: serde_json::Error) -> Self {
        Self::Parse { path, source }
    }

    pub fn write(path: PathBuf, source: io::Error) -> Self {
        Self::Write { path, source }
    }
}
