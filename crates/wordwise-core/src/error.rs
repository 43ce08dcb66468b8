use std::path::PathBuf;

/// Failures while reading dictionary or stopword resources
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Resource not found: {}", .path.display())]
    ResourceNotFound { path: PathBuf },

    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Map an IO error, keeping `NotFound` distinct from other read failures
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::ResourceNotFound { path }
        } else {
            LoadError::Io { path, source }
        }
    }
}

/// Failures of a lexical store backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store backend error: {message}")]
    Backend { message: String },

    #[error("Corrupt record for '{word}': {message}")]
    Codec { word: String, message: String },

    #[error("Store lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;
