use std::path::PathBuf;

/// Persistence-adapter errors for load/save of the record collection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store file {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("save rejected: {reason}")]
    SaveFailed { reason: String },

    #[error("store lock poisoned")]
    LockPoisoned,
}
