use std::path::PathBuf;

use supportdump_core::CoreError;

/// Loading the three `.jsons` exports.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Input unavailable: {path}: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record in {path} line {line}: {source}")]
    Malformed {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Reading or writing the corpus cache file.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cache encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Committing output files.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {var}: {source}")]
    Invalid {
        var: &'static str,
        #[source]
        source: CoreError,
    },
}

/// Anything that can end a session early.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
}
