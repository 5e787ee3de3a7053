use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown form variant {0:?}")]
    UnknownVariant(String),

    #[error("storage entry {key:?} could not be accessed")]
    Storage {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize form state")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to format submission timestamp")]
    Timestamp(#[from] time::error::Format),

    #[error("invalid configuration in {path:?}: {message}")]
    Config { path: PathBuf, message: String },
}

pub type Result<T, E = FormError> = std::result::Result<T, E>;
