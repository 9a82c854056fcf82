#![deny(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    #[error("failed to read source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "source is not the trusted Tanzil distribution (sha256 expected {expected}, got {actual})"
    )]
    SourceIntegrity { expected: String, actual: String },

    #[error("failed to parse source XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed source: {message}")]
    MalformedSource { message: String },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedSource {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
