use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncoderError {
    #[error("Source unavailable: {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Destination write failed: {path}: {source}")]
    DestinationWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Prompt error: {0}")]
    Prompt(#[from] std::io::Error),
}

impl EncoderError {
    /// Short message shown to the operator, without the underlying cause.
    pub fn operator_message(&self) -> &'static str {
        match self {
            EncoderError::SourceUnavailable { .. } => {
                "The input file specified could not be found."
            }
            EncoderError::DestinationWriteFailed { .. } => "Unable to write to the output file.",
            EncoderError::Prompt(_) => "Unable to read the file name from the terminal.",
        }
    }
}

pub type Result<T> = std::result::Result<T, EncoderError>;
