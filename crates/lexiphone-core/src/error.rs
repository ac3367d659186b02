use std::path::PathBuf;

use crate::loader::TextEncoding;

/// Failure to produce a dictionary from an input source
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Read error: {0}")]
    Read(#[from] std::io::Error),

    #[error("Input is not valid {encoding} (line {line})")]
    Decode { line: usize, encoding: TextEncoding },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PronunciationError {
    #[error("Pronunciation has no symbols")]
    Empty,

    #[error("Invalid phoneme symbol: {0:?}")]
    InvalidSymbol(String),
}
