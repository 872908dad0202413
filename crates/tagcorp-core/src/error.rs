use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while emitting or reading a training corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Writing to the output sink failed.
    #[error("corpus I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The output file could not be created.
    #[error("failed to create corpus file {path:?}: {source}")]
    CreateOutput {
        /// Destination that could not be opened.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An existing corpus file could not be opened for reading.
    #[error("failed to read corpus file {path:?}: {source}")]
    ReadCorpus {
        /// File that could not be read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corpus line does not have the nine-column shape.
    #[error("malformed corpus row at line {line}: {reason}")]
    MalformedRow {
        /// 1-based line number in the corpus file.
        line: usize,
        /// What was wrong with the row.
        reason: String,
    },
}

/// Result type alias for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;
