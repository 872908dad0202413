use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the boundary with the annotation pipeline.
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// The input text contains nothing to annotate.
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    /// The input file could not be read.
    #[error("failed to read input {path:?}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The annotation JSON did not match the expected CoreNLP layout.
    #[error("invalid CoreNLP JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The CoreNLP server could not be reached or answered with an error.
    #[error("CoreNLP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A mention points outside the tokens of its sentence.
    #[error(
        "mention [{begin}, {end}) is outside sentence {sentence} which has {len} tokens"
    )]
    InvalidMention {
        sentence: usize,
        begin: usize,
        end: usize,
        len: usize,
    },
}

/// Result type alias for annotation operations.
pub type Result<T> = std::result::Result<T, AnnotateError>;
