//! # tagcorp Annotate
//!
//! Boundary with the Stanford CoreNLP pipeline. Annotation itself happens
//! outside this crate: either a CoreNLP server is asked over HTTP, or a JSON
//! file it produced earlier is loaded.

pub mod client;
pub mod corenlp;
pub mod error;

use std::path::Path;

use tagcorp_core::Document;

pub use client::{
    Annotator, AnnotatorConfig, CoreNlpClient, DEFAULT_ANNOTATORS, DEFAULT_SERVER_URL,
};
pub use corenlp::{CoreNlpDocument, CoreNlpMention, CoreNlpSentence, CoreNlpToken};
pub use error::{AnnotateError, Result};

/// Read a UTF-8 text file.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| AnnotateError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a CoreNLP JSON file into the corpus model.
pub fn load_annotated<P: AsRef<Path>>(path: P) -> Result<Document> {
    let json = read_input(path)?;
    CoreNlpDocument::from_json(&json)?.into_document()
}
