//! # tagcorp
//!
//! Builds column-format NER training corpora from CoreNLP annotations.
//! Multi-token entity mentions are merged into single rows.

pub use tagcorp_annotate as annotate;
pub use tagcorp_core as corpus;

pub use tagcorp_annotate::{load_annotated, Annotator, AnnotatorConfig, CoreNlpClient};
pub use tagcorp_core::{
    emit_to_path, load_corpus, CorpusEmitter, CorpusLabel, CorpusWriter, Document, EmitStats,
};
