//! # tagcorp Core
//!
//! Turns annotated sentences into the nine-column, tab-separated training
//! corpus used by sequence taggers. Tokens inside a named-entity mention are
//! merged into one row; every other token gets a row of its own.
//!
//! ## Quick Start
//!
//! ```rust
//! use tagcorp_core::{CorpusEmitter, CorpusWriter, Document, Token};
//!
//! let mut doc = Document::new();
//! let sentence = doc.push_sentence(vec![
//!     Token::new("Wells", "NNP", "Wells", "ORGANIZATION"),
//!     Token::new("Fargo", "NNP", "Fargo", "ORGANIZATION"),
//!     Token::new("rose", "VBD", "rise", "O"),
//! ]);
//! sentence.add_mention(0..2);
//!
//! let mut emitter = CorpusEmitter::new(CorpusWriter::new(Vec::new()));
//! emitter.emit_document(&doc).unwrap();
//! let (bytes, _) = emitter.finish().unwrap();
//!
//! let text = String::from_utf8(bytes).unwrap();
//! assert!(text.starts_with("0\tOrg\t0\tO\tNNP/NNP\tWells/Fargo\tO\tO\tO\n"));
//! ```
pub mod corpus;
pub mod emitter;
pub mod error;
pub mod labels;
pub mod model;
pub mod row;
pub mod walker;
pub mod writer;

// Re-export primary API
pub use corpus::{load_corpus, parse_corpus, CorpusSentence, CorpusSummary};
pub use emitter::{emit_to_path, CorpusEmitter, EmitStats};
pub use error::{CorpusError, Result};
pub use labels::{map_ner, CorpusLabel};
pub use model::{Document, Mention, Sentence, Token};
pub use row::OutputRow;
pub use walker::{
    sentence_rows, Classification, CorpusLine, DocumentRows, Membership, MentionCursor,
    SentenceRows,
};
pub use writer::CorpusWriter;
