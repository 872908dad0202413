//! # Corpus Emitter
//!
//! Drives the token walker over whole documents and streams the resulting
//! rows into a [`CorpusWriter`]. Rows are written as they are produced and
//! never collected.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::labels::CorpusLabel;
use crate::model::Document;
use crate::row::OutputRow;
use crate::walker::{CorpusLine, DocumentRows};
use crate::writer::CorpusWriter;

/// Counters collected while emitting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmitStats {
    pub sentences: usize,
    pub rows: usize,
    /// Rows for tokens outside any mention.
    pub standalone_tokens: usize,
    /// Rows produced from a mention, including single-token ones.
    pub mentions: usize,
    pub labels: BTreeMap<CorpusLabel, usize>,
}

impl EmitStats {
    fn record_row(&mut self, row: &OutputRow, from_mention: bool) {
        self.rows += 1;
        if from_mention {
            self.mentions += 1;
        } else {
            self.standalone_tokens += 1;
        }
        *self.labels.entry(row.label).or_default() += 1;
    }

    /// Fold another set of counters into this one.
    pub fn merge(&mut self, other: &EmitStats) {
        self.sentences += other.sentences;
        self.rows += other.rows;
        self.standalone_tokens += other.standalone_tokens;
        self.mentions += other.mentions;
        for (label, count) in &other.labels {
            *self.labels.entry(*label).or_default() += count;
        }
    }
}

/// Streams documents into one corpus sink.
///
/// Sentence indices keep counting across every document emitted through the
/// same emitter.
#[derive(Debug)]
pub struct CorpusEmitter<W: Write> {
    writer: CorpusWriter<W>,
    next_sentence: usize,
    totals: EmitStats,
}

impl CorpusEmitter<BufWriter<File>> {
    /// Emitter writing to a freshly created file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(CorpusWriter::create(path)?))
    }
}

impl<W: Write> CorpusEmitter<W> {
    pub fn new(writer: CorpusWriter<W>) -> Self {
        Self {
            writer,
            next_sentence: 0,
            totals: EmitStats::default(),
        }
    }

    /// Counters accumulated over all documents so far.
    pub fn totals(&self) -> &EmitStats {
        &self.totals
    }

    /// Write every sentence of `document`, returning the counters for it alone.
    pub fn emit_document(&mut self, document: &Document) -> Result<EmitStats> {
        if document.sentences.is_empty() {
            warn!("document has no sentences, nothing to emit");
        }

        let mut stats = EmitStats::default();
        let mut rows = DocumentRows::new(document, self.next_sentence);
        let mut sentence_rows = 0usize;

        for line in rows.by_ref() {
            match &line {
                CorpusLine::Token(row) => {
                    stats.record_row(row, false);
                    sentence_rows += 1;
                }
                CorpusLine::Mention(row) => {
                    stats.record_row(row, true);
                    sentence_rows += 1;
                }
                CorpusLine::SentenceBreak => {
                    debug!(
                        sentence = self.next_sentence + stats.sentences,
                        rows = sentence_rows,
                        "sentence emitted"
                    );
                    stats.sentences += 1;
                    sentence_rows = 0;
                }
            }
            self.writer.write_line(&line)?;
        }

        self.next_sentence = rows.next_sentence_index();
        self.totals.merge(&stats);
        Ok(stats)
    }

    /// Flush the sink and return it with the accumulated counters.
    pub fn finish(self) -> Result<(W, EmitStats)> {
        let totals = self.totals;
        info!(
            sentences = totals.sentences,
            rows = totals.rows,
            mentions = totals.mentions,
            "corpus complete"
        );
        Ok((self.writer.finish()?, totals))
    }
}

/// Create `path`, emit all `documents` into it and flush.
///
/// The file handle is released on every return path.
pub fn emit_to_path<'a, P, I>(path: P, documents: I) -> Result<EmitStats>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Document>,
{
    let mut emitter = CorpusEmitter::create(path.as_ref())?;
    for document in documents {
        emitter.emit_document(document)?;
    }
    let (_, totals) = emitter.finish()?;
    Ok(totals)
}
