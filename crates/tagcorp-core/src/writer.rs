//! # Row Writer
//!
//! Serializes corpus rows line by line. Sentences are separated by two
//! blank lines; there is no header or trailer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{CorpusError, Result};
use crate::row::OutputRow;
use crate::walker::CorpusLine;

/// Blank lines written after every sentence.
pub const SENTENCE_SEPARATOR: &str = "\n\n";

/// Line-oriented writer for the nine-column corpus format.
#[derive(Debug)]
pub struct CorpusWriter<W: Write> {
    sink: W,
    rows_written: usize,
}

impl CorpusWriter<BufWriter<File>> {
    /// Create (or truncate) the corpus file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| CorpusError::CreateOutput {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> CorpusWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            rows_written: 0,
        }
    }

    /// Number of rows written so far.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn write_row(&mut self, row: &OutputRow) -> Result<()> {
        writeln!(self.sink, "{row}")?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn end_sentence(&mut self) -> Result<()> {
        self.sink.write_all(SENTENCE_SEPARATOR.as_bytes())?;
        Ok(())
    }

    pub fn write_line(&mut self, line: &CorpusLine) -> Result<()> {
        match line.row() {
            Some(row) => self.write_row(row),
            None => self.end_sentence(),
        }
    }

    /// Flush and hand back the sink.
    pub fn finish(mut self) -> Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}
