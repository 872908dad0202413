//! # Corpus Reader
//!
//! Reads emitted corpus files back for inspection.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::error::{CorpusError, Result};
use crate::labels::CorpusLabel;
use crate::row::OutputRow;

/// One sentence of a corpus file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSentence {
    /// Value of the sentence-index column.
    pub index: usize,
    pub rows: Vec<OutputRow>,
}

/// Load a corpus file written by [`crate::CorpusEmitter`].
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<CorpusSentence>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CorpusError::ReadCorpus {
        path: path.to_path_buf(),
        source,
    })?;
    parse_corpus(BufReader::new(file))
}

/// Parse corpus text. Blank lines end a sentence; runs of blank lines count once.
pub fn parse_corpus<R: BufRead>(reader: R) -> Result<Vec<CorpusSentence>> {
    let mut sentences = Vec::new();
    let mut current: Vec<OutputRow> = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;

        if line.trim().is_empty() {
            flush_sentence(&mut sentences, &mut current);
            continue;
        }

        let row = OutputRow::parse_line(&line).map_err(|reason| CorpusError::MalformedRow {
            line: number + 1,
            reason,
        })?;

        if let Some(first) = current.first() {
            if first.sentence != row.sentence {
                return Err(CorpusError::MalformedRow {
                    line: number + 1,
                    reason: format!(
                        "sentence index {} inside sentence {} without a separator",
                        row.sentence, first.sentence
                    ),
                });
            }
        }
        current.push(row);
    }

    // A file cut short after its last row still yields that sentence
    flush_sentence(&mut sentences, &mut current);

    Ok(sentences)
}

fn flush_sentence(sentences: &mut Vec<CorpusSentence>, current: &mut Vec<OutputRow>) {
    if let Some(first) = current.first() {
        let index = first.sentence;
        sentences.push(CorpusSentence {
            index,
            rows: std::mem::take(current),
        });
    }
}

/// Aggregate counts over a parsed corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusSummary {
    pub sentences: usize,
    pub rows: usize,
    /// Rows whose POS column holds more than one tag.
    pub merged_rows: usize,
    pub labels: BTreeMap<CorpusLabel, usize>,
}

impl CorpusSummary {
    pub fn from_sentences(sentences: &[CorpusSentence]) -> Self {
        let mut summary = Self {
            sentences: sentences.len(),
            ..Self::default()
        };

        for row in sentences.iter().flat_map(|s| s.rows.iter()) {
            summary.rows += 1;
            if row.is_merged() {
                summary.merged_rows += 1;
            }
            *summary.labels.entry(row.label).or_default() += 1;
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::CorpusEmitter;
    use crate::model::{Document, Token};
    use crate::writer::CorpusWriter;

    const SAMPLE: &str = "\
0\tOrg\t0\tO\tNNP/NNP\tWells/Fargo\tO\tO\tO
0\tO\t1\tO\tVBD\tsay\tO\tO\tO


1\tPeop\t0\tO\tNNP\tSmith\tO\tO\tO


";

    #[test]
    fn test_parse_sample() {
        let sentences = parse_corpus(SAMPLE.as_bytes()).unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].rows.len(), 2);
        assert_eq!(sentences[1].index, 1);
        assert_eq!(sentences[1].rows[0].label, CorpusLabel::Peop);

        let summary = CorpusSummary::from_sentences(&sentences);
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.merged_rows, 1);
        assert_eq!(summary.labels.get(&CorpusLabel::Outside), Some(&1));
    }

    #[test]
    fn test_missing_trailing_separator() {
        let sentences = parse_corpus("0\tO\t0\tO\tDT\tthe\tO\tO\tO".as_bytes()).unwrap();
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_malformed_row_reports_line() {
        let text = "0\tO\t0\tO\tDT\tthe\tO\tO\tO\n0\tO\t1\n";
        match parse_corpus(text.as_bytes()) {
            Err(CorpusError::MalformedRow { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_sentence_change_without_separator() {
        let text = "0\tO\t0\tO\tDT\tthe\tO\tO\tO\n1\tO\t0\tO\tDT\tthe\tO\tO\tO\n";
        assert!(matches!(
            parse_corpus(text.as_bytes()),
            Err(CorpusError::MalformedRow { line: 2, .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_corpus(dir.path().join("absent.corp")),
            Err(CorpusError::ReadCorpus { .. })
        ));
    }

    #[test]
    fn test_emitted_corpus_reads_back() {
        let mut doc = Document::new();
        let sentence = doc.push_sentence(vec![
            Token::new("Bank", "NNP", "Bank", "ORGANIZATION"),
            Token::new("of", "IN", "of", "ORGANIZATION"),
            Token::new("America", "NNP", "America", "ORGANIZATION"),
            Token::new("rallied", "VBD", "rally", "O"),
        ]);
        assert!(sentence.add_mention(0..3));
        doc.push_sentence(vec![Token::new("Chicago", "NNP", "Chicago", "LOCATION")]);

        let mut emitter = CorpusEmitter::new(CorpusWriter::new(Vec::new()));
        emitter.emit_document(&doc).unwrap();
        let (bytes, stats) = emitter.finish().unwrap();

        let sentences = parse_corpus(bytes.as_slice()).unwrap();
        let summary = CorpusSummary::from_sentences(&sentences);
        assert_eq!(summary.sentences, stats.sentences);
        assert_eq!(summary.rows, stats.rows);
        assert_eq!(summary.labels, stats.labels);
        assert_eq!(sentences[0].rows[0].text, "Bank/of/America");
    }
}
