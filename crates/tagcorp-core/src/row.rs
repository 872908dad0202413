//! # Corpus Rows
//!
//! One row of the nine-column training corpus. Columns, tab-separated:
//!
//! | # | content |
//! |---|---------|
//! | 1 | sentence index |
//! | 2 | corpus label |
//! | 3 | local token index |
//! | 4 | `O` |
//! | 5 | POS tag, or `/`-joined tags of a merged mention |
//! | 6 | lemma, or `/`-joined surface forms of a merged mention |
//! | 7-9 | `O` |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::labels::CorpusLabel;
use crate::model::{Mention, Token};

/// Number of tab-separated columns per row.
pub const COLUMN_COUNT: usize = 9;

/// Placeholder written into the unused columns.
pub const PLACEHOLDER: &str = "O";

/// A serializable corpus row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    pub sentence: usize,
    pub label: CorpusLabel,
    pub local_index: usize,
    pub pos: String,
    pub text: String,
}

impl OutputRow {
    /// Row for a token that is not part of any mention.
    pub fn for_token(sentence: usize, local_index: usize, token: &Token) -> Self {
        Self {
            sentence,
            label: token.label(),
            local_index,
            pos: token.pos.clone(),
            text: token.lemma.clone(),
        }
    }

    /// Merged row covering every token of `mention`.
    pub fn for_mention(sentence: usize, local_index: usize, mention: &Mention) -> Self {
        Self {
            sentence,
            label: mention.label(),
            local_index,
            pos: mention.joined_pos(),
            text: mention.joined_text(),
        }
    }

    /// Whether this row was merged from more than one token.
    pub fn is_merged(&self) -> bool {
        self.pos.contains('/')
    }

    /// Parse one non-blank corpus line. The error is a human-readable reason.
    pub fn parse_line(line: &str) -> Result<Self, String> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != COLUMN_COUNT {
            return Err(format!(
                "expected {COLUMN_COUNT} columns, found {}",
                fields.len()
            ));
        }

        let sentence = fields[0]
            .parse::<usize>()
            .map_err(|_| format!("invalid sentence index {:?}", fields[0]))?;
        let label = fields[1]
            .parse::<CorpusLabel>()
            .map_err(|e| e.to_string())?;
        let local_index = fields[2]
            .parse::<usize>()
            .map_err(|_| format!("invalid token index {:?}", fields[2]))?;

        Ok(Self {
            sentence,
            label,
            local_index,
            pos: fields[4].to_string(),
            text: fields[5].to_string(),
        })
    }
}

impl fmt::Display for OutputRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{PLACEHOLDER}\t{}\t{}\t{PLACEHOLDER}\t{PLACEHOLDER}\t{PLACEHOLDER}",
            self.sentence, self.label, self.local_index, self.pos, self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_row_uses_lemma() {
        let token = Token::new("founded", "VBN", "found", "O");
        let row = OutputRow::for_token(3, 5, &token);
        assert_eq!(row.to_string(), "3\tO\t5\tO\tVBN\tfound\tO\tO\tO");
        assert!(!row.is_merged());
    }

    #[test]
    fn test_mention_row_uses_surface_forms() {
        let mention = Mention::new(
            0,
            2,
            vec![
                Token::new("Wells", "NNP", "Wells", "ORGANIZATION"),
                Token::new("Fargo", "NNP", "Fargo", "ORGANIZATION"),
            ],
        );
        let row = OutputRow::for_mention(0, 0, &mention);
        assert_eq!(row.to_string(), "0\tOrg\t0\tO\tNNP/NNP\tWells/Fargo\tO\tO\tO");
        assert!(row.is_merged());
    }

    #[test]
    fn test_parse_line() {
        let row = OutputRow::parse_line("2\tPeop\t4\tO\tNNP\tSmith\tO\tO\tO").unwrap();
        assert_eq!(row.sentence, 2);
        assert_eq!(row.label, CorpusLabel::Peop);
        assert_eq!(row.local_index, 4);
        assert_eq!(row.text, "Smith");
    }

    #[test]
    fn test_parse_line_rejects_bad_rows() {
        assert!(OutputRow::parse_line("2\tPeop\t4").is_err());
        assert!(OutputRow::parse_line("x\tPeop\t4\tO\tNNP\tSmith\tO\tO\tO").is_err());
        let err = OutputRow::parse_line("0\tPER\t4\tO\tNNP\tSmith\tO\tO\tO").unwrap_err();
        assert!(err.contains("PER"));
    }
}
