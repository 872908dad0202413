//! # Mention-Aware Token Walker
//!
//! Walks the tokens of a sentence and decides, per token, whether it stands
//! alone or belongs to an entity mention. A mention is emitted as one merged
//! row when its first token is visited; the remaining tokens of the span are
//! consumed silently.

use std::slice::Iter;

use crate::model::{Document, Mention, Sentence, Token};
use crate::row::OutputRow;

/// How a token relates to the mention under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    /// The token is emitted on its own.
    NotAMention,
    /// The token is inside a mention that is still open.
    PartOfMention,
    /// The token closes a mention.
    EndOfMention,
}

impl Membership {
    /// Whether this classification completes a row-unit.
    pub fn closes_unit(self) -> bool {
        !matches!(self, Membership::PartOfMention)
    }
}

/// Result of classifying one token offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    pub membership: Membership,
    /// Set when the offset opens a mention. The caller owes one merged row for it.
    pub opened: Option<&'a Mention>,
}

impl<'a> Classification<'a> {
    fn plain(membership: Membership) -> Self {
        Self {
            membership,
            opened: None,
        }
    }
}

/// Cursor over the mentions of a single sentence.
#[derive(Debug, Clone)]
pub struct MentionCursor<'a> {
    mentions: &'a [Mention],
    position: usize,
}

impl<'a> MentionCursor<'a> {
    pub fn new(mentions: &'a [Mention]) -> Self {
        Self {
            mentions,
            position: 0,
        }
    }

    /// Index of the mention under the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Classify the token at article offset `offset`.
    ///
    /// Offsets must be presented in increasing order, once each.
    pub fn classify(&mut self, offset: usize) -> Classification<'a> {
        let Some(mention) = self.mentions.get(self.position) else {
            return Classification::plain(Membership::NotAMention);
        };

        if offset == mention.start {
            let membership = if mention.len() == 1 {
                self.position += 1;
                Membership::EndOfMention
            } else {
                Membership::PartOfMention
            };
            return Classification {
                membership,
                opened: Some(mention),
            };
        }

        if offset + 1 == mention.end {
            self.position += 1;
            Classification::plain(Membership::EndOfMention)
        } else if offset > mention.start && offset + 1 < mention.end {
            Classification::plain(Membership::PartOfMention)
        } else {
            Classification::plain(Membership::NotAMention)
        }
    }
}

/// Lazy row sequence for one sentence.
#[derive(Debug, Clone)]
pub struct SentenceRows<'a> {
    sentence_index: usize,
    tokens: Iter<'a, Token>,
    cursor: MentionCursor<'a>,
    local_index: usize,
}

impl<'a> SentenceRows<'a> {
    pub fn new(sentence_index: usize, sentence: &'a Sentence) -> Self {
        Self {
            sentence_index,
            tokens: sentence.tokens.iter(),
            cursor: MentionCursor::new(&sentence.mentions),
            local_index: 0,
        }
    }
}

impl Iterator for SentenceRows<'_> {
    type Item = CorpusLine;

    fn next(&mut self) -> Option<CorpusLine> {
        for token in self.tokens.by_ref() {
            let class = self.cursor.classify(token.offset);
            let local_index = self.local_index;
            if class.membership.closes_unit() {
                self.local_index += 1;
            }

            match (class.membership, class.opened) {
                (_, Some(mention)) => {
                    return Some(CorpusLine::Mention(OutputRow::for_mention(
                        self.sentence_index,
                        local_index,
                        mention,
                    )));
                }
                (Membership::NotAMention, None) => {
                    return Some(CorpusLine::Token(OutputRow::for_token(
                        self.sentence_index,
                        local_index,
                        token,
                    )));
                }
                _ => {}
            }
        }
        None
    }
}

/// Item of the row stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusLine {
    /// Row for a token outside any mention.
    Token(OutputRow),
    /// Merged row for a whole mention.
    Mention(OutputRow),
    /// All rows of a sentence have been produced.
    SentenceBreak,
}

impl CorpusLine {
    pub fn row(&self) -> Option<&OutputRow> {
        match self {
            CorpusLine::Token(row) | CorpusLine::Mention(row) => Some(row),
            CorpusLine::SentenceBreak => None,
        }
    }

    pub fn into_row(self) -> Option<OutputRow> {
        match self {
            CorpusLine::Token(row) | CorpusLine::Mention(row) => Some(row),
            CorpusLine::SentenceBreak => None,
        }
    }
}

/// Lazy row sequence for a whole document, with a break after every sentence.
#[derive(Debug)]
pub struct DocumentRows<'a> {
    sentences: Iter<'a, Sentence>,
    next_index: usize,
    current: Option<SentenceRows<'a>>,
}

impl<'a> DocumentRows<'a> {
    /// Start numbering sentences at `first_index`.
    pub fn new(document: &'a Document, first_index: usize) -> Self {
        Self {
            sentences: document.sentences.iter(),
            next_index: first_index,
            current: None,
        }
    }

    /// Index the next sentence will receive.
    pub fn next_sentence_index(&self) -> usize {
        self.next_index
    }
}

impl Iterator for DocumentRows<'_> {
    type Item = CorpusLine;

    fn next(&mut self) -> Option<CorpusLine> {
        loop {
            if let Some(rows) = self.current.as_mut() {
                if let Some(line) = rows.next() {
                    return Some(line);
                }
                self.current = None;
                return Some(CorpusLine::SentenceBreak);
            }

            let sentence = self.sentences.next()?;
            self.current = Some(SentenceRows::new(self.next_index, sentence));
            self.next_index += 1;
        }
    }
}

/// Rows for a single sentence, collected.
pub fn sentence_rows(sentence_index: usize, sentence: &Sentence) -> Vec<OutputRow> {
    SentenceRows::new(sentence_index, sentence)
        .filter_map(CorpusLine::into_row)
        .collect()
}
