//! # Annotated Text Model
//!
//! Read-only view of what the annotation pipeline produced for one article:
//! sentences of tagged tokens plus the entity mentions detected in each.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::labels::CorpusLabel;

/// A single annotated token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Original surface form
    pub text: String,
    /// Part-of-speech tag
    pub pos: String,
    /// Dictionary base form
    pub lemma: String,
    /// Raw NER category from the pipeline (`"O"` for none)
    pub ner: String,
    /// Position within the sentence
    pub index: usize,
    /// Position within the whole article
    pub offset: usize,
}

impl Token {
    /// Create an unpositioned token. Offsets are assigned when the token is
    /// pushed into a [`Document`].
    pub fn new(
        text: impl Into<String>,
        pos: impl Into<String>,
        lemma: impl Into<String>,
        ner: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            pos: pos.into(),
            lemma: lemma.into(),
            ner: ner.into(),
            index: 0,
            offset: 0,
        }
    }

    /// Corpus label for this token's NER category.
    pub fn label(&self) -> CorpusLabel {
        CorpusLabel::from_ner(&self.ner)
    }
}

/// A contiguous entity span inside one sentence.
///
/// `start` and `end` (exclusive) are article-global token offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    pub start: usize,
    pub end: usize,
    pub tokens: Vec<Token>,
}

impl Mention {
    pub fn new(start: usize, end: usize, tokens: Vec<Token>) -> Self {
        Self { start, end, tokens }
    }

    /// Number of constituent tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Label of the whole span: the label of its last constituent token.
    pub fn label(&self) -> CorpusLabel {
        self.tokens
            .last()
            .map(Token::label)
            .unwrap_or(CorpusLabel::Outside)
    }

    /// Constituent POS tags joined with `/`.
    pub fn joined_pos(&self) -> String {
        join_with_slash(self.tokens.iter().map(|t| t.pos.as_str()))
    }

    /// Constituent surface forms joined with `/`.
    pub fn joined_text(&self) -> String {
        join_with_slash(self.tokens.iter().map(|t| t.text.as_str()))
    }
}

fn join_with_slash<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<Vec<_>>().join("/")
}

/// An annotated sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub tokens: Vec<Token>,
    /// Sorted by `start`, non-overlapping. Not verified.
    pub mentions: Vec<Mention>,
}

impl Sentence {
    /// Article offset of the first token, if any.
    pub fn first_offset(&self) -> Option<usize> {
        self.tokens.first().map(|t| t.offset)
    }

    /// Build a mention from a sentence-local token range.
    ///
    /// Returns `None` if the range is empty or falls outside the sentence.
    pub fn mention_for(&self, local: Range<usize>) -> Option<Mention> {
        if local.start >= local.end || local.end > self.tokens.len() {
            return None;
        }
        let tokens = self.tokens[local].to_vec();
        let start = tokens.first()?.offset;
        let end = tokens.last()?.offset + 1;
        Some(Mention::new(start, end, tokens))
    }

    /// Add a mention over a sentence-local token range.
    ///
    /// Returns `false` (and adds nothing) if the range is invalid.
    pub fn add_mention(&mut self, local: Range<usize>) -> bool {
        match self.mention_for(local) {
            Some(mention) => {
                self.mentions.push(mention);
                true
            }
            None => false,
        }
    }
}

/// All sentences of one annotated article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub sentences: Vec<Sentence>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of tokens across all sentences.
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(|s| s.tokens.len()).sum()
    }

    /// Append a sentence, assigning sentence and article positions to its tokens.
    pub fn push_sentence(&mut self, tokens: Vec<Token>) -> &mut Sentence {
        let base = self.token_count();
        let tokens = tokens
            .into_iter()
            .enumerate()
            .map(|(i, token)| Token {
                index: i,
                offset: base + i,
                ..token
            })
            .collect();

        self.sentences.push(Sentence {
            tokens,
            mentions: Vec::new(),
        });
        let last = self.sentences.len() - 1;
        &mut self.sentences[last]
    }
}
