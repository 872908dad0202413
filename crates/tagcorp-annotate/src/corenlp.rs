//! # CoreNLP JSON Model
//!
//! The subset of CoreNLP's `outputFormat=json` document that the corpus
//! needs, and its conversion into a [`tagcorp_core::Document`].

use serde::{Deserialize, Serialize};
use tagcorp_core::{Document, Mention, Token};
use tracing::{debug, warn};

use crate::error::{AnnotateError, Result};

/// Top-level CoreNLP JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreNlpDocument {
    #[serde(default)]
    pub sentences: Vec<CoreNlpSentence>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreNlpSentence {
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub tokens: Vec<CoreNlpToken>,
    /// Present when the `entitymentions` annotator ran.
    #[serde(default, rename = "entitymentions")]
    pub entity_mentions: Vec<CoreNlpMention>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreNlpToken {
    /// 1-based position in the sentence
    #[serde(default)]
    pub index: usize,
    pub word: String,
    #[serde(default)]
    pub original_text: Option<String>,
    #[serde(default)]
    pub lemma: Option<String>,
    #[serde(default)]
    pub pos: Option<String>,
    #[serde(default)]
    pub ner: Option<String>,
}

impl CoreNlpToken {
    fn into_token(self) -> Token {
        let text = self.original_text.unwrap_or_else(|| self.word.clone());
        let lemma = self.lemma.unwrap_or_else(|| text.clone());
        Token::new(
            text,
            self.pos.unwrap_or_default(),
            lemma,
            self.ner.unwrap_or_else(|| "O".to_string()),
        )
    }
}

/// An entity mention. `token_begin`/`token_end` are sentence-local,
/// `doc_token_*` are article-global; both ends exclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreNlpMention {
    pub token_begin: usize,
    pub token_end: usize,
    #[serde(default)]
    pub doc_token_begin: Option<usize>,
    #[serde(default)]
    pub doc_token_end: Option<usize>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub ner: Option<String>,
}

impl CoreNlpDocument {
    /// Parse CoreNLP JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert into the corpus model.
    ///
    /// Article offsets are cumulative token counts. Mention spans come from the
    /// sentence-local bounds, which are checked against the sentence; any
    /// `docToken*` values are ignored. Order and overlap are taken as given.
    pub fn into_document(self) -> Result<Document> {
        let mut document = Document::new();

        for (sentence_idx, raw) in self.sentences.into_iter().enumerate() {
            let tokens = raw
                .tokens
                .into_iter()
                .map(CoreNlpToken::into_token)
                .collect();
            let sentence = document.push_sentence(tokens);
            let len = sentence.tokens.len();
            let base = sentence.first_offset().unwrap_or_default();

            for mention in raw.entity_mentions {
                let (begin, end) = (mention.token_begin, mention.token_end);
                if begin >= end || end > len {
                    return Err(AnnotateError::InvalidMention {
                        sentence: sentence_idx,
                        begin,
                        end,
                        len,
                    });
                }

                // The span always follows the checked local bounds
                let (start, stop) = (base + begin, base + end);
                if mention.doc_token_begin.is_some_and(|b| b != start)
                    || mention.doc_token_end.is_some_and(|e| e != stop)
                {
                    warn!(
                        sentence = sentence_idx,
                        doc_begin = ?mention.doc_token_begin,
                        doc_end = ?mention.doc_token_end,
                        start,
                        stop,
                        "document token offsets disagree with sentence offsets, using sentence offsets"
                    );
                }
                sentence.mentions.push(Mention::new(
                    start,
                    stop,
                    sentence.tokens[begin..end].to_vec(),
                ));
            }

            debug!(
                sentence = sentence_idx,
                tokens = len,
                mentions = sentence.mentions.len(),
                "converted sentence"
            );
        }

        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagcorp_core::sentence_rows;

    const ONEWEST_JSON: &str = r#"{
      "sentences": [
        {
          "index": 0,
          "tokens": [
            {"index": 1, "word": "Hello", "originalText": "Hello", "lemma": "hello", "pos": "UH", "ner": "O"},
            {"index": 2, "word": ".", "originalText": ".", "lemma": ".", "pos": ".", "ner": "O"}
          ],
          "entitymentions": []
        },
        {
          "index": 1,
          "tokens": [
            {"index": 1, "word": "OneWest", "originalText": "OneWest", "lemma": "OneWest", "pos": "NNP", "ner": "ORGANIZATION"},
            {"index": 2, "word": "Bank", "originalText": "Bank", "lemma": "Bank", "pos": "NNP", "ner": "ORGANIZATION"},
            {"index": 3, "word": "Group", "originalText": "Group", "lemma": "Group", "pos": "NNP", "ner": "ORGANIZATION"},
            {"index": 4, "word": "LLC", "originalText": "LLC", "lemma": "LLC", "pos": "NNP", "ner": "ORGANIZATION"},
            {"index": 5, "word": "was", "originalText": "was", "lemma": "be", "pos": "VBD", "ner": "O"},
            {"index": 6, "word": "founded", "originalText": "founded", "lemma": "found", "pos": "VBN", "ner": "O"}
          ],
          "entitymentions": [
            {"docTokenBegin": 2, "docTokenEnd": 6, "tokenBegin": 0, "tokenEnd": 4,
             "text": "OneWest Bank Group LLC", "characterOffsetBegin": 7,
             "characterOffsetEnd": 29, "ner": "ORGANIZATION"}
          ]
        }
      ]
    }"#;

    #[test]
    fn test_offsets_accumulate_across_sentences() {
        let doc = CoreNlpDocument::from_json(ONEWEST_JSON)
            .unwrap()
            .into_document()
            .unwrap();

        assert_eq!(doc.sentences.len(), 2);
        assert_eq!(doc.sentences[1].first_offset(), Some(2));
        let mention = &doc.sentences[1].mentions[0];
        assert_eq!((mention.start, mention.end), (2, 6));
        assert_eq!(mention.joined_text(), "OneWest/Bank/Group/LLC");
    }

    #[test]
    fn test_converted_rows() {
        let doc = CoreNlpDocument::from_json(ONEWEST_JSON)
            .unwrap()
            .into_document()
            .unwrap();
        let rows = sentence_rows(1, &doc.sentences[1]);

        assert_eq!(
            rows[0].to_string(),
            "1\tOrg\t0\tO\tNNP/NNP/NNP/NNP\tOneWest/Bank/Group/LLC\tO\tO\tO"
        );
        assert_eq!(rows[1].to_string(), "1\tO\t1\tO\tVBD\tbe\tO\tO\tO");
    }

    #[test]
    fn test_missing_doc_offsets_fall_back_to_local() {
        let json = r#"{"sentences": [
            {"tokens": [{"word": "a", "pos": "DT"}, {"word": "b", "pos": "DT"}]},
            {"tokens": [{"word": "Acme", "pos": "NNP", "ner": "ORGANIZATION"},
                        {"word": "Corp", "pos": "NNP", "ner": "ORGANIZATION"}],
             "entitymentions": [{"tokenBegin": 0, "tokenEnd": 2}]}
        ]}"#;
        let doc = CoreNlpDocument::from_json(json)
            .unwrap()
            .into_document()
            .unwrap();

        let mention = &doc.sentences[1].mentions[0];
        assert_eq!((mention.start, mention.end), (2, 4));
        let token = &doc.sentences[0].tokens[0];
        assert_eq!(token.text, "a");
        assert_eq!(token.lemma, "a");
        assert_eq!(token.ner, "O");
    }

    #[test]
    fn test_mismatched_doc_offsets_use_local_span() {
        let json = r#"{"sentences": [
            {"tokens": [{"word": "a", "pos": "DT"}, {"word": "b", "pos": "DT"}]},
            {"tokens": [{"word": "Acme", "pos": "NNP", "ner": "ORGANIZATION"},
                        {"word": "Corp", "pos": "NNP", "ner": "ORGANIZATION"},
                        {"word": "fell", "lemma": "fall", "pos": "VBD", "ner": "O"}],
             "entitymentions": [{"tokenBegin": 0, "tokenEnd": 2,
                                 "docTokenBegin": 3, "docTokenEnd": 5}]}
        ]}"#;
        let doc = CoreNlpDocument::from_json(json)
            .unwrap()
            .into_document()
            .unwrap();

        let mention = &doc.sentences[1].mentions[0];
        assert_eq!((mention.start, mention.end), (2, 4));

        let rows: Vec<String> = sentence_rows(1, &doc.sentences[1])
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            rows,
            vec![
                "1\tOrg\t0\tO\tNNP/NNP\tAcme/Corp\tO\tO\tO",
                "1\tO\t1\tO\tVBD\tfall\tO\tO\tO",
            ]
        );
    }

    #[test]
    fn test_out_of_range_mention() {
        let json = r#"{"sentences": [
            {"tokens": [{"word": "Acme"}], "entitymentions": [{"tokenBegin": 0, "tokenEnd": 3}]}
        ]}"#;
        let err = CoreNlpDocument::from_json(json)
            .unwrap()
            .into_document()
            .unwrap_err();
        assert!(matches!(
            err,
            AnnotateError::InvalidMention {
                sentence: 0,
                begin: 0,
                end: 3,
                len: 1
            }
        ));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            CoreNlpDocument::from_json("{\"sentences\": 3}"),
            Err(AnnotateError::Json(_))
        ));
    }
}
