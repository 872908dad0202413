//! # CoreNLP Server Client
//!
//! Sends raw text to a running CoreNLP server and converts its JSON answer
//! into the corpus model.

use std::time::Duration;

use reqwest::blocking::Client;
use tagcorp_core::Document;
use tracing::{debug, info};

use crate::corenlp::CoreNlpDocument;
use crate::error::{AnnotateError, Result};

/// Annotators requested when none are configured.
pub const DEFAULT_ANNOTATORS: &str = "tokenize,ssplit,pos,lemma,ner,regexner,entitymentions";

/// Default CoreNLP server address.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:9000";

/// Anything that can turn raw text into an annotated document.
pub trait Annotator {
    fn annotate(&self, text: &str) -> Result<Document>;
}

/// Settings for the CoreNLP server client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorConfig {
    /// Base URL of the CoreNLP server
    pub url: String,
    /// Comma-separated annotator list
    pub annotators: String,
    /// Server-side path of a RegexNER mapping file
    pub regexner_mapping: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVER_URL.to_string(),
            annotators: DEFAULT_ANNOTATORS.to_string(),
            regexner_mapping: None,
            timeout: Duration::from_secs(120),
        }
    }
}

impl AnnotatorConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_annotators(mut self, annotators: impl Into<String>) -> Self {
        self.annotators = annotators.into();
        self
    }

    pub fn with_regexner_mapping(mut self, mapping: Option<String>) -> Self {
        self.regexner_mapping = mapping;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The `properties` query parameter for a request.
    pub fn properties(&self) -> serde_json::Value {
        let mut props = serde_json::json!({
            "annotators": self.annotators,
            "outputFormat": "json",
        });
        if let Some(mapping) = &self.regexner_mapping {
            props["regexner.mapping"] = serde_json::Value::String(mapping.clone());
        }
        props
    }
}

/// Blocking client for a CoreNLP server.
pub struct CoreNlpClient {
    config: AnnotatorConfig,
    http: Client,
}

impl CoreNlpClient {
    pub fn new(config: AnnotatorConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }
}

impl Annotator for CoreNlpClient {
    fn annotate(&self, text: &str) -> Result<Document> {
        if text.trim().is_empty() {
            return Err(AnnotateError::EmptyInput);
        }

        let properties = self.config.properties().to_string();
        debug!(url = %self.config.url, %properties, "sending text to CoreNLP");

        let response = self
            .http
            .post(&self.config.url)
            .query(&[("properties", properties.as_str())])
            .body(text.to_string())
            .send()?
            .error_for_status()?;

        let raw: CoreNlpDocument = response.json()?;
        info!(sentences = raw.sentences.len(), "received CoreNLP annotation");
        raw.into_document()
    }
}
