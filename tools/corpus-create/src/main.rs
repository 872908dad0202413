//! Corpus creation tool
//!
//! Annotates raw text through a CoreNLP server (or loads a CoreNLP JSON file)
//! and writes the tab-separated NER training corpus.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tagcorp_annotate::{
    load_annotated, read_input, Annotator, AnnotatorConfig, CoreNlpClient, DEFAULT_ANNOTATORS,
    DEFAULT_SERVER_URL,
};
use tagcorp_core::{emit_to_path, load_corpus, CorpusSummary, Document, EmitStats};
use tracing::info;

/// CLI arguments
#[derive(Parser)]
#[command(name = "corpus-create")]
#[command(about = "Build a tab-separated NER training corpus from annotated text")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate the input and write the corpus
    Create(CreateArgs),
    /// Summarize an existing corpus file
    Inspect {
        /// Corpus file to read
        corpus: PathBuf,
    },
}

#[derive(clap::Args, Debug, Clone)]
struct CreateArgs {
    /// Input file: raw text, or CoreNLP JSON with --annotated
    #[arg(short, long, env = "TAGCORP_INPUT", default_value = "relation_final_test.txt")]
    input: PathBuf,

    /// Corpus file to write
    #[arg(short, long, env = "TAGCORP_OUTPUT", default_value = "output.corp")]
    output: PathBuf,

    /// Treat the input as CoreNLP JSON instead of raw text
    #[arg(short, long)]
    annotated: bool,

    /// CoreNLP server URL
    #[arg(short, long, env = "TAGCORP_CORENLP_URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Comma-separated CoreNLP annotators
    #[arg(long, env = "TAGCORP_ANNOTATORS", default_value = DEFAULT_ANNOTATORS)]
    annotators: String,

    /// RegexNER mapping file, as seen by the server
    #[arg(long, env = "TAGCORP_REGEXNER_MAPPING")]
    regexner_mapping: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 120)]
    timeout_secs: u64,
}

impl CreateArgs {
    fn annotator_config(&self) -> AnnotatorConfig {
        AnnotatorConfig::new()
            .with_url(self.server.clone())
            .with_annotators(self.annotators.clone())
            .with_regexner_mapping(self.regexner_mapping.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

/// Obtain the annotated document. Runs before the output file is created, so
/// input failures never leave a partial corpus behind.
fn load_document(args: &CreateArgs) -> Result<Document> {
    if args.annotated {
        info!(input = %args.input.display(), "loading CoreNLP JSON");
        return load_annotated(&args.input)
            .with_context(|| format!("Failed to load annotations from {}", args.input.display()));
    }

    let text = read_input(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    info!(input = %args.input.display(), bytes = text.len(), server = %args.server, "annotating");

    let client = CoreNlpClient::new(args.annotator_config())
        .context("Failed to build CoreNLP client")?;
    client
        .annotate(&text)
        .context("CoreNLP annotation failed")
}

fn create(args: &CreateArgs) -> Result<EmitStats> {
    let document = load_document(args)?;
    let stats = emit_to_path(&args.output, [&document])
        .with_context(|| format!("Failed to write corpus to {}", args.output.display()))?;

    info!(
        output = %args.output.display(),
        sentences = stats.sentences,
        rows = stats.rows,
        mentions = stats.mentions,
        "corpus written"
    );
    Ok(stats)
}

fn inspect(corpus: &Path) -> Result<CorpusSummary> {
    let sentences = load_corpus(corpus)
        .with_context(|| format!("Failed to read corpus {}", corpus.display()))?;
    Ok(CorpusSummary::from_sentences(&sentences))
}

fn print_summary(summary: &CorpusSummary) {
    println!("sentences: {}", summary.sentences);
    println!("rows:      {}", summary.rows);
    println!("merged:    {}", summary.merged_rows);
    for (label, count) in &summary.labels {
        println!("  {label:<6} {count}");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Create(args) => {
            create(&args)?;
        }
        Commands::Inspect { corpus } => {
            print_summary(&inspect(&corpus)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: PathBuf, output: PathBuf) -> CreateArgs {
        CreateArgs {
            input,
            output,
            annotated: true,
            server: DEFAULT_SERVER_URL.to_string(),
            annotators: DEFAULT_ANNOTATORS.to_string(),
            regexner_mapping: None,
            timeout_secs: 120,
        }
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["corpus-create", "create"]).unwrap();
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.output, PathBuf::from("output.corp"));
                assert!(!args.annotated);
                assert_eq!(args.annotator_config().annotators, DEFAULT_ANNOTATORS);
            }
            Commands::Inspect { .. } => panic!("expected create"),
        }
    }

    #[test]
    fn test_create_and_inspect_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("article.json");
        let output = dir.path().join("output.corp");
        std::fs::write(
            &input,
            r#"{"sentences": [{"tokens": [
                {"word": "OneWest", "originalText": "OneWest", "lemma": "OneWest", "pos": "NNP", "ner": "ORGANIZATION"},
                {"word": "Bank", "originalText": "Bank", "lemma": "Bank", "pos": "NNP", "ner": "ORGANIZATION"},
                {"word": "grew", "originalText": "grew", "lemma": "grow", "pos": "VBD", "ner": "O"}
            ], "entitymentions": [{"tokenBegin": 0, "tokenEnd": 2, "docTokenBegin": 0, "docTokenEnd": 2}]}]}"#,
        )
        .unwrap();

        let stats = create(&args(input, output.clone())).unwrap();
        assert_eq!(stats.rows, 2);

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "0\tOrg\t0\tO\tNNP/NNP\tOneWest/Bank\tO\tO\tO\n0\tO\t1\tO\tVBD\tgrow\tO\tO\tO\n\n\n"
        );

        let summary = inspect(&output).unwrap();
        assert_eq!(summary.sentences, 1);
        assert_eq!(summary.merged_rows, 1);
    }

    #[test]
    fn test_missing_input_creates_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output.corp");

        assert!(create(&args(dir.path().join("absent.json"), output.clone())).is_err());
        assert!(!output.exists());
    }
}
