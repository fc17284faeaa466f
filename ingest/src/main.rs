use anyhow::Result;
use clap::Parser;
use corpus::config::{IngestConfig, MalformedPolicy, PipelineConfig, DEFAULT_VOCAB_CAPACITY};
use corpus::normalize::StopwordNormalizer;
use corpus::persist::{save_documents, save_meta, save_ranked, save_vocabulary, MetaFile, OutputPaths};
use corpus::pipeline::{run_pipeline, PipelineOutput};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "ingest")]
#[command(about = "Parse a directory of clustered JSONL documents and build a ranked vocabulary", long_about = None)]
struct Cli {
    /// Directory containing *.json files, one document per line
    #[arg(long)]
    input: String,
    /// Maximum number of normalized terms to keep
    #[arg(long, default_value_t = DEFAULT_VOCAB_CAPACITY)]
    vocab_size: usize,
    /// Stem terms while normalizing
    #[arg(long, default_value_t = false)]
    stem: bool,
    /// Also read *.json files in subdirectories
    #[arg(long, default_value_t = false)]
    recursive: bool,
    /// Skip and report malformed lines instead of aborting
    #[arg(long, default_value_t = false)]
    skip_malformed: bool,
    /// Write vocabulary, ranking, documents and metadata to this directory
    #[arg(long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let config = PipelineConfig {
        ingest: IngestConfig {
            recursive: cli.recursive,
            malformed: if cli.skip_malformed { MalformedPolicy::SkipAndReport } else { MalformedPolicy::Abort },
        },
        vocab_capacity: cli.vocab_size,
        stem: cli.stem,
    };
    let out = run_pipeline(&cli.input, &config, &StopwordNormalizer)?;

    for failure in &out.corpus.failures {
        tracing::warn!(path = %failure.path.display(), line = failure.line, reason = %failure.reason, "skipped line");
    }
    if let Some(output) = &cli.output {
        write_artifacts(output, &out)?;
        tracing::info!(output = %output, "artifacts written");
    }

    let summary = serde_json::json!({
        "documents": out.corpus.documents.len(),
        "clusters": out.corpus.clusters.len(),
        "distinct_terms": out.ranked.len(),
        "vocab_size": out.vocabulary.len(),
        "skipped_lines": out.corpus.failures.len(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn write_artifacts(output: &str, out: &PipelineOutput) -> Result<()> {
    let paths = OutputPaths::new(output);
    save_vocabulary(&paths, &out.vocabulary)?;
    save_ranked(&paths, &out.ranked)?;
    save_documents(&paths, &out.corpus.documents)?;
    let meta = MetaFile {
        num_docs: out.corpus.documents.len(),
        num_clusters: out.corpus.clusters.len(),
        vocab_size: out.vocabulary.len(),
        created_at: time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339).unwrap_or_else(|_| "".into()),
        version: 1,
    };
    save_meta(&paths, &meta)?;
    Ok(())
}
