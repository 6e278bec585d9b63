//! Batch scorer: appends a `similarity_score` column to a CSV of text pairs.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use textsim::batch::score_csv_file;
use textsim::embedding::{EmbedderConfig, SentenceEmbedder};
use textsim::scoring::SimilarityScorer;

#[derive(Debug, Parser)]
#[command(name = "textsim-batch", version, about)]
struct Args {
    /// Input CSV with `text1` and `text2` columns.
    input: PathBuf,

    /// Output CSV path.
    output: PathBuf,

    /// Sentence-embedding model directory. Stub embeddings when omitted.
    #[arg(long, env = "TEXTSIM_MODEL_PATH")]
    model: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let embedder = match &args.model {
        Some(path) => SentenceEmbedder::load(EmbedderConfig::new(path.clone()))?,
        None => {
            tracing::warn!("No model configured, scoring with stub embeddings");
            SentenceEmbedder::stub()
        }
    };
    let scorer = SimilarityScorer::new(Arc::new(embedder));

    let rows = score_csv_file(&scorer, &args.input, &args.output)?;
    println!("Saved {} scored rows to {}", rows, args.output.display());

    Ok(())
}
