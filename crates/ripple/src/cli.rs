//! Command line interface
//!
//! Argument parsing and the command implementations behind the `ripple`
//! binary. Logging goes to stderr so the JSON report on stdout stays clean.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use ripple_application::ports::registry::{
    list_chunk_similarity_providers, list_embedding_providers,
};
use ripple_application::ports::services::ImpactRequest;
use ripple_domain::entities::SourceChunk;
use ripple_domain::value_objects::{Embedding, ImpactReport};
use ripple_infrastructure::config::{AppConfig, ConfigLoader};
use ripple_infrastructure::logging::init_logging;
use ripple_infrastructure::{EmbeddingSeed, init_app};
use tracing::info;

/// Command line interface for Ripple
#[derive(Parser, Debug)]
#[command(name = "ripple")]
#[command(about = "Ripple - Source change impact analysis")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a source change and print the impact report as JSON
    Analyze(AnalyzeArgs),
    /// List registered similarity and embedding providers
    Providers,
}

/// Inputs of `ripple analyze`
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Previous version of the source text
    #[arg(long)]
    pub old_text: PathBuf,

    /// New version of the source text
    #[arg(long)]
    pub new_text: PathBuf,

    /// JSON array of chunks of the previous version
    #[arg(long)]
    pub old_chunks: PathBuf,

    /// JSON array of chunks of the new version
    #[arg(long)]
    pub new_chunks: PathBuf,

    /// Number of generated artifacts citing the source
    #[arg(long = "artifacts", default_value_t = 0)]
    pub affected_artifacts: usize,

    /// Total number of chunks cited as evidence
    #[arg(long = "total-evidence")]
    pub total_evidence_chunks: Option<usize>,

    /// JSON map of chunk id to precomputed embedding
    #[arg(long, conflicts_with = "embed")]
    pub embeddings: Option<PathBuf>,

    /// Embed the chunks with the configured embedding provider
    #[arg(long)]
    pub embed: bool,
}

/// Run the parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(config.logging.clone())?;

    match cli.command {
        Command::Analyze(args) => {
            let report = analyze(config, &args).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Providers => print!("{}", providers_listing()),
    }
    Ok(())
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

/// Build the context for `config` and analyze the change described by `args`
pub async fn analyze(config: AppConfig, args: &AnalyzeArgs) -> anyhow::Result<ImpactReport> {
    let request = load_request(args)?;
    let seed = load_seed(args, &request)?;

    info!(
        old_chunks = request.old_chunks.len(),
        new_chunks = request.new_chunks.len(),
        similarity_provider = %config.providers.similarity.provider,
        "Analyzing source change"
    );

    let context = init_app(config, seed).await?;
    Ok(context.impact_analysis().analyze(&request).await?)
}

/// Read the text and chunk files into an impact request
pub fn load_request(args: &AnalyzeArgs) -> anyhow::Result<ImpactRequest> {
    let old_text = read_file(&args.old_text)?;
    let new_text = read_file(&args.new_text)?;
    let old_chunks: Vec<SourceChunk> = read_json(&args.old_chunks)?;
    let new_chunks: Vec<SourceChunk> = read_json(&args.new_chunks)?;

    let mut request = ImpactRequest::new(old_text, new_text, old_chunks, new_chunks)
        .with_affected_artifacts(args.affected_artifacts);
    if let Some(total) = args.total_evidence_chunks {
        request = request.with_total_evidence_chunks(total);
    }
    Ok(request)
}

/// Decide how the similarity provider gets its embeddings
fn load_seed(args: &AnalyzeArgs, request: &ImpactRequest) -> anyhow::Result<EmbeddingSeed> {
    if let Some(path) = &args.embeddings {
        let embeddings: HashMap<String, Embedding> = read_json(path)?;
        return Ok(EmbeddingSeed::Precomputed(embeddings));
    }
    if args.embed {
        let chunks = request
            .old_chunks
            .iter()
            .chain(&request.new_chunks)
            .cloned()
            .collect();
        return Ok(EmbeddingSeed::EmbedChunks(chunks));
    }
    Ok(EmbeddingSeed::None)
}

/// Human-readable listing of every registered provider
pub fn providers_listing() -> String {
    let mut out = String::from("Similarity providers:\n");
    for (name, description) in list_chunk_similarity_providers() {
        out.push_str(&format!("  {name:<10} {description}\n"));
    }
    out.push_str("Embedding providers:\n");
    for (name, description) in list_embedding_providers() {
        out.push_str(&format!("  {name:<10} {description}\n"));
    }
    out
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = read_file(path)?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}
