use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobmatch::{
    load_postings, load_profile_embedding, load_profile_text, render_summary, run_with_config,
    write_matches, JobMatchConfig, MatchInputs, OutputFormat,
};

/// Rank job postings against a candidate profile embedding.
#[derive(Parser, Debug)]
#[command(name = "jobmatch", version, about)]
struct Cli {
    /// JSON array holding the profile embedding
    #[arg(long)]
    profile_embedding: PathBuf,

    /// Restructured profile text (SKILLS / EXPERIENCE / EDUCATION sections)
    #[arg(long)]
    profile_text: Option<PathBuf>,

    /// JSON array of posting records
    #[arg(long)]
    postings: PathBuf,

    /// Where to write the ranked matches [default: matched_jobs.<format>]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Artifact format: json or txt
    #[arg(long)]
    output_format: Option<OutputFormat>,

    /// Number of matches to return
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Minimum similarity, applied before and after fusion
    #[arg(long, allow_negative_numbers = true)]
    min_similarity: Option<f32>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut cfg = match &cli.config {
        Some(path) => JobMatchConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => JobMatchConfig::default(),
    };
    if let Some(top_k) = cli.top_k {
        cfg.matcher.top_k = top_k;
    }
    if let Some(min_similarity) = cli.min_similarity {
        cfg.matcher.min_similarity = min_similarity;
    }
    if let Some(format) = cli.output_format {
        cfg.output.format = format;
    }
    cfg.validate().context("invalid configuration")?;

    let profile_text = cli
        .profile_text
        .as_ref()
        .map(load_profile_text)
        .transpose()?;
    let inputs = MatchInputs {
        profile_embedding: load_profile_embedding(&cli.profile_embedding)?,
        postings: load_postings(&cli.postings)?,
        profile_text,
    };
    tracing::info!(
        postings = inputs.postings.len(),
        dimension = inputs.profile_embedding.len(),
        has_profile_text = inputs.profile_text.is_some(),
        "inputs_loaded"
    );

    let matches = run_with_config(&inputs, &cfg)?;

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("matched_jobs.{}", cfg.output.format)));
    write_matches(&output, &matches, &cfg.output)?;

    print!("{}", render_summary(&matches));
    println!("Results saved to {}", output.display());
    Ok(())
}
