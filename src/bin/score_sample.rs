//! Score a single water sample from a JSON file
//!
//! Usage: cargo run --bin score_sample -- <sample.json> [standards.json]
//!
//! Environment:
//! - HMPI_PRECISION: display decimals (default 2)
//! - HMPI_FORMAT: markdown | json (default markdown)
//! - HMPI_STANDARDS: overlay file used only for the HMPI pass
//! - RUST_LOG: tracing filter

use anyhow::{bail, Context};
use hmpi_scorer::{
    JsonFormatter, MarkdownFormatter, Sample, SampleScorer, StandardsOverlay, DEFAULT_PRECISION,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hmpi_scorer=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(sample_path) = args.next().map(PathBuf::from) else {
        bail!("usage: score_sample <sample.json> [standards.json]");
    };
    let standards_path = args.next().map(PathBuf::from);

    let precision: u32 = match std::env::var("HMPI_PRECISION") {
        Ok(p) => p
            .parse()
            .with_context(|| format!("HMPI_PRECISION must be a non-negative integer, got '{}'", p))?,
        Err(_) => DEFAULT_PRECISION,
    };
    let format = std::env::var("HMPI_FORMAT").unwrap_or_else(|_| "markdown".to_string());

    tracing::info!("Configuration:");
    tracing::info!("  Sample: {:?}", sample_path);
    tracing::info!("  Standards: {:?}", standards_path);
    tracing::info!("  Precision: {}", precision);
    tracing::info!("  Format: {}", format);

    let overlay = match &standards_path {
        Some(path) => StandardsOverlay::load(path)?,
        None => StandardsOverlay::new(),
    };

    let mut scorer = SampleScorer::with_overlay(&overlay)?;
    if let Ok(path) = std::env::var("HMPI_STANDARDS") {
        let hmpi_overlay = StandardsOverlay::load(&PathBuf::from(path))?;
        scorer = scorer.with_hmpi_overlay(&hmpi_overlay)?;
    }

    let sample = Sample::load(&sample_path)?;
    let result = scorer
        .score_sample(&sample)
        .with_context(|| format!("No result available for sample '{}'", sample.meta.sample_id))?;

    let output = match format.as_str() {
        "markdown" | "md" => MarkdownFormatter::format(&result, precision),
        "json" => JsonFormatter::format(&result, precision)?,
        other => bail!("unknown HMPI_FORMAT '{}' (expected markdown or json)", other),
    };

    println!("{}", output);
    Ok(())
}
