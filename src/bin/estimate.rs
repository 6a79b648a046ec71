// Estimate a footprint from a questionnaire JSON file and print a report
// Usage: cargo run --bin estimate -- answers.json --format markdown

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use carbon_estimator::{
    EngineConfig, FootprintEstimator, JsonFormatter, LifestyleInput, MarkdownFormatter,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "estimate", about = "Estimate an annual carbon footprint")]
struct Args {
    /// Questionnaire answers as JSON
    input: PathBuf,

    #[arg(long, value_enum, default_value = "markdown")]
    format: OutputFormat,

    /// Never call the advice provider
    #[arg(long)]
    offline: bool,

    /// JSON config file (defaults to environment variables)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carbon_estimator=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::from_env()?,
    };

    let estimator = if args.offline {
        FootprintEstimator::offline().with_strict_validation(config.strict_validation)
    } else {
        FootprintEstimator::from_config(&config)?
    };

    let contents = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {:?}", args.input))?;
    let lifestyle: LifestyleInput = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse questionnaire JSON: {:?}", args.input))?;

    let report = estimator.estimate(&lifestyle).await?;

    match args.format {
        OutputFormat::Markdown => println!("{}", MarkdownFormatter::format(&report)),
        OutputFormat::Json => println!("{}", JsonFormatter::format(&report)?),
    }

    Ok(())
}
