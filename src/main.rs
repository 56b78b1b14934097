//! Diceware CLI
//!
//! Prompts for physical dice rolls and prints the resulting passphrase,
//! optionally with an entropy estimate and a strength score.

use clap::{Parser, ValueEnum};
use diceware::{
    config::{ConfigError, FileConfig},
    estimate::{EntropyEstimator, EstimateError},
    metrics::{MetricsError, MetricsRegistry},
    prompt::{PromptError, RollPrompt},
    report,
    strength::{StrengthError, StrengthScorer, ZxcvbnScorer},
    wordlist::{WordListAsset, WordListError, WordListVariant},
};
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Toml,
}

/// Generate a diceware passphrase from physical dice rolls.
#[derive(Debug, Parser)]
#[command(name = "diceware", version)]
struct Cli {
    /// Number of words to generate
    #[arg(short, long)]
    words: Option<u32>,

    /// Use the alternate word list from Alan Beale
    #[arg(short, long)]
    beale: bool,

    /// Display entropy
    #[arg(short, long)]
    entropy: bool,

    /// Display password strength
    #[arg(short, long)]
    strength: bool,

    /// Terms the strength scorer should treat as known (name, birthday, ...)
    #[arg(long = "exclude", value_name = "TERM")]
    exclusions: Vec<String>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Word list file, overriding the configured path
    #[arg(long, value_name = "PATH")]
    wordlist: Option<PathBuf>,

    /// Reject word lists that repeat a roll code
    #[arg(long)]
    strict: bool,

    /// Assumed attacker guesses per second for the entropy report
    #[arg(long)]
    guesses_per_second: Option<f64>,

    /// Entropy report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Write Prometheus metrics to this file on exit
    #[arg(long, value_name = "PATH")]
    metrics_out: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    WordList(#[from] WordListError),
    #[error(transparent)]
    Estimate(#[from] EstimateError),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Strength(#[from] StrengthError),
    #[error(transparent)]
    Metrics(#[from] MetricsError),
    #[error("failed to render report: {0}")]
    Render(#[from] toml::ser::Error),
    #[error("failed to write metrics: {0}")]
    MetricsWrite(#[source] io::Error),
}

fn main() {
    // Logs go to stderr; stdout carries the passphrase.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("\nAborted, no passphrase generated.");
        std::process::exit(130);
    }) {
        warn!("Failed to install Ctrl+C handler: {}", e);
    }

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    if let Some(words) = cli.words {
        config.generation.words = words;
    }
    if let Some(rate) = cli.guesses_per_second {
        config.generation.guesses_per_second = rate;
    }
    if cli.strict {
        config.wordlists.strict = true;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = load_config(&cli)?;
    let metrics = MetricsRegistry::new()?;
    let variant = if cli.beale {
        WordListVariant::Alternate
    } else {
        WordListVariant::Default
    };

    println!("{}", report::render_banner(variant));

    if cli.entropy {
        let estimate = EntropyEstimator::default()
            .estimate(config.generation.words, config.generation.guesses_per_second)?;
        metrics.record_estimate(estimate.entropy_bits);
        match cli.format {
            ReportFormat::Text => println!("{}", report::render_entropy(&estimate)),
            ReportFormat::Toml => println!("{}", toml::to_string(&estimate)?),
        }
    }

    // Load the list before asking for rolls so a bad list fails fast.
    let path = match &cli.wordlist {
        Some(path) => path.clone(),
        None => config.wordlists.path(variant)?.to_path_buf(),
    };
    let asset = WordListAsset::from_path(variant, &path)?;
    if let Some(expected) = config.wordlists.digest(variant) {
        asset.verify_digest(expected)?;
    }
    let index = asset.build_index(config.wordlists.build_options())?;
    metrics.record_wordlist_built();

    let stdin = io::stdin();
    let mut prompt = RollPrompt::new(stdin.lock(), io::stdout());
    let rolls = prompt.collect(config.generation.words as usize)?;

    let passphrase = index.resolve(&rolls)?;
    metrics.record_passphrase(passphrase.len());
    println!("\nYour password is:\n{}", passphrase);

    if cli.strength {
        let result = ZxcvbnScorer::new().score(&passphrase.to_string(), &cli.exclusions)?;
        metrics.record_strength_check();
        println!("\n{}", report::render_strength(&result));
    }

    if let Some(path) = &cli.metrics_out {
        std::fs::write(path, metrics.encode()?).map_err(AppError::MetricsWrite)?;
        info!(path = %path.display(), "Wrote metrics");
    }

    Ok(())
}
