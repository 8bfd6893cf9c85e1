//! Camp Distributor - Entry Point
//!
//! Reads a battleground export, runs the trial selector and prints which
//! camps to build.

use std::path::PathBuf;
use std::process::ExitCode;

use camp_distributor::core::config::DistributorConfig;
use camp_distributor::core::error::Result;
use camp_distributor::distribution::{plan, DistributionOutput};
use camp_distributor::loader::BattlegroundDocument;
use camp_distributor::map::VolcanoArchipelago;
use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Plan the fewest camps that keep every contested province at its target
#[derive(Parser, Debug)]
#[command(name = "camp-distributor")]
#[command(about = "Distribute battleground camps over owned provinces")]
struct Args {
    /// Battleground export (JSON)
    document: PathBuf,

    /// TOML config file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Participant whose provinces count as owned (defaults to the export's)
    #[arg(long)]
    participant: Option<u32>,

    /// Camps each contested province should be bordered by
    #[arg(long)]
    target: Option<i64>,

    /// Number of shuffled trials
    #[arg(long)]
    trials: Option<usize>,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Run trials in parallel
    #[arg(long)]
    parallel: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("camp_distributor=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            match args.format {
                Format::Text => println!("{}", output.render_text()),
                Format::Json => println!("{}", output.to_json()),
            }
            tracing::info!("{}", output.summary());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<DistributionOutput> {
    let mut config = match &args.config {
        Some(path) => DistributorConfig::load(path)?,
        None => DistributorConfig::default(),
    };
    if let Some(target) = args.target {
        config.camp_target = target;
    }
    if let Some(trials) = args.trials {
        config.trials = trials;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.parallel |= args.parallel;

    let document = BattlegroundDocument::from_file(&args.document)?;
    plan(&VolcanoArchipelago::new(), &document, args.participant, &config)
}
