//! URSSAF Analysis CLI
//!
//! Command-line interface for generating the dataset and its analyses.
//! Results are written to stdout as JSON; logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use urssaf_analysis::{
    analytics::{
        logger::{log_highlights, ResultsLogger},
        report::{build_bundle, company_report, comparative_analysis},
    },
    config::AnalysisConfig,
    data::companies,
    simulation::Orchestrator,
};

#[derive(Parser)]
#[command(name = "urssaf-sim")]
#[command(version = "0.1.0")]
#[command(about = "Synthetic URSSAF contribution analysis for large French employers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the dataset and run every analysis
    Run {
        /// RNG seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory for saved results
        #[arg(short, long)]
        output: Option<String>,

        /// Number of companies in rankings
        #[arg(long)]
        top: Option<usize>,

        /// Skip writing results to disk
        #[arg(long)]
        no_save: bool,
    },

    /// Detailed report for one company
    Company {
        /// Company name as listed by `info`
        name: String,

        /// RNG seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Compare several companies
    Compare {
        /// Company names as listed by `info`
        #[arg(required = true, num_args = 2..)]
        names: Vec<String>,

        /// RNG seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Rebuild the analyses from a saved dataset
    Report {
        /// Dataset JSON file written by `run`
        #[arg(short, long)]
        input: PathBuf,
    },

    /// List the companies covered
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    match cli.command {
        Commands::Run {
            seed,
            config,
            output,
            top,
            no_save,
        } => {
            let mut cfg = match config {
                Some(path) => AnalysisConfig::from_file(&path)?,
                None => AnalysisConfig::default(),
            };
            if seed.is_some() {
                cfg.seed = seed;
            }
            if let Some(output) = output {
                cfg.output_dir = output;
            }
            if let Some(top) = top {
                cfg.top_n = top;
            }
            run_analysis(cfg, !no_save)?;
        }

        Commands::Company { name, seed } => {
            let config = AnalysisConfig {
                seed,
                ..Default::default()
            };
            let dataset = Orchestrator::new(config).run()?;
            emit(&company_report(&dataset, &name)?)?;
        }

        Commands::Compare { names, seed } => {
            let config = AnalysisConfig {
                seed,
                ..Default::default()
            };
            let dataset = Orchestrator::new(config).run()?;
            emit(&comparative_analysis(&dataset, &names)?)?;
        }

        Commands::Report { input } => {
            report_from_file(&input)?;
        }

        Commands::Info => {
            emit(&companies::all())?;
        }
    }

    Ok(())
}

fn run_analysis(config: AnalysisConfig, save: bool) -> Result<()> {
    info!("Configuration:");
    info!("  Years:       {}-{}", config.start_year, config.end_year);
    info!("  Seed:        {}", config.seed.map_or("random".to_string(), |s| s.to_string()));
    info!("  Top N:       {}", config.top_n);
    info!("  Output:      {}", config.output_dir);

    let mut orchestrator = Orchestrator::new(config.clone());
    let dataset = orchestrator.run()?;
    let bundle = build_bundle(&dataset, &config)?;

    log_highlights(&bundle);

    if save {
        let logger = ResultsLogger::new(&config.output_dir);
        let dataset_path = logger.save_dataset(&dataset)?;
        logger.save_bundle(&bundle)?;
        info!("Rebuild later with: urssaf-sim report -i {}", dataset_path.display());
    }

    emit(&bundle)
}

fn report_from_file(input: &Path) -> Result<()> {
    info!("Loading dataset from: {}", input.display());

    let dataset = ResultsLogger::load_dataset(input)?;
    let bundle = build_bundle(&dataset, &AnalysisConfig::default())?;

    log_highlights(&bundle);
    emit(&bundle)
}

fn emit<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
