//! Command-line driver for lottery rounds.

mod config;
mod registrants;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use config::CliConfig;
use launch_lottery::SaleRound;
use launch_rng::{BoundedDrawSampler, Xoroshiro128StarStar};
use launch_utils::LogFormat;
use registrants::RunReport;

#[derive(Parser)]
#[command(name = "launch-lottery", about = "Launchpad lottery winner selection")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "LAUNCH_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "LAUNCH_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "LAUNCH_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Register every entry of a registrant file, select winners in batches
    /// and print the allocation report as JSON.
    Run {
        /// JSON array of `{ "identifier": "0x…", "score": n }` records.
        #[arg(long)]
        registrants: PathBuf,

        /// Seed for the random stream.
        #[arg(long, env = "LAUNCH_SEED")]
        seed: Option<u64>,

        /// Number of winning tickets.
        #[arg(long, env = "LAUNCH_WINNERS")]
        winners: Option<u32>,

        /// Allocation credited per winning ticket.
        #[arg(long, env = "LAUNCH_ALLOCATION_UNIT")]
        allocation_unit: Option<u64>,

        /// Registrants scanned per batch.
        #[arg(long, env = "LAUNCH_BATCH_SIZE")]
        batch_size: Option<usize>,

        /// Write a bincode snapshot of the finished round here.
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
    /// Print bounded draws from a seeded stream.
    Draw {
        /// Seed for the random stream (defaults to the configured round seed).
        #[arg(long)]
        seed: Option<u64>,

        /// Exclusive upper bound of every draw.
        #[arg(long)]
        cap: u64,

        /// Number of draws.
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Print the effective configuration as TOML.
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => CliConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CliConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    launch_utils::init_logging(config.log_format, &config.log_level);
    if let Some(ref path) = cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    match cli.command {
        Command::Run {
            registrants,
            seed,
            winners,
            allocation_unit,
            batch_size,
            snapshot,
        } => {
            if let Some(seed) = seed {
                config.round.seed = seed;
            }
            if let Some(winners) = winners {
                config.round.target_total_winners = winners;
            }
            if let Some(unit) = allocation_unit {
                config.round.base_allocation_unit = unit;
            }
            if let Some(size) = batch_size {
                config.batch_size = size;
            }

            let (ids, scores) = registrants::load_registrants(&registrants)
                .with_context(|| format!("reading registrants {}", registrants.display()))?;

            let mut round = SaleRound::new(config.round.clone())?;
            round.register_users(&ids, &scores)?;
            tracing::info!(
                registrants = round.registrant_count(),
                batch_size = config.batch_size,
                "starting winner selection"
            );
            let batches = round.select_all(config.batch_size)?;

            if let Some(path) = snapshot {
                std::fs::write(&path, round.snapshot()?)
                    .with_context(|| format!("writing snapshot {}", path.display()))?;
                tracing::info!("Snapshot written to {}", path.display());
            }

            let report = RunReport::from_round(&round, batches);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Draw { seed, cap, count } => {
            let seed = seed.unwrap_or(config.round.seed);
            let mut sampler = BoundedDrawSampler::new(Xoroshiro128StarStar::new(seed));
            for _ in 0..count {
                println!("{}", sampler.draw_below(cap)?);
            }
        }
        Command::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}
