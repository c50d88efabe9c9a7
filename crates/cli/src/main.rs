//! plonk-verify CLI - check PLONK proofs against a verification key
//!
//! Loads snarkjs JSON artifacts or the fixed binary encodings, runs the
//! structural checks and challenge derivation, and reports the decision.

mod commands;
mod config;
mod loader;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use commands::{challenges, encode, verify};
use console::style;
use serde::Deserialize;
use std::path::PathBuf;

/// CLI for verifying BN254 PLONK proofs
#[derive(Parser)]
#[command(name = "plonk-verify")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Common options shared across commands
#[derive(Args, Clone, Default)]
pub struct CommonArgs {
    /// Output format (human, json)
    #[arg(long, env = "PLONK_VERIFIER_OUTPUT")]
    pub output: Option<OutputFormat>,

    /// Quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Largest accepted domain exponent (log2 of the domain size)
    #[arg(long, env = "PLONK_VERIFIER_MAX_POWER")]
    pub max_power: Option<u32>,

    /// Path to the config file
    #[arg(long, env = "PLONK_VERIFIER_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a proof against a verification key
    Verify(verify::VerifyArgs),

    /// Print the derived Fiat-Shamir challenges and Lagrange values
    Challenges(challenges::ChallengesArgs),

    /// Convert snarkjs JSON artifacts to the binary encodings
    Encode(encode::EncodeArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    // Run command; Ok(false) means the proof was rejected
    let result = match cli.command {
        Commands::Verify(args) => {
            let config = config::Config::load(&args.common)?;
            verify::run(&config, args)
        }
        Commands::Challenges(args) => {
            let config = config::Config::load(&args.common)?;
            challenges::run(&config, args).map(|()| true)
        }
        Commands::Encode(args) => {
            let config = config::Config::load(&args.common)?;
            encode::run(&config, args).map(|()| true)
        }
    };

    match result {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    }
}
