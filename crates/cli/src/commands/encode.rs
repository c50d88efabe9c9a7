//! Encode command - convert snarkjs JSON to the fixed binary encodings

use crate::config::Config;
use crate::loader::{load_proof, load_public_signals, load_vk};
use crate::CommonArgs;
use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use console::style;
use plonk_verifier_core::public_signals_to_bytes;
use std::fs;
use std::path::PathBuf;

#[derive(Args)]
#[command(group(ArgGroup::new("input").required(true).args(["vk", "proof", "public"])))]
pub struct EncodeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Verification key to encode
    #[arg(long)]
    vk: Option<PathBuf>,

    /// Proof to encode
    #[arg(long)]
    proof: Option<PathBuf>,

    /// Public signals to encode
    #[arg(long)]
    public: Option<PathBuf>,

    /// Output file for the binary encoding
    #[arg(long)]
    out: PathBuf,
}

pub fn run(config: &Config, args: EncodeArgs) -> Result<()> {
    let (kind, bytes) = if let Some(path) = &args.vk {
        ("verification key", load_vk(path)?.to_bytes())
    } else if let Some(path) = &args.proof {
        ("proof", load_proof(path)?.to_bytes())
    } else if let Some(path) = &args.public {
        ("public signals", public_signals_to_bytes(&load_public_signals(path)?))
    } else {
        anyhow::bail!("Nothing to encode. Use --vk, --proof or --public");
    };

    fs::write(&args.out, &bytes)
        .with_context(|| format!("Failed to write output file: {:?}", args.out))?;

    if config.json_output {
        println!(
            "{}",
            serde_json::json!({
                "kind": kind,
                "bytes": bytes.len(),
                "out": args.out.display().to_string(),
                "hex": hex::encode(&bytes),
            })
        );
    } else if !config.quiet {
        println!(
            "{} Wrote {} ({} bytes) to {}",
            style("✓").green().bold(),
            kind,
            bytes.len(),
            args.out.display()
        );
    }

    Ok(())
}
