//! `bns-prompt`: derive a music-generation prompt from a Bitcoin block.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bns_prompt::{
    decode_merkle_root, derive_generation_seed, BlockData, Era, PromptConfig, PromptGenerator,
    DEFAULT_MAX_WORDS,
};
use clap::{ArgGroup, Parser};

#[derive(Parser)]
#[command(name = "bns-prompt")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["merkle_root", "block"])))]
struct Cli {
    /// Merkle root as 64 hex characters
    #[arg(long, requires = "height")]
    merkle_root: Option<String>,

    /// Block height paired with --merkle-root
    #[arg(long)]
    height: Option<u64>,

    /// Provider block JSON ({height, hash, merkleRoot, timestamp})
    #[arg(long, conflicts_with_all = ["merkle_root", "height"])]
    block: Option<PathBuf>,

    /// Number of matched words in the prompt
    #[arg(long, default_value_t = DEFAULT_MAX_WORDS)]
    max_words: usize,

    /// Leave the era label out
    #[arg(long)]
    no_era: bool,

    /// Print prompt, seed and matches as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = PromptConfig { max_words: cli.max_words, include_era: !cli.no_era };
    let generator = PromptGenerator::new(config).context("invalid options")?;

    let (merkle_root, height) = if let Some(path) = &cli.block {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let block = BlockData::from_json(&json)
            .with_context(|| format!("failed to decode block from {}", path.display()))?;
        tracing::info!(height = block.height, hash = %block.hash, "loaded block");
        (block.merkle_root, block.height)
    } else {
        // clap enforces --merkle-root together with --height
        let root = cli.merkle_root.context("--merkle-root is required")?;
        let height = cli.height.context("--height is required")?;
        (root, height)
    };

    let root_bytes = decode_merkle_root(&merkle_root).context("invalid merkle root")?;
    let prompt = generator
        .generate_from_bytes(&root_bytes, height)
        .context("failed to generate prompt")?;

    if cli.json {
        let out = serde_json::json!({
            "prompt": prompt.text,
            "genre": prompt.genre,
            "mood": prompt.mood,
            "era": prompt.era.map(Era::label),
            "seed": derive_generation_seed(&root_bytes, height),
            "matches": prompt.matches,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", prompt.text);
    }
    Ok(())
}
