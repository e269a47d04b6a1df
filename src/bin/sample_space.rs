// src/bin/sample_space.rs - Uniform random compositions over the simplex

use std::fs::File;
use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Parser;
use component_space::space::{samples_file_name, write_samples};
use component_space::NimplexEngine;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
struct Cli {
    /// Element symbols, one per component
    #[arg(required = true)]
    elements: Vec<String>,

    /// Number of random compositions to draw
    #[arg(long, default_value_t = 1000)]
    samples: usize,

    /// RNG seed (entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Output CSV (default: {Elements}_mc_{samples}_samples.csv)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Cli::parse();
    ensure!(args.samples > 0, "number of samples must be positive");

    let mut rng = match args.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };

    let points =
        NimplexEngine::new().simplex_sampling_mc(args.elements.len(), args.samples, &mut rng)?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(samples_file_name(&args.elements, args.samples)));

    write_samples(File::create(&output)?, &args.elements, &points)?;

    info!(path = %output.display(), samples = points.len(), "wrote samples");
    Ok(())
}
