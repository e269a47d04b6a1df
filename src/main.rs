//! Composition-space generator for multi-element alloy systems.
//!
//! Builds the simplex grid for the given elements, attaches neighbor
//! lists and writes `{Elements}_ndiv_{N}_nimplex_space.csv`. With `--plot`
//! it also writes `{Elements}_ndiv_{N}_plot.html` for 3- and 4-component
//! systems.
//
//  Run:  `cargo run -- Co Cr Fe Ni --ndiv 10 --plot`

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use component_space::{generate_nimplex_space, GenerateOptions, GridRequest, NimplexEngine};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(about = "Generate nimplex component space and neighbor list.")]
struct Cli {
    /// List of element symbols
    #[arg(required_unless_present = "request", conflicts_with = "request")]
    elements: Vec<String>,

    /// Number of divisions for the simplex
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    ndiv: i64,

    /// Limits for each component as min max pairs in the order
    /// [min1 max1 min2 max2 ...], e.g. --limit 0 1 0 1 0 1 0 1 for 4 components
    #[arg(long, num_args = 1.., allow_negative_numbers = true)]
    limit: Option<Vec<f64>>,

    /// Do not write the output to a CSV file
    #[arg(long = "no_csv")]
    no_csv: bool,

    /// Plot the component space (3- and 4-component systems only)
    #[arg(long)]
    plot: bool,

    /// Directory for the CSV and HTML outputs
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Read elements, dimension, num_division and limit from a JSON file
    #[arg(long, conflicts_with_all = ["ndiv", "limit"])]
    request: Option<PathBuf>,
}

fn load_request(path: &Path) -> Result<GridRequest> {
    let file = File::open(path)
        .with_context(|| format!("cannot open request file {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot parse request file {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let request = match &cli.request {
        Some(path) => load_request(path)?,
        None => {
            let dim = cli.elements.len();
            let limit = GridRequest::limits_from_flat(cli.limit.as_deref(), dim)?;
            GridRequest::new(cli.elements.iter().map(String::as_str), dim as i64, cli.ndiv, limit)
        }
    };

    let options = GenerateOptions {
        no_csv: cli.no_csv,
        plot: cli.plot,
        output_dir: cli.output_dir,
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template(
        " {spinner:.cyan} {msg} [{elapsed_precise}]",
    )?);
    spinner.set_message("generating grid");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = generate_nimplex_space(&NimplexEngine::new(), &request, &options);
    spinner.finish_and_clear();
    let table = result?;

    info!(
        nodes = table.len(),
        neighbor_columns = table.neighbor_width(),
        "component space ready"
    );
    Ok(())
}
