//! Request pipeline: validate, generate, then optionally persist and plot.

use std::io;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;

use tracing::{debug, info};

use crate::engine::GridEngine;
use crate::error::Result;
use crate::plot::{PlotData, PlotKind};
use crate::request::{GridRequest, ValidGrid};
use crate::table::ResultTable;

/// Output options for one generation call.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Skip the CSV file.
    pub no_csv: bool,
    /// Also write an HTML plot (3 or 4 components only).
    pub plot: bool,
    /// Directory receiving the output files.
    pub output_dir: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            no_csv: false,
            plot: false,
            output_dir: PathBuf::from("."),
        }
    }
}

impl GenerateOptions {
    /// Table only, nothing touches the filesystem.
    pub fn in_memory() -> Self {
        Self {
            no_csv: true,
            ..Self::default()
        }
    }
}

/// `CoCrFe_ndiv_5_nimplex_space.csv`
pub fn csv_file_name(grid: &ValidGrid) -> String {
    format!("{}_ndiv_{}_nimplex_space.csv", grid.system_name(), grid.num_division)
}

/// `CoCrFe_ndiv_5_plot.html`
pub fn plot_file_name(grid: &ValidGrid) -> String {
    format!("{}_ndiv_{}_plot.html", grid.system_name(), grid.num_division)
}

/// `CoCrFe_mc_1000_samples.csv`
pub fn samples_file_name(elements: &[String], samples: usize) -> String {
    format!("{}_mc_{}_samples.csv", elements.concat(), samples)
}

/// Write Monte Carlo samples as CSV: a `Sample ID` column, then one column
/// per element.
pub fn write_samples<W: io::Write>(
    writer: W,
    elements: &[String],
    points: &[Vec<f64>],
) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    let mut header = vec!["Sample ID".to_string()];
    header.extend(elements.iter().cloned());
    wtr.write_record(&header)?;
    for (i, p) in points.iter().enumerate() {
        let mut row = vec![i.to_string()];
        row.extend(p.iter().map(f64::to_string));
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Run the grid engine on a validated request and assemble the node table.
pub fn generate<E: GridEngine + ?Sized>(engine: &E, grid: &ValidGrid) -> Result<ResultTable> {
    let (points, neighbors) =
        engine.simplex_graph_limited(grid.dimension, grid.num_division, &grid.limit)?;
    debug!(nodes = points.len(), "grid generated");
    Ok(ResultTable::assemble(&grid.elements, points, neighbors)?)
}

/// Generate the composition space described by `request`.
///
/// Nothing is written unless every step succeeds: validation, the plot
/// dimension check, all engine calls and plot construction run before the
/// first file is created. Existing files with the same names are replaced.
pub fn generate_nimplex_space<E: GridEngine + ?Sized>(
    engine: &E,
    request: &GridRequest,
    options: &GenerateOptions,
) -> Result<ResultTable> {
    let grid = request.validate()?;
    if options.plot {
        PlotKind::for_dimension(grid.dimension)?;
    }

    let table = generate(engine, &grid)?;
    let plot = if options.plot {
        Some(PlotData::build(engine, &grid, &table)?)
    } else {
        None
    };

    if !options.no_csv {
        let path = output_path(&options.output_dir, &csv_file_name(&grid));
        table.to_csv_path(&path)?;
        info!(path = %path.display(), rows = table.len(), "wrote grid table");
    }

    if let Some(plot) = plot {
        let path = output_path(&options.output_dir, &plot_file_name(&grid));
        plot.write_html(&path)?;
        info!(path = %path.display(), "wrote plot");
    }

    Ok(table)
}

fn output_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}
