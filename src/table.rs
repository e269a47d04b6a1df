//! Tabular view of a generated grid and its CSV serialization.
//!
//! Column layout is fixed: `Node ID`, then `Neighbor_0 .. Neighbor_{k-1}`,
//! then one column per element symbol. `k` is the largest degree in the
//! grid; shorter neighbor rows are padded with empty cells.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::engine::{CompositionGrid, NeighborList};
use crate::error::{EngineError, Result};

pub const NODE_ID: &str = "Node ID";

/// Name of the `k`-th neighbor column.
pub fn neighbor_column(k: usize) -> String {
    format!("Neighbor_{k}")
}

/// Grid nodes with their adjacency and composition.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    elements: Vec<String>,
    compositions: CompositionGrid,
    neighbors: NeighborList,
    neighbor_width: usize,
}

impl ResultTable {
    /// Join engine output into a table. `grid` and `neighbors` must be
    /// parallel and every point must have one value per element.
    pub fn assemble(
        elements: &[String],
        grid: CompositionGrid,
        neighbors: NeighborList,
    ) -> std::result::Result<Self, EngineError> {
        if grid.len() != neighbors.len() {
            return Err(EngineError::Mismatch {
                points: grid.len(),
                neighbor_lists: neighbors.len(),
            });
        }
        if let Some((index, p)) = grid
            .iter()
            .enumerate()
            .find(|(_, p)| p.len() != elements.len())
        {
            return Err(EngineError::PointShape {
                index,
                found: p.len(),
                expected: elements.len(),
            });
        }

        let neighbor_width = neighbors.iter().map(Vec::len).max().unwrap_or(0);
        Ok(Self {
            elements: elements.to_vec(),
            compositions: grid,
            neighbors,
            neighbor_width,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.compositions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.compositions.is_empty()
    }

    /// Number of `Neighbor_*` columns.
    #[inline]
    pub fn neighbor_width(&self) -> usize {
        self.neighbor_width
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn compositions(&self) -> &[Vec<f64>] {
        &self.compositions
    }

    pub fn neighbors(&self) -> &[Vec<usize>] {
        &self.neighbors
    }

    /// Column headers in output order.
    pub fn columns(&self) -> Vec<String> {
        let mut cols = Vec::with_capacity(1 + self.neighbor_width + self.elements.len());
        cols.push(NODE_ID.to_string());
        cols.extend((0..self.neighbor_width).map(neighbor_column));
        cols.extend(self.elements.iter().cloned());
        cols
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns().iter().any(|c| c == name)
    }

    /// The `Node ID` column.
    pub fn node_ids(&self) -> Vec<usize> {
        (0..self.len()).collect()
    }

    /// Fractions of one element across all nodes.
    pub fn element_column(&self, symbol: &str) -> Option<Vec<f64>> {
        let j = self.elements.iter().position(|e| e == symbol)?;
        Some(self.compositions.iter().map(|p| p[j]).collect())
    }

    /// Row `row` as CSV cells.
    pub fn record(&self, row: usize) -> Vec<String> {
        let mut cells = Vec::with_capacity(1 + self.neighbor_width + self.elements.len());
        cells.push(row.to_string());
        let adj = &self.neighbors[row];
        cells.extend(
            (0..self.neighbor_width).map(|k| adj.get(k).map(ToString::to_string).unwrap_or_default()),
        );
        cells.extend(self.compositions[row].iter().map(|&v| format_fraction(v)));
        cells
    }

    /// Serialize the table as CSV with a header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = WriterBuilder::new().from_writer(writer);
        wtr.write_record(self.columns())?;
        for row in 0..self.len() {
            wtr.write_record(self.record(row))?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Write the CSV to `path`, replacing any existing file.
    pub fn to_csv_path(&self, path: &Path) -> Result<()> {
        self.write_csv(File::create(path)?)
    }
}

/// Fractions always carry a decimal point (`1.0`, `0.2`).
fn format_fraction(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}
