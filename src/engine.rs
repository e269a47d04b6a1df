//! Grid engine: the primitives the rest of the crate builds on.
//!
//! [`GridEngine`] is the seam between the request pipeline and the lattice
//! computation. [`NimplexEngine`] is the in-process implementation; tests
//! swap in stubs.

use nalgebra::DMatrix;
use rand::Rng;
use rand_distr::{Distribution, Exp1};
use rayon::prelude::*;
use tracing::debug;

use crate::error::EngineError;
use crate::request::Limit;
use crate::simplex::{self, Compositions};

/// Fractional composition vectors, one per node.
pub type CompositionGrid = Vec<Vec<f64>>;

/// Adjacency lists parallel to a [`CompositionGrid`].
pub type NeighborList = Vec<Vec<usize>>;

/// Slack applied when comparing grid fractions against limits.
const LIMIT_TOL: f64 = 1e-9;

/// Grid generation and projection primitives.
pub trait GridEngine {
    /// Grid points inside `limit` together with their neighbor lists.
    fn simplex_graph_limited(
        &self,
        dimension: usize,
        num_division: usize,
        limit: &[Limit],
    ) -> Result<(CompositionGrid, NeighborList), EngineError>;

    /// Index of each pure-component vertex in the unlimited grid, in axis
    /// order.
    fn pure_component_indexes(
        &self,
        dimension: usize,
        num_division: usize,
    ) -> Result<Vec<usize>, EngineError>;

    /// Project 4-component compositions into 3D Cartesian space.
    fn simplex_to_cartesian(&self, grid: &[Vec<f64>]) -> Result<Vec<[f64; 3]>, EngineError>;
}

/// Lattice engine backed by [`crate::simplex`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NimplexEngine;

impl NimplexEngine {
    pub fn new() -> Self {
        Self
    }

    /// Full-simplex grid points with no component at zero.
    pub fn simplex_internal_grid(
        &self,
        dimension: usize,
        num_division: usize,
    ) -> Result<CompositionGrid, EngineError> {
        check_shape(dimension, num_division)?;
        let scale = num_division as f64;
        Ok(simplex::interior(dimension, num_division)
            .map(|x| fractions(&x, scale))
            .collect())
    }

    /// `samples` points drawn uniformly from the simplex.
    pub fn simplex_sampling_mc<R: Rng>(
        &self,
        dimension: usize,
        samples: usize,
        rng: &mut R,
    ) -> Result<CompositionGrid, EngineError> {
        if dimension == 0 {
            return Err(EngineError::Dimension(dimension));
        }
        // Normalized i.i.d. exponentials are uniform on the simplex.
        let mut out = Vec::with_capacity(samples);
        for _ in 0..samples {
            let draws: Vec<f64> = (0..dimension).map(|_| Exp1.sample(&mut *rng)).collect();
            let total: f64 = draws.iter().sum();
            out.push(draws.into_iter().map(|d| d / total).collect());
        }
        Ok(out)
    }
}

impl GridEngine for NimplexEngine {
    fn simplex_graph_limited(
        &self,
        dimension: usize,
        num_division: usize,
        limit: &[Limit],
    ) -> Result<(CompositionGrid, NeighborList), EngineError> {
        check_shape(dimension, num_division)?;
        if limit.len() != dimension {
            return Err(EngineError::LimitShape {
                expected: dimension,
                found: limit.len(),
            });
        }

        let scale = num_division as f64;
        let points: Vec<Vec<usize>> = Compositions::new(dimension, num_division).collect();

        // Full-grid rank -> index among the kept points.
        let mut kept_index: Vec<Option<usize>> = vec![None; points.len()];
        let mut kept: Vec<usize> = Vec::new();
        for (r, x) in points.iter().enumerate() {
            let inside = x
                .iter()
                .zip(limit)
                .all(|(&k, lim)| lim.contains(k as f64 / scale, LIMIT_TOL));
            if inside {
                kept_index[r] = Some(kept.len());
                kept.push(r);
            }
        }
        debug!(
            dimension,
            num_division,
            total = points.len(),
            kept = kept.len(),
            "simplex lattice enumerated"
        );

        let neighbors: NeighborList = kept
            .par_iter()
            .map(|&r| {
                let mut adj: Vec<usize> = simplex::unit_transfer_ranks(&points[r])
                    .into_iter()
                    .filter_map(|n| kept_index[n])
                    .collect();
                adj.sort_unstable();
                adj
            })
            .collect();

        let grid = kept.iter().map(|&r| fractions(&points[r], scale)).collect();
        Ok((grid, neighbors))
    }

    fn pure_component_indexes(
        &self,
        dimension: usize,
        num_division: usize,
    ) -> Result<Vec<usize>, EngineError> {
        check_shape(dimension, num_division)?;
        Ok((0..dimension)
            .map(|axis| simplex::pure_vertex_rank(dimension, num_division, axis))
            .collect())
    }

    fn simplex_to_cartesian(&self, grid: &[Vec<f64>]) -> Result<Vec<[f64; 3]>, EngineError> {
        if let Some((index, p)) = grid.iter().enumerate().find(|(_, p)| p.len() != 4) {
            return Err(EngineError::PointShape {
                index,
                found: p.len(),
                expected: 4,
            });
        }

        let points = DMatrix::from_fn(grid.len(), 4, |i, j| grid[i][j]);
        let xyz = points * tetrahedron();
        Ok((0..xyz.nrows())
            .map(|i| [xyz[(i, 0)], xyz[(i, 1)], xyz[(i, 2)]])
            .collect())
    }
}

/// Corners of a unit-edge regular tetrahedron, one row per component.
fn tetrahedron() -> DMatrix<f64> {
    let s3 = 3f64.sqrt();
    let s6 = 6f64.sqrt();
    DMatrix::from_row_slice(
        4,
        3,
        &[
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.5, s3 / 2.0, 0.0, //
            0.5, s3 / 6.0, s6 / 3.0,
        ],
    )
}

fn check_shape(dimension: usize, num_division: usize) -> Result<(), EngineError> {
    if dimension == 0 {
        return Err(EngineError::Dimension(dimension));
    }
    if num_division == 0 {
        return Err(EngineError::Division);
    }
    Ok(())
}

#[inline]
fn fractions(x: &[usize], scale: f64) -> Vec<f64> {
    x.iter().map(|&k| k as f64 / scale).collect()
}
