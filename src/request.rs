//! Caller-supplied grid parameters and their validation.
//!
//! [`GridRequest`] is the raw, loosely typed form (it is also what a JSON
//! request file deserializes into). [`GridRequest::validate`] checks it in a
//! fixed order and yields a [`ValidGrid`] that the engine can consume.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{NimplexError, Result};

/// Inclusive fractional bounds for one component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limit {
    pub min: f64,
    pub max: f64,
}

impl Limit {
    pub const FULL: Limit = Limit { min: 0.0, max: 1.0 };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `true` when `value` lies in `[min, max]` up to `tol`.
    #[inline]
    pub fn contains(&self, value: f64, tol: f64) -> bool {
        value >= self.min - tol && value <= self.max + tol
    }
}

/// Unvalidated grid parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridRequest {
    /// Element symbols. Anything other than a JSON string is rejected.
    pub elements: Vec<Value>,
    pub dimension: i64,
    pub num_division: i64,
    /// One `[min, max]` pair per component.
    pub limit: Vec<Vec<f64>>,
}

/// Grid parameters that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidGrid {
    pub elements: Vec<String>,
    pub dimension: usize,
    pub num_division: usize,
    pub limit: Vec<Limit>,
}

impl GridRequest {
    pub fn new<E>(
        elements: impl IntoIterator<Item = E>,
        dimension: i64,
        num_division: i64,
        limit: Vec<Vec<f64>>,
    ) -> Self
    where
        E: Into<Value>,
    {
        Self {
            elements: elements.into_iter().map(Into::into).collect(),
            dimension,
            num_division,
            limit,
        }
    }

    /// Request over the whole simplex: one component per element,
    /// `[0, 1]` bounds on every axis.
    pub fn full<S: Into<String>>(elements: impl IntoIterator<Item = S>, num_division: i64) -> Self {
        let elements: Vec<Value> = elements
            .into_iter()
            .map(|s| Value::String(s.into()))
            .collect();
        let dim = elements.len();
        Self {
            elements,
            dimension: dim as i64,
            num_division,
            limit: vec![vec![0.0, 1.0]; dim],
        }
    }

    /// Split a flat `[min1, max1, min2, max2, …]` list into per-component
    /// pairs. `None` yields the full `[0, 1]` range on every axis.
    pub fn limits_from_flat(flat: Option<&[f64]>, dimension: usize) -> Result<Vec<Vec<f64>>> {
        match flat {
            None => Ok(vec![vec![0.0, 1.0]; dimension]),
            Some(values) if values.len() != 2 * dimension => Err(NimplexError::validation(
                format!(
                    "Limit must have 2 values per component (min and max), \
                     expected {} values, got {}.",
                    2 * dimension,
                    values.len()
                ),
            )),
            Some(values) => Ok(values.chunks(2).map(<[f64]>::to_vec).collect()),
        }
    }

    /// Check the request. Rules run in order and the first violation wins:
    /// element count, limit shape, element types, division count, limit
    /// ordering.
    pub fn validate(&self) -> Result<ValidGrid> {
        if self.elements.len() as i64 != self.dimension {
            return Err(NimplexError::validation(format!(
                "Number of elements ({}) must match the dimension ({}).",
                self.elements.len(),
                self.dimension
            )));
        }

        if self.limit.len() as i64 != self.dimension || self.limit.iter().any(|l| l.len() != 2) {
            return Err(NimplexError::validation(format!(
                "Limit must have 2 values (min and max) for each component, got {} limits.",
                self.limit.len()
            )));
        }

        let elements = self
            .elements
            .iter()
            .map(|el| el.as_str().map(str::to_owned))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                NimplexError::validation(
                    "All elements must be strings representing element symbols.",
                )
            })?;

        if self.num_division <= 0 {
            return Err(NimplexError::validation(
                "Number of divisions must be a positive integer.",
            ));
        }

        // NaN bounds are never ordered.
        if self
            .limit
            .iter()
            .any(|l| l[0] > l[1] || l[0].is_nan() || l[1].is_nan())
        {
            return Err(NimplexError::validation(
                "Each limit's minimum must be less than or equal to its maximum.",
            ));
        }

        Ok(ValidGrid {
            elements,
            dimension: self.dimension as usize,
            num_division: self.num_division as usize,
            limit: self.limit.iter().map(|l| Limit::new(l[0], l[1])).collect(),
        })
    }
}

impl ValidGrid {
    /// Element symbols concatenated, e.g. `CoCrFe`.
    pub fn system_name(&self) -> String {
        self.elements.concat()
    }
}
