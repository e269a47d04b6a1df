use thiserror::Error;

/// Failure raised by a [`GridEngine`](crate::engine::GridEngine) primitive.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine cannot build a simplex with this many components.
    #[error("dimension must be at least 1, got {0}")]
    Dimension(usize),

    #[error("number of divisions must be at least 1")]
    Division,

    /// A point handed to a primitive has the wrong number of components.
    #[error("point {index} has {found} components, expected {expected}")]
    PointShape {
        index: usize,
        found: usize,
        expected: usize,
    },

    /// Grid and neighbor list of different lengths.
    #[error("engine returned {points} points but {neighbor_lists} neighbor lists")]
    Mismatch { points: usize, neighbor_lists: usize },

    /// A limit list that does not line up with the requested dimension.
    #[error("expected {expected} limit pairs, got {found}")]
    LimitShape { expected: usize, found: usize },
}

/// Errors surfaced by grid generation, persistence and plotting.
#[derive(Debug, Error)]
pub enum NimplexError {
    /// Caller input rejected before any engine call.
    #[error("{0}")]
    Validation(String),

    /// Passed through from the grid engine unchanged.
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NimplexError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        NimplexError::Validation(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, NimplexError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, NimplexError>;
