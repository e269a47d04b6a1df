pub mod error;
pub mod simplex;
pub mod request;
pub mod engine;
pub mod table;
pub mod plot;
pub mod space;

pub use engine::{GridEngine, NimplexEngine};
pub use error::{EngineError, NimplexError, Result};
pub use request::{GridRequest, Limit, ValidGrid};
pub use space::{generate_nimplex_space, GenerateOptions};
pub use table::ResultTable;
