//! Persistence for the pizza catalog.
//!
//! # Storage: `pizzas.json`
//!
//! The catalog is a single JSON array of pizzas. There is no index and no
//! cache: every read parses the whole file and every mutation rewrites it.
//!
//! ```json
//! [{"id":1,"name":"Margherita","description":"Classic","price":"8.00"}]
//! ```

pub mod pizzas;

pub use pizzas::PizzaStore;

use thiserror::Error;

/// Errors from catalog operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading or writing the catalog file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not a valid JSON array of pizzas.
    #[error("data corruption: {0}")]
    Json(#[from] serde_json::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// The next id does not fit the id type.
    #[error("id space exhausted")]
    IdOverflow,
}
