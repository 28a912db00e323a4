//! Pizza catalog types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::PizzaId;

/// A pizza as stored in the catalog file and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: PizzaId,
    pub name: String,
    pub description: String,
    /// Free-form price string (e.g. `"8.00"`); not validated as numeric.
    pub price: String,
}

impl Pizza {
    /// Attach an id to a validated pizza.
    #[must_use]
    pub fn from_new(id: PizzaId, new: NewPizza) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
        }
    }
}

/// Validation errors for pizza input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PizzaError {
    /// A required field is missing or blank.
    #[error("invalid pizza data: `{0}` is required")]
    InvalidInput(&'static str),
}

/// The `pizza` object of a create request, before validation.
///
/// Every field is optional so a missing field surfaces as
/// [`PizzaError::InvalidInput`] rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PizzaInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
}

impl PizzaInput {
    /// Check that `name`, `description` and `price` are present and not blank.
    ///
    /// Values are kept as submitted; only the blank check trims.
    ///
    /// # Errors
    ///
    /// Returns `PizzaError::InvalidInput` naming the first offending field.
    pub fn validate(self) -> Result<NewPizza, PizzaError> {
        Ok(NewPizza {
            name: required(self.name, "name")?,
            description: required(self.description, "description")?,
            price: required(self.price, "price")?,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, PizzaError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PizzaError::InvalidInput(field)),
    }
}

/// A validated pizza awaiting an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPizza {
    pub name: String,
    pub description: String,
    pub price: String,
}
