//! Cart line type.

use serde::{Deserialize, Serialize};

use super::id::PizzaId;
use super::pizza::Pizza;
use super::parse::parse_price;

/// One line of the shopping cart.
///
/// There is at most one line per pizza id; adding the same pizza again
/// bumps `quantity` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: PizzaId,
    pub quantity: u32,
    pub name: String,
    /// Numeric price, or `null` when the catalog price has no numeric prefix.
    pub price: Option<f64>,
}

impl CartItem {
    /// A fresh line with quantity 1 for the given pizza.
    #[must_use]
    pub fn for_pizza(pizza: &Pizza) -> Self {
        Self {
            id: pizza.id,
            quantity: 1,
            name: pizza.name.clone(),
            price: parse_price(&pizza.price),
        }
    }
}
