//! Core types for the pizzeria.
//!
//! This module provides type-safe wrappers for the catalog and cart.

pub mod cart;
pub mod id;
pub mod parse;
pub mod pizza;

pub use cart::CartItem;
pub use id::*;
pub use parse::{parse_pizza_id, parse_price};
pub use pizza::{NewPizza, Pizza, PizzaError, PizzaInput};
