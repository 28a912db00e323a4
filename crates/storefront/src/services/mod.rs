//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `cart` - The shared in-memory cart and its inactivity expiry

pub mod cart;

pub use cart::{CartError, CartStore, ExpiryTask};
