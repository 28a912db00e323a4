//! Pizzeria Core - Shared domain types.
//!
//! This crate provides the types shared by the storefront server and its
//! integration tests:
//! - [`Pizza`] - a catalog entry as persisted in the pizza file
//! - [`PizzaInput`] / [`NewPizza`] - create-request payload and its validated form
//! - [`CartItem`] - a line of the in-memory shopping cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP.
//! Everything that touches the filesystem or the network lives in the
//! storefront crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
