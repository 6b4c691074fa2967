//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, rendering, or heavy logic. Just data and simple helpers.

pub mod catalog;
pub mod config;
pub mod order;

pub use crate::catalog::{CatalogEntry, CoffeeCatalog};
pub use crate::order::{CoffeeOrder, CoffeeType, FormField, OrderDraft};
