//! Products domain module (catalog entries with a description and a price).
//!
//! Pure domain logic (no IO, no HTTP, no storage).

pub mod product;

pub use product::Product;
