//! `ordering-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, typed identifiers, the entity/aggregate/value-object traits,
//! and the numeric value objects shared by every other crate.

pub mod aggregate;
pub mod amount;
pub mod entity;
pub mod error;
pub mod id;
pub mod quantity;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use amount::Amount;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, OrderId, OrderItemId, ProductId};
pub use quantity::Quantity;
pub use value_object::ValueObject;
