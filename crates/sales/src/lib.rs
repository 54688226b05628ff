//! Sales domain module: orders and their items.
//!
//! `Order` is the aggregate root; `OrderItem` only changes through it.
//! Pure domain logic (no IO, no HTTP, no storage).

pub mod item;
pub mod order;

pub use item::OrderItem;
pub use order::Order;
