//! Discount strategies and the service that selects between them.
//!
//! Pure domain logic (no IO, no HTTP, no storage).

pub mod discount;
pub mod service;

pub use discount::{Discount, DiscountType, LargeDiscount, MediumDiscount, SmallDiscount};
pub use service::DiscountService;
