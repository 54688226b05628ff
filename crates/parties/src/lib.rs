//! Parties domain module: customers and their contact value objects.
//!
//! Pure domain logic (no IO, no HTTP, no storage).

pub mod customer;
pub mod email;
pub mod full_name;

pub use customer::Customer;
pub use email::Email;
pub use full_name::FullName;
