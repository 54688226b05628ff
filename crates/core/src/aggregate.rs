//! Aggregate root trait.

use crate::entity::Entity;

/// Aggregate root marker + minimal interface.
///
/// An aggregate root is the only entry point for changes inside its
/// consistency boundary. Every accepted change bumps `version()`.
pub trait AggregateRoot: Entity {
    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Starts at 0 for a freshly created aggregate and increases by one per
    /// applied mutation.
    fn version(&self) -> u64;
}
