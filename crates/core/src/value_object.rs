//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. The equality-relevant
/// attributes are the struct fields, in declaration order; deriving `PartialEq`, `Eq`
/// and `Hash` gives exactly that contract:
///
/// - two instances are equal iff every field is pairwise equal,
/// - equal instances hash equal (the derived `Hash` feeds fields in order),
/// - values of different value-object types cannot be compared at all.
///
/// Optional value objects compare through `Option`: `None == None`, and `None` never
/// equals `Some(_)`.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (`Email("a@b.com")` equals any other `Email("a@b.com")`)
/// - **Entity**: Has identity (two customers with the same name are still different customers)
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct FullName {
///     first_name: String,
///     last_name: String,
/// }
///
/// impl ValueObject for FullName {}
/// ```
///
/// To "modify" a value object, build a new one and replace the old value on the
/// owning entity.
pub trait ValueObject: Clone + PartialEq + Eq + core::hash::Hash + core::fmt::Debug {}
