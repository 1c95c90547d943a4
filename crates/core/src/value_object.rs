//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new one. Handing out clones of them is always safe:
/// nobody can reach back into the owner's copy.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
