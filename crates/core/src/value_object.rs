//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. The
/// outputs of the estimator (`CostBreakdown`) and of the text parser
/// (`ParsedMatch`) are value objects: computing them twice from the same inputs
/// yields equal values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
