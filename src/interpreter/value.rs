/// Core runtime value type.
///
/// Defines the `Value` enum produced by evaluation, its textual form and the
/// truthiness rule used by conditions and logical operators.
pub mod core;
