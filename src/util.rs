/// Numeric conversion helpers.
///
/// This module provides the conversions between integers and `f64` used when
/// integers and reals meet in one operation and when function results are
/// normalized back to integers.
pub mod num;
