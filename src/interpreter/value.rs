/// Runtime value representation.
///
/// Defines the `Value` enum produced by evaluation: integers, reals and the
/// booleans that comparison chains yield. Includes display formatting,
/// boolean-to-number coercion and mixed integer/real ordering.
pub mod core;
