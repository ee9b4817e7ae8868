#![deny(missing_docs)]
#![doc = "Comparison engine for the attest toolkit: tolerance profiles and scalar/slice equality judgements."]

/// Scalar and slice comparison operations.
pub mod compare;
/// Structured error types for the comparison engine.
pub mod errors;
/// Default tolerance configuration for floating-point equality.
pub mod tolerance;

pub use compare::{
    almost_eq_ints_by_difference, almost_eq_slices, eq_scalar, eq_slices, Comparable,
};
pub use errors::CompareError;
pub use tolerance::ToleranceProfile;
