//! Equality judgements for scalars and equal-length slices.

use crate::errors::CompareError;
use crate::tolerance::ToleranceProfile;

/// Numeric kinds the comparison engine can judge.
///
/// Implemented once per supported scalar type; the slice operations are
/// generic over it, so each kind's semantics live in exactly one place.
pub trait Comparable: Copy {
    /// Tolerance carried by the explicit-tolerance comparisons.
    type Tolerance: Copy;

    /// Equality under the default notion for the kind: exact for integers,
    /// within the profile tolerance for floating point.
    fn matches(self, other: Self, profile: &ToleranceProfile) -> bool;

    /// Elementwise predicate for the explicit-tolerance family.
    ///
    /// For floating point this bounds `|a - b|`. For `i32` it bounds the gap
    /// between magnitudes, `|a| - |b|`; callers wanting a true difference
    /// bound use [`almost_eq_ints_by_difference`].
    fn within(self, other: Self, tolerance: Self::Tolerance) -> bool;
}

impl Comparable for i32 {
    type Tolerance = i32;

    fn matches(self, other: Self, _profile: &ToleranceProfile) -> bool {
        self == other
    }

    fn within(self, other: Self, tolerance: Self::Tolerance) -> bool {
        // Magnitude gap, not elementwise difference. Widening to i64 keeps
        // i32::MIN well-defined.
        i64::from(self.unsigned_abs()) - i64::from(other.unsigned_abs())
            <= i64::from(tolerance)
    }
}

impl Comparable for f32 {
    type Tolerance = f32;

    fn matches(self, other: Self, profile: &ToleranceProfile) -> bool {
        (self - other).abs() <= profile.single
    }

    fn within(self, other: Self, tolerance: Self::Tolerance) -> bool {
        (self - other).abs() <= tolerance
    }
}

impl Comparable for f64 {
    type Tolerance = f64;

    fn matches(self, other: Self, profile: &ToleranceProfile) -> bool {
        (self - other).abs() <= profile.double
    }

    fn within(self, other: Self, tolerance: Self::Tolerance) -> bool {
        (self - other).abs() <= tolerance
    }
}

fn check_lengths<T>(a: &[T], b: &[T]) -> Result<(), CompareError> {
    if a.len() != b.len() {
        return Err(CompareError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Judges two scalars under the default notion for their kind.
pub fn eq_scalar<T: Comparable>(a: T, b: T, profile: &ToleranceProfile) -> bool {
    a.matches(b, profile)
}

/// Judges two equal-length slices under the default notion for their kind.
///
/// True iff every paired element matches; evaluation stops at the first
/// mismatching pair. Slices of different lengths are a contract violation
/// reported as [`CompareError::LengthMismatch`].
pub fn eq_slices<T: Comparable>(
    a: &[T],
    b: &[T],
    profile: &ToleranceProfile,
) -> Result<bool, CompareError> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).all(|(x, y)| x.matches(*y, profile)))
}

/// Judges two equal-length slices under an explicit tolerance.
pub fn almost_eq_slices<T: Comparable>(
    a: &[T],
    b: &[T],
    tolerance: T::Tolerance,
) -> Result<bool, CompareError> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).all(|(x, y)| x.within(*y, tolerance)))
}

/// Integer slice comparison bounding the absolute elementwise difference.
///
/// Alternative to the magnitude-gap rule used by [`almost_eq_slices`] on
/// `i32` slices: here the bound is `|a[i] - b[i]| <= tolerance`.
pub fn almost_eq_ints_by_difference(
    a: &[i32],
    b: &[i32],
    tolerance: i32,
) -> Result<bool, CompareError> {
    check_lengths(a, b)?;
    Ok(a.iter()
        .zip(b)
        .all(|(x, y)| (i64::from(*x) - i64::from(*y)).abs() <= i64::from(tolerance)))
}
