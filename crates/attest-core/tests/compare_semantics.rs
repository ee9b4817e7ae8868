use attest_core::{
    almost_eq_ints_by_difference, almost_eq_slices, eq_scalar, eq_slices, CompareError,
    ToleranceProfile,
};

#[test]
fn integers_compare_exactly() {
    let profile = ToleranceProfile::default();
    assert!(eq_scalar(7, 7, &profile));
    assert!(!eq_scalar(7, 8, &profile));
    assert!(eq_scalar(i32::MIN, i32::MIN, &profile));
}

#[test]
fn doubles_use_the_double_precision_default() {
    let profile = ToleranceProfile::default();
    assert!(eq_scalar(1e-8f64, 1e-8, &profile));
    assert!(!eq_scalar(1e-8f64, 2e-6, &profile));
}

#[test]
fn profile_boundary_is_inclusive() {
    let mut profile = ToleranceProfile::default();
    profile.set_double(0.25);
    assert!(eq_scalar(1.0f64, 1.25, &profile));

    // One representable step past the tolerance must miss.
    let just_over = f64::from_bits(1.25f64.to_bits() + 1);
    assert!(!eq_scalar(1.0f64, just_over, &profile));
}

#[test]
fn explicit_tolerance_boundary_is_inclusive() {
    // 0.2f32 is exactly twice 0.1f32, so the difference is exactly 0.1f32.
    let a = [0.0f32, 0.1, 0.2];
    let c = [0.0f32, 0.2, 0.2];
    assert!(almost_eq_slices(&a, &c, 0.1f32).unwrap());

    let just_under = f32::from_bits(0.1f32.to_bits() - 1);
    assert!(!almost_eq_slices(&a, &c, just_under).unwrap());
}

#[test]
fn float_slices_match_within_the_profile_default() {
    let profile = ToleranceProfile::default();
    let a = [0.0f32, 0.1, 0.2];
    let b = [0.0f32, 0.1, 0.2];
    let c = [0.0f32, 0.2, 0.2];
    assert!(eq_slices(&a, &b, &profile).unwrap());
    assert!(!eq_slices(&a, &c, &profile).unwrap());
}

#[test]
fn integer_almost_rule_bounds_the_magnitude_gap() {
    let a = [1, 2, 3, 4, 5];
    let c = [1, 2, 3, 4, 4];
    assert!(!almost_eq_slices(&a, &c, 0).unwrap());
    assert!(almost_eq_slices(&a, &c, 1).unwrap());
    assert!(almost_eq_slices(&a, &c, 2).unwrap());

    // The gap is signed: shrinking magnitudes always stay under the bound.
    assert!(almost_eq_slices(&c, &a, 0).unwrap());
}

#[test]
fn difference_predicate_diverges_from_the_magnitude_rule() {
    // Equal magnitudes, opposite signs: the gap rule matches at tolerance 0,
    // the difference rule requires the full spread.
    let a = [5];
    let b = [-5];
    assert!(almost_eq_slices(&a, &b, 0).unwrap());
    assert!(!almost_eq_ints_by_difference(&a, &b, 0).unwrap());
    assert!(!almost_eq_ints_by_difference(&a, &b, 9).unwrap());
    assert!(almost_eq_ints_by_difference(&a, &b, 10).unwrap());
}

#[test]
fn difference_predicate_handles_extreme_spread() {
    assert!(!almost_eq_ints_by_difference(&[i32::MAX], &[i32::MIN], 0).unwrap());
    assert!(almost_eq_ints_by_difference(&[i32::MIN], &[i32::MIN], 0).unwrap());
}

#[test]
fn mismatched_lengths_are_reported_not_read() {
    let profile = ToleranceProfile::default();
    let err = eq_slices(&[1, 2, 3], &[1, 2], &profile).unwrap_err();
    assert_eq!(err, CompareError::LengthMismatch { left: 3, right: 2 });

    let err = almost_eq_slices(&[0.5f64], &[], 1.0).unwrap_err();
    assert_eq!(err, CompareError::LengthMismatch { left: 1, right: 0 });
}

#[test]
fn empty_slices_match() {
    let profile = ToleranceProfile::default();
    let empty: [f64; 0] = [];
    assert!(eq_slices(&empty, &empty, &profile).unwrap());
    assert!(almost_eq_slices(&empty, &empty, 0.0).unwrap());
}
