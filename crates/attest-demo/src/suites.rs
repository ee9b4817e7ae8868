//! Demonstration suites exercising every assertion family with a known
//! mix of passing and failing calls.

use attest_harness::Expectation::{Equal, NotEqual};
use attest_harness::{HarnessError, SuiteRun};

/// Suite body signature shared by the demonstration plan.
pub type SuiteFn = fn(&mut SuiteRun<'_>) -> Result<(), HarnessError>;

/// Named suites in execution order.
pub const PLAN: &[(&str, SuiteFn)] = &[
    ("scalar_ints", scalar_ints),
    ("int_arrays", int_arrays),
    ("int_almost", int_almost),
    ("scalar_singles", scalar_singles),
    ("single_arrays", single_arrays),
    ("single_almost", single_almost),
    ("scalar_doubles", scalar_doubles),
    ("double_arrays", double_arrays),
    ("double_almost", double_almost),
];

fn scalar_ints(suite: &mut SuiteRun<'_>) -> Result<(), HarnessError> {
    suite.assert_equal(Equal, 1, 1)?; // pass
    suite.assert_equal(Equal, 1, 2)?; // fail
    suite.assert_equal(NotEqual, 1, 1)?; // fail
    suite.assert_equal(NotEqual, 1, 0)?; // pass
    Ok(())
}

fn int_arrays(suite: &mut SuiteRun<'_>) -> Result<(), HarnessError> {
    let a = [1, 2, 3, 4, 5];
    let b = [1, 2, 3, 4, 5];
    let c = [1, 2, 3, 4, 4];

    suite.assert_array_equal(Equal, &a, &b)?; // pass
    suite.assert_array_equal(Equal, &a, &c)?; // fail
    suite.assert_array_equal(NotEqual, &a, &b)?; // fail
    suite.assert_array_equal(NotEqual, &a, &c)?; // pass
    Ok(())
}

fn int_almost(suite: &mut SuiteRun<'_>) -> Result<(), HarnessError> {
    let a = [1, 2, 3, 4, 5];
    let b = [1, 2, 3, 4, 5];
    let c = [1, 2, 3, 4, 4];

    suite.assert_array_almost_equal(Equal, &a, &b, 1)?; // pass
    suite.assert_array_almost_equal(Equal, &a, &c, 0)?; // fail
    suite.assert_array_almost_equal(NotEqual, &a, &b, 1)?; // fail
    suite.assert_array_almost_equal(NotEqual, &a, &c, 0)?; // pass
    suite.assert_array_almost_equal(Equal, &a, &c, 2)?; // pass
    suite.assert_array_almost_equal(NotEqual, &a, &c, 2)?; // fail
    Ok(())
}

fn scalar_singles(suite: &mut SuiteRun<'_>) -> Result<(), HarnessError> {
    suite.assert_equal(Equal, 0.0f32, 0.0)?; // pass
    suite.assert_equal(Equal, 0.0f32, 0.1)?; // fail
    suite.assert_equal(NotEqual, 0.0f32, 0.0)?; // fail
    suite.assert_equal(NotEqual, 0.0f32, 0.1)?; // pass
    Ok(())
}

fn single_arrays(suite: &mut SuiteRun<'_>) -> Result<(), HarnessError> {
    let a = [0.0f32, 0.1, 0.2];
    let b = [0.0f32, 0.1, 0.2];
    let c = [0.0f32, 0.2, 0.2];

    suite.assert_array_equal(Equal, &a, &b)?; // pass
    suite.assert_array_equal(Equal, &a, &c)?; // fail
    suite.assert_array_equal(NotEqual, &a, &b)?; // fail
    suite.assert_array_equal(NotEqual, &a, &c)?; // pass
    Ok(())
}

fn single_almost(suite: &mut SuiteRun<'_>) -> Result<(), HarnessError> {
    let a = [0.0f32, 0.1, 0.2];
    let b = [0.0f32, 0.1, 0.2];
    let c = [0.0f32, 0.2, 0.2];
    let d = [0.0f32, 0.5, 0.2];

    suite.assert_array_almost_equal(Equal, &a, &b, 0.05)?; // pass
    suite.assert_array_almost_equal(Equal, &a, &c, 0.05)?; // fail
    suite.assert_array_almost_equal(NotEqual, &a, &b, 0.1)?; // fail
    suite.assert_array_almost_equal(NotEqual, &a, &c, 0.1)?; // fail: the bound is inclusive
    suite.assert_array_almost_equal(Equal, &a, &d, 1.0)?; // pass
    suite.assert_array_almost_equal(NotEqual, &a, &d, 1.0)?; // fail
    suite.assert_array_almost_equal(Equal, &a, &d, 0.05)?; // fail
    suite.assert_array_almost_equal(NotEqual, &a, &d, 0.05)?; // pass
    Ok(())
}

fn scalar_doubles(suite: &mut SuiteRun<'_>) -> Result<(), HarnessError> {
    suite.assert_equal(Equal, 1e-8f64, 1e-8)?; // pass
    suite.assert_equal(Equal, 1e-8f64, 2e-6)?; // fail
    suite.assert_equal(NotEqual, 1e-8f64, 1e-8)?; // fail
    suite.assert_equal(NotEqual, 1e-8f64, 2e-6)?; // pass
    Ok(())
}

fn double_arrays(suite: &mut SuiteRun<'_>) -> Result<(), HarnessError> {
    let a = [0.0f64, 1e-8, 1e-8];
    let b = [0.0f64, 1e-8, 1e-8];
    let c = [0.0f64, 1e-6, 1e-8];

    suite.assert_array_equal(Equal, &a, &b)?; // pass
    suite.assert_array_equal(Equal, &a, &c)?; // fail
    suite.assert_array_equal(NotEqual, &a, &b)?; // fail
    suite.assert_array_equal(NotEqual, &a, &c)?; // pass
    Ok(())
}

fn double_almost(suite: &mut SuiteRun<'_>) -> Result<(), HarnessError> {
    let a = [0.0f64, 1e-8, 1e-8];
    let b = [0.0f64, 1e-8, 1e-8];
    let c = [0.0f64, 1e-6, 1e-8];
    let d = [0.0f64, 1e-2, 1e-8];

    suite.assert_array_almost_equal(Equal, &a, &b, 1e-9)?; // pass
    suite.assert_array_almost_equal(Equal, &a, &c, 1e-9)?; // fail
    suite.assert_array_almost_equal(NotEqual, &a, &b, 1e-4)?; // fail
    suite.assert_array_almost_equal(NotEqual, &a, &c, 1e-4)?; // fail
    suite.assert_array_almost_equal(Equal, &a, &d, 1.0)?; // pass
    suite.assert_array_almost_equal(NotEqual, &a, &d, 1.0)?; // fail
    suite.assert_array_almost_equal(Equal, &a, &d, 1e-8)?; // fail
    suite.assert_array_almost_equal(NotEqual, &a, &d, 1e-8)?; // pass
    Ok(())
}
