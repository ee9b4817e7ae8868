use attest_harness::{run_suite_to, Expectation, OutputMode};

#[test]
fn transcript_follows_the_stable_format() {
    let mut out = Vec::new();
    let summary = run_suite_to("scalar_ints", OutputMode::Standard, &mut out, |suite| {
        suite.assert_equal(Expectation::Equal, 1, 1)?;
        suite.assert_equal(Expectation::Equal, 1, 2)?;
        suite.assert_equal(Expectation::NotEqual, 1, 1)?;
        suite.assert_equal(Expectation::NotEqual, 1, 0)?;
        Ok(())
    })
    .unwrap();

    let transcript = String::from_utf8(out).unwrap();
    let expected = "\
Running tests for: 'scalar_ints'
Test 1 passed
Test 2 failed
Test 3 failed
Test 4 passed
Passed 2 out of 4 tests

Finished test suite
";
    assert_eq!(transcript, expected);
    assert_eq!(summary.name, "scalar_ints");
    assert_eq!(summary.run, 4);
    assert_eq!(summary.passed, 2);
    assert!(!summary.all_passed());
}

#[test]
fn three_of_four_reads_as_passed_three_out_of_four() {
    let mut out = Vec::new();
    run_suite_to("mixed", OutputMode::Standard, &mut out, |suite| {
        suite.assert_equal(Expectation::Equal, 3, 3)?;
        suite.assert_equal(Expectation::NotEqual, 3, 4)?;
        suite.assert_equal(Expectation::Equal, 0, 0)?;
        suite.assert_equal(Expectation::Equal, 3, 4)?;
        Ok(())
    })
    .unwrap();

    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.contains("Passed 3 out of 4 tests"));
}

#[test]
fn empty_suite_reports_zero_of_zero() {
    let mut out = Vec::new();
    let summary = run_suite_to("empty", OutputMode::Standard, &mut out, |_| Ok(())).unwrap();

    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.contains("Passed 0 out of 0 tests"));
    assert!(summary.all_passed());
}

#[test]
fn timed_mode_is_recorded_without_changing_the_transcript() {
    let mut standard = Vec::new();
    let mut timed = Vec::new();

    run_suite_to("modes", OutputMode::Standard, &mut standard, |suite| {
        assert_eq!(suite.mode(), OutputMode::Standard);
        suite.assert_equal(Expectation::Equal, 9, 9)?;
        Ok(())
    })
    .unwrap();
    run_suite_to("modes", OutputMode::Timed, &mut timed, |suite| {
        assert_eq!(suite.mode(), OutputMode::Timed);
        suite.assert_equal(Expectation::Equal, 9, 9)?;
        Ok(())
    })
    .unwrap();

    assert_eq!(standard, timed);
}
