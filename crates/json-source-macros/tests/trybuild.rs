//! Compile-time tests for the `#[json_source]` attribute.

use rstest::rstest;

#[rstest]
#[case::single_literal("tests/ui/single_literal.rs")]
#[case::multiple_literals("tests/ui/multiple_literals.rs")]
#[case::parameter_source("tests/ui/parameter_source.rs")]
fn trybuild_fixtures_pass(#[case] fixture: &str) {
    let t = trybuild::TestCases::new();
    t.pass(fixture);
}

#[rstest]
#[case::on_struct("tests/ui/on_struct.rs")]
#[case::missing_values("tests/ui/missing_values.rs")]
#[case::non_string_value("tests/ui/non_string_value.rs")]
fn trybuild_fixtures_compile_fail(#[case] fixture: &str) {
    let t = trybuild::TestCases::new();
    t.compile_fail(fixture);
}
