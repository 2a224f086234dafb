//! Compile-fail tests for invalid `#[record]` field declarations.
//!
//! These tests verify that the attribute macro rejects, with a message on the
//! offending tokens:
//! - a field kind that cannot hold the declared Rust type
//! - ordering limits on complex numbers
//! - regex patterns that do not compile
//! - `optional` on a field that has neither an `Option<T>` type nor a default

#[test]
fn compile_fail_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/*.rs");
}
