//! Testing helpers.

use assert_float_eq::*;

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

/// Asserts that the `(label, value)` pairs match, with values compared to within an absolute
/// `epsilon`.
pub fn assert_labelled_f64_absolute<L: PartialEq + std::fmt::Debug>(
    expected: &[(L, f64)],
    actual: &[(L, f64)],
    epsilon: f64,
) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for ((expected_label, expected_value), (actual_label, actual_value)) in
        expected.iter().zip(actual)
    {
        assert_eq!(expected_label, actual_label);
        assert_float_absolute_eq!(*expected_value, *actual_value, epsilon);
    }
}
