//! Helper functions shared across the scenario integration tests.

/// Assert `a` and `b` agree within `tol`.
pub fn assert_close(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{msg}: expected {b}, got {a} (tolerance {tol})"
    );
}
