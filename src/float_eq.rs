//! Utilities to compare floating-point numbers.

use float_cmp::ApproxEq;

/// The smallest scalar difference the transform code distinguishes.
///
/// Matches the fixed-point granularity of the downstream surface; the
/// inversion code compares determinants against the cube of this value.
pub const SCALAR_TOLERANCE: f64 = 1.0 / 4096.0;

/// Checks whether two floating-point numbers are approximately equal,
/// within [`SCALAR_TOLERANCE`].
///
/// Coordinates that differ by less than the surface can represent are
/// considered the same point.  A difference of 1 unit-in-the-last-place
/// is also accepted, for very large values where the absolute tolerance
/// is below the representable granularity.
pub trait ApproxEqSurface: ApproxEq {
    fn approx_eq_surface(self, other: Self) -> bool;
}

impl ApproxEqSurface for f64 {
    fn approx_eq_surface(self, other: f64) -> bool {
        self.approx_eq(other, (SCALAR_TOLERANCE, 1))
    }
}

// Macro for usage in unit tests
#[doc(hidden)]
#[macro_export]
macro_rules! assert_approx_eq_surface {
    ($left:expr, $right:expr) => {{
        match ($left, $right) {
            (l, r) => {
                if !l.approx_eq_surface(r) {
                    panic!(
                        r#"assertion failed: `(left == right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        l, r
                    )
                }
            }
        }
    }};
}
