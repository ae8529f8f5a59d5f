//! Error types.

use thiserror::Error;

/// Errors raised for caller-supplied slices that are too short.
///
/// These are the only hard failures in the crate.  Degenerate numeric inputs
/// (singular matrices, empty rectangles, zero sweeps) never produce an error;
/// they are signaled through `Option`/`bool` returns or degrade to no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A matrix values slice did not hold the 9 required elements.
    #[error("matrix values slice needs 9 elements, got {0}")]
    MatrixValues(usize),

    /// A per-corner radii slice did not hold the 8 required values.
    #[error("corner radii slice needs 8 values, got {0}")]
    CornerRadii(usize),
}
