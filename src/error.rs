//! Error type for curve construction and point-sequence queries.

use thiserror::Error;

/// Things that can go wrong building a curve or querying a point sequence.
///
/// Every variant signals bad input, never a transient condition; there is
/// nothing to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// A curve needs at least two control points to have a parameter
    /// direction.
    #[error("a curve needs at least 2 control points, got {0}")]
    TooFewPoints(usize),
    /// The bounding box of zero points is undefined.
    #[error("cannot take the bounding box of an empty point sequence")]
    EmptyPoints,
}
