//! Canonical placement of a curve in the frame of its own chord.

use kurbo::Affine;

use crate::curve::Curve;

impl Curve {
    /// Re-expresses the curve in the frame of its own chord: the first
    /// control point moves to the origin, then everything rotates about
    /// the origin until the last control point sits on the positive
    /// x-axis.
    ///
    /// The transform is rigid, translation and rotation only, so the
    /// shape is untouched; only the placement changes. Congruent control
    /// polygons therefore align to the same picture, which is the point
    /// of the exercise: side by side with the original, the aligned copy
    /// shows that a curve's shape owes nothing to where it sits. The
    /// result is an independent snapshot; editing the source afterwards
    /// leaves it alone.
    ///
    /// The first point of the result is (0, 0) and the last lands at
    /// (chord length, y), with y only as far from zero as rounding takes
    /// it.
    pub fn aligned(&self) -> Curve {
        let anchor = self.start();
        let chord = self.end() - anchor;
        let frame = Affine::rotate(-chord.atan2()) * Affine::translate(-anchor.to_vec2());
        Curve {
            points: self.points.iter().map(|&p| frame * p).collect(),
        }
    }
}
