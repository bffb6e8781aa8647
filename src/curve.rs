//! Bézier curves of arbitrary degree, evaluated by the de Casteljau
//! construction.

use std::convert::TryFrom;

use kurbo::{CubicBez, Point, QuadBez, Rect};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::error::CurveError;

/// A Bézier curve, stored as its control points.
///
/// The control points are an ordered sequence of two or more [`Point`]s.
/// Order is significant: it fixes the parameter direction, with `t = 0`
/// at the first point and `t = 1` at the last. Three points make the
/// familiar quadratic and four the cubic, but every operation here is
/// written against the general construction and works for any degree.
///
/// A curve owns its control points. All geometry queries borrow the
/// curve shared; editing a point (say, dragging it under a cursor) goes
/// through [`points_mut`] or [`point_near_mut`] and therefore needs
/// exclusive access. That borrow split is the whole synchronization
/// story for a curve shared between an editor and a painter.
///
/// [`points_mut`]: Curve::points_mut
/// [`point_near_mut`]: Curve::point_near_mut
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct Curve {
    pub(crate) points: Vec<Point>,
}

impl Curve {
    /// Sample count used by [`lut`](Curve::lut) callers that have no
    /// reason to choose. 100 points track a curve closely at screen
    /// scale while staying cheap to recompute every frame; more samples
    /// buy fidelity at proportional cost.
    pub const DEFAULT_LUT_SAMPLES: usize = 100;

    /// Conventional pick radius, in coordinate units, for
    /// [`point_near`](Curve::point_near).
    pub const HIT_RADIUS: f64 = 5.0;

    /// Creates a curve from an ordered list of control points.
    ///
    /// Fails with [`CurveError::TooFewPoints`] when fewer than two
    /// points are supplied; a lone point has no parameter direction.
    pub fn new(points: Vec<Point>) -> Result<Curve, CurveError> {
        if points.len() < 2 {
            return Err(CurveError::TooFewPoints(points.len()));
        }
        Ok(Curve { points })
    }

    /// A quadratic curve from its three control points.
    pub fn quadratic(p0: Point, p1: Point, p2: Point) -> Curve {
        Curve {
            points: vec![p0, p1, p2],
        }
    }

    /// A cubic curve from its four control points.
    pub fn cubic(p0: Point, p1: Point, p2: Point, p3: Point) -> Curve {
        Curve {
            points: vec![p0, p1, p2, p3],
        }
    }

    /// The stock quadratic used by demos and sketches, sized for a
    /// small canvas.
    pub fn default_quadratic() -> Curve {
        Curve::quadratic(
            Point::new(70.0, 250.0),
            Point::new(20.0, 110.0),
            Point::new(220.0, 60.0),
        )
    }

    /// The stock cubic used by demos and sketches.
    pub fn default_cubic() -> Curve {
        Curve::cubic(
            Point::new(110.0, 150.0),
            Point::new(25.0, 190.0),
            Point::new(210.0, 250.0),
            Point::new(210.0, 30.0),
        )
    }

    /// The control points, in parameter order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Mutable access to the control point positions.
    ///
    /// Dragging a point is a plain assignment through this slice. The
    /// slice keeps the point count fixed, so the arity invariant holds;
    /// nothing derived is cached, so nothing needs invalidating.
    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    /// The first control point, where `t = 0`.
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// The last control point, where `t = 1`.
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// The polynomial degree, one less than the control point count.
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// Evaluates the curve at parameter `t`.
    ///
    /// This is the de Casteljau construction: each round replaces
    /// consecutive pairs of points with their interpolation at `t`,
    /// until one point is left. `t` is not clamped; the interpolation is
    /// affine, so parameters outside `[0, 1]` extrapolate the curve past
    /// its endpoints, which the interactive sketches use to illustrate
    /// exactly that. Callers that want the geometric segment only must
    /// clamp `t` themselves.
    pub fn eval(&self, t: f64) -> Point {
        let mut level = self.points.clone();
        let n = level.len();
        for round in 1..n {
            for i in 0..n - round {
                level[i] = level[i].lerp(level[i + 1], t);
            }
        }
        level[0]
    }

    /// Every point of the de Casteljau construction at `t`, flattened
    /// level by level.
    ///
    /// The first n points are the control points themselves, the next
    /// n − 1 the first round of interpolations, and so on down to a
    /// single point equal to [`eval`](Curve::eval) at the same
    /// parameter; n(n+1)/2 points in all, each level running left to
    /// right. A renderer walks the levels to draw the construction the
    /// way the textbooks picture it.
    pub fn struts(&self, t: f64) -> Vec<Point> {
        let n = self.points.len();
        let mut pts = Vec::with_capacity(n * (n + 1) / 2);
        pts.extend_from_slice(&self.points);
        let mut level_start = 0;
        let mut level_len = n;
        while level_len > 1 {
            for i in level_start..level_start + level_len - 1 {
                pts.push(pts[i].lerp(pts[i + 1], t));
            }
            level_start += level_len;
            level_len -= 1;
        }
        pts
    }

    /// Subdivides at `t` into two curves that together trace the
    /// original.
    ///
    /// The control points fall straight out of the construction: the
    /// left edge of the strut hierarchy bounds the span from the start
    /// to `eval(t)`, the right edge the span from `eval(t)` to the end.
    /// Both halves have as many control points as the original, and the
    /// split parameter may sit outside `[0, 1]` like any other `t`.
    pub fn split(&self, t: f64) -> (Curve, Curve) {
        let mut level = self.points.clone();
        let n = level.len();
        let mut left = Vec::with_capacity(n);
        let mut right = vec![Point::ZERO; n];
        left.push(level[0]);
        right[n - 1] = level[n - 1];
        for round in 1..n {
            for i in 0..n - round {
                level[i] = level[i].lerp(level[i + 1], t);
            }
            left.push(level[0]);
            right[n - 1 - round] = level[n - 1 - round];
        }
        (Curve { points: left }, Curve { points: right })
    }

    /// Samples the curve at `samples` evenly spaced parameters across
    /// `[0, 1]`, both endpoints included.
    ///
    /// The result is a polyline proxy for the curve: `samples` points,
    /// starting at `eval(0)` and ending at `eval(1)`. It is recomputed
    /// in full on every call, so a table taken before a control point
    /// moved is stale and must be thrown away.
    ///
    /// `samples` must be at least 2, since both endpoints are included.
    pub fn lut(&self, samples: usize) -> Vec<Point> {
        debug_assert!(samples >= 2, "a lookup table needs both endpoints");
        let last = (samples - 1) as f64;
        (0..samples).map(|i| self.eval(i as f64 / last)).collect()
    }

    /// The first control point within distance `d` of `pos`, scanning
    /// in index order.
    ///
    /// The first match wins even when a later point is closer. The
    /// stable index order keeps picking deterministic when control
    /// points crowd together, which drag interactions rely on. Returns
    /// `None` when no control point qualifies; [`HIT_RADIUS`] is the
    /// conventional `d` for cursor work.
    ///
    /// [`HIT_RADIUS`]: Curve::HIT_RADIUS
    pub fn point_near(&self, pos: Point, d: f64) -> Option<Point> {
        self.points.iter().copied().find(|p| p.distance(pos) <= d)
    }

    /// Like [`point_near`](Curve::point_near), but hands back the
    /// control point itself for editing, holding the curve exclusively
    /// for as long as the reference lives.
    pub fn point_near_mut(&mut self, pos: Point, d: f64) -> Option<&mut Point> {
        self.points.iter_mut().find(|p| p.distance(pos) <= d)
    }

    /// The approximate closest point on the curve to `pos`.
    ///
    /// Scans the default lookup table for the nearest sample, then
    /// sweeps the parameter range one sample to either side at a tenth
    /// of the table's spacing. Returns the refined parameter, clamped to
    /// `[0, 1]`, and the curve point there. The answer is only as fine
    /// as the sweep, which is plenty for cursor feedback; this is not a
    /// root finder.
    pub fn project(&self, pos: Point) -> (f64, Point) {
        let lut = self.lut(Self::DEFAULT_LUT_SAMPLES);
        let spans = (lut.len() - 1) as f64;
        let mut nearest = 0;
        let mut best = f64::INFINITY;
        for (i, p) in lut.iter().enumerate() {
            let d = p.distance(pos);
            if d < best {
                best = d;
                nearest = i;
            }
        }
        let lo = (nearest as f64 - 1.0) / spans;
        let hi = (nearest as f64 + 1.0) / spans;
        let step = 0.1 / spans;
        let mut best_t = nearest as f64 / spans;
        let mut t = lo;
        while t <= hi {
            let d = self.eval(t).distance(pos);
            if d < best {
                best = d;
                best_t = t;
            }
            t += step;
        }
        let best_t = best_t.max(0.0).min(1.0);
        (best_t, self.eval(best_t))
    }

    /// A tight axis-aligned bounding box, computed from the default
    /// lookup table.
    ///
    /// Tight at lookup-table resolution, that is. For a looser but
    /// cheaper box, feed the raw control points to [`bounding_box`];
    /// the curve never leaves their hull.
    pub fn bbox(&self) -> Rect {
        bounding_box(&self.lut(Self::DEFAULT_LUT_SAMPLES))
            .expect("a curve's lookup table is never empty")
    }
}

impl From<QuadBez> for Curve {
    fn from(q: QuadBez) -> Curve {
        Curve::quadratic(q.p0, q.p1, q.p2)
    }
}

impl From<CubicBez> for Curve {
    fn from(c: CubicBez) -> Curve {
        Curve::cubic(c.p0, c.p1, c.p2, c.p3)
    }
}

impl TryFrom<Vec<Point>> for Curve {
    type Error = CurveError;

    fn try_from(points: Vec<Point>) -> Result<Curve, CurveError> {
        Curve::new(points)
    }
}

impl From<Curve> for Vec<Point> {
    fn from(curve: Curve) -> Vec<Point> {
        curve.points
    }
}

/// The axis-aligned bounding box of a point sequence.
///
/// Feed it a lookup table for a tight box around a curve, or control
/// points for a looser one. A single point yields a degenerate box with
/// min equal to max; an empty slice has no box at all and fails with
/// [`CurveError::EmptyPoints`].
pub fn bounding_box(points: &[Point]) -> Result<Rect, CurveError> {
    let (first, rest) = points.split_first().ok_or(CurveError::EmptyPoints)?;
    let mut x0 = first.x;
    let mut y0 = first.y;
    let mut x1 = first.x;
    let mut y1 = first.y;
    for p in rest {
        x0 = x0.min(p.x);
        y0 = y0.min(p.y);
        x1 = x1.max(p.x);
        y1 = y1.max(p.y);
    }
    Ok(Rect::new(x0, y0, x1, y1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::ParamCurve;

    fn assert_near(a: Point, b: Point) {
        assert!((b - a).hypot() < 1e-9, "{:?} != {:?}", a, b);
    }

    #[test]
    fn arity_is_checked_at_construction() {
        assert_eq!(Curve::new(vec![]), Err(CurveError::TooFewPoints(0)));
        let one = vec![Point::new(1.0, 2.0)];
        assert_eq!(Curve::new(one), Err(CurveError::TooFewPoints(1)));
        let two = vec![Point::ZERO, Point::new(1.0, 0.0)];
        assert!(Curve::new(two).is_ok());
    }

    #[test]
    fn eval_hits_the_endpoints() {
        for curve in &[Curve::default_quadratic(), Curve::default_cubic()] {
            assert_near(curve.eval(0.0), curve.start());
            assert_near(curve.eval(1.0), curve.end());
        }
    }

    #[test]
    fn eval_matches_the_closed_forms() {
        let q = QuadBez::new(
            Point::new(70.0, 250.0),
            Point::new(20.0, 110.0),
            Point::new(220.0, 60.0),
        );
        let c = CubicBez::new(
            Point::new(110.0, 150.0),
            Point::new(25.0, 190.0),
            Point::new(210.0, 250.0),
            Point::new(210.0, 30.0),
        );
        let quad = Curve::from(q);
        let cubic = Curve::from(c);
        for &t in &[-0.25, 0.0, 0.3, 0.5, 0.8, 1.0, 1.5] {
            assert_near(quad.eval(t), q.eval(t));
            assert_near(cubic.eval(t), c.eval(t));
        }
    }

    #[test]
    fn eval_extrapolates_past_the_endpoints() {
        // A two-point curve is a line, so extrapolation is easy to read.
        let line = Curve::new(vec![Point::ZERO, Point::new(10.0, 0.0)]).unwrap();
        assert_near(line.eval(2.0), Point::new(20.0, 0.0));
        assert_near(line.eval(-1.0), Point::new(-10.0, 0.0));
    }

    #[test]
    fn struts_walk_down_to_the_curve_point() {
        let curve = Curve::cubic(
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        );
        let struts = curve.struts(0.5);
        assert_eq!(struts.len(), 10);
        assert_eq!(&struts[..4], curve.points());
        assert_near(struts[4], Point::new(1.0, 0.0));
        assert_near(struts[5], Point::new(2.0, 1.0));
        assert_near(struts[6], Point::new(1.0, 2.0));
        assert_near(struts[7], Point::new(1.5, 0.5));
        assert_near(struts[8], Point::new(1.5, 1.5));
        assert_near(struts[9], Point::new(1.5, 1.0));
        assert_near(struts[9], curve.eval(0.5));
    }

    #[test]
    fn strut_count_is_triangular() {
        let mut points = vec![Point::ZERO, Point::new(1.0, 1.0)];
        for extra in &[2.0, 3.0, 4.0] {
            points.push(Point::new(*extra, 0.0));
            let curve = Curve::new(points.clone()).unwrap();
            let n = curve.points().len();
            let struts = curve.struts(0.7);
            assert_eq!(struts.len(), n * (n + 1) / 2);
            assert_near(struts[struts.len() - 1], curve.eval(0.7));
        }
    }

    #[test]
    fn split_halves_trace_the_whole() {
        let curve = Curve::default_cubic();
        let t = 0.3;
        let (left, right) = curve.split(t);
        assert_eq!(left.points().len(), 4);
        assert_eq!(right.points().len(), 4);
        assert_near(left.start(), curve.start());
        assert_near(left.end(), curve.eval(t));
        assert_near(right.start(), curve.eval(t));
        assert_near(right.end(), curve.end());
        for &u in &[0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_near(left.eval(u), curve.eval(u * t));
            assert_near(right.eval(u), curve.eval(t + u * (1.0 - t)));
        }
    }

    #[test]
    fn lut_spans_the_curve() {
        let curve = Curve::default_quadratic();
        for &samples in &[2, 16, Curve::DEFAULT_LUT_SAMPLES] {
            let lut = curve.lut(samples);
            assert_eq!(lut.len(), samples);
            assert_near(lut[0], curve.start());
            assert_near(lut[samples - 1], curve.end());
        }
    }

    #[test]
    fn lut_is_reproducible() {
        let curve = Curve::default_cubic();
        assert_eq!(curve.lut(100), curve.lut(100));
    }

    #[test]
    fn lut_stays_in_the_control_hull() {
        let curve = Curve::default_cubic();
        let hull = bounding_box(curve.points()).unwrap();
        for p in curve.lut(Curve::DEFAULT_LUT_SAMPLES) {
            assert!(p.x >= hull.x0 - 1e-9 && p.x <= hull.x1 + 1e-9);
            assert!(p.y >= hull.y0 - 1e-9 && p.y <= hull.y1 + 1e-9);
        }
    }

    #[test]
    fn first_match_wins_when_points_crowd() {
        let curve = Curve::new(vec![
            Point::ZERO,
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
        ])
        .unwrap();
        // (5, 0) is exactly 5 away from the first two points; index
        // order decides.
        let hit = curve.point_near(Point::new(5.0, 0.0), 5.0);
        assert_eq!(hit, Some(Point::ZERO));
    }

    #[test]
    fn pick_scenarios_on_a_cubic() {
        let curve = Curve::cubic(
            Point::new(110.0, 150.0),
            Point::new(25.0, 190.0),
            Point::new(210.0, 210.0),
            Point::new(210.0, 30.0),
        );
        let hit = curve.point_near(Point::new(108.0, 152.0), Curve::HIT_RADIUS);
        assert_eq!(hit, Some(Point::new(110.0, 150.0)));
        assert_eq!(curve.point_near(Point::ZERO, Curve::HIT_RADIUS), None);
    }

    #[test]
    fn point_near_mut_edits_in_place() {
        let mut curve = Curve::default_cubic();
        let grabbed = curve.point_near_mut(Point::new(108.0, 152.0), 5.0);
        *grabbed.unwrap() = Point::new(300.0, 300.0);
        assert_eq!(curve.points()[0], Point::new(300.0, 300.0));
        assert_eq!(curve.point_near_mut(Point::new(400.0, 0.0), 5.0), None);
        curve.points_mut()[1] = Point::ZERO;
        assert_eq!(curve.points()[1], Point::ZERO);
    }

    #[test]
    fn project_recovers_a_curve_point() {
        let curve = Curve::default_quadratic();
        let on_curve = curve.eval(0.37);
        let (t, p) = curve.project(on_curve);
        assert!((t - 0.37).abs() < 0.01);
        assert!(p.distance(on_curve) < 1.0);
    }

    #[test]
    fn project_clamps_to_the_segment() {
        let curve = Curve::default_quadratic();
        // Far off the start; the refined parameter must stay in range
        // and the answer must sit on the curve.
        let target = Point::new(-500.0, 500.0);
        let (t, p) = curve.project(target);
        assert!(t >= 0.0 && t <= 1.0);
        assert_near(p, curve.eval(t));
        // Never worse than the best table sample.
        let table_best = curve
            .lut(Curve::DEFAULT_LUT_SAMPLES)
            .iter()
            .map(|q| q.distance(target))
            .fold(f64::INFINITY, f64::min);
        assert!(p.distance(target) <= table_best + 1e-9);
    }

    #[test]
    fn bounding_box_of_point_sequences() {
        assert_eq!(bounding_box(&[]), Err(CurveError::EmptyPoints));
        let single = bounding_box(&[Point::new(3.0, 4.0)]).unwrap();
        assert_eq!(single, Rect::new(3.0, 4.0, 3.0, 4.0));
        let hull = bounding_box(Curve::default_quadratic().points()).unwrap();
        assert_eq!(hull, Rect::new(20.0, 60.0, 220.0, 250.0));
    }

    #[test]
    fn bbox_is_inside_the_control_hull() {
        let curve = Curve::default_cubic();
        let tight = curve.bbox();
        let hull = bounding_box(curve.points()).unwrap();
        assert!(tight.x0 >= hull.x0 - 1e-9 && tight.x1 <= hull.x1 + 1e-9);
        assert!(tight.y0 >= hull.y0 - 1e-9 && tight.y1 <= hull.y1 + 1e-9);
    }

    #[test]
    fn conversions_preserve_control_points() {
        let c = CubicBez::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, -1.0),
            Point::new(3.0, 0.0),
        );
        let curve = Curve::from(c);
        assert_eq!(curve.points(), &[c.p0, c.p1, c.p2, c.p3]);
        assert_eq!(curve.degree(), 3);
        let back: Vec<Point> = curve.into();
        assert_eq!(back.len(), 4);
        assert!(Curve::try_from(vec![Point::ZERO]).is_err());
    }
}
