//! Turning curve geometry into draw calls.
//!
//! The geometry types know nothing about pixels. A host that can stroke
//! polylines and circles implements [`Surface`], and [`CurveRenderer`]
//! drives it from a [`Curve`]: the curve itself as its lookup-table
//! polyline, the control polygon, the control point markers, the
//! de Casteljau struts at a parameter, the bounding box. The split keeps
//! the math free of drawing dependencies and the drawing free of math.

use kurbo::{Point, Rect};

use crate::curve::Curve;

/// Default stroke for the curve polyline.
pub const CURVE_COLOR: Color = Color::grey8(0x33);
/// Default stroke for the control polygon.
pub const SKELETON_COLOR: Color = Color::grey8(0x55);
/// Default stroke for strut lines and their markers.
pub const STRUT_COLOR: Color = Color::grey8(0x55);

const MARKER_OUTLINE_COLOR: Color = Color::grey8(0x99);
const MARKER_COLORS: [Color; 4] = [Color::RED, Color::GREEN, Color::BLUE, Color::YELLOW];
const MARKER_RADIUS: f64 = 5.0;
const LABEL_OFFSET: f64 = 10.0;

/// An RGB color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::grey8(0x00);
    pub const RED: Color = Color::rgb8(0xff, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb8(0x00, 0x80, 0x00);
    pub const BLUE: Color = Color::rgb8(0x00, 0x00, 0xff);
    pub const YELLOW: Color = Color::rgb8(0xff, 0xff, 0x00);

    /// A color from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// An even grey.
    pub const fn grey8(v: u8) -> Color {
        Color::rgb8(v, v, v)
    }
}

/// The host drawing surface.
///
/// Implementations live with the host: a canvas, a paint context, an
/// SVG writer. Every call carries its own color and width, so there is
/// no style stack to manage, and coordinates pass through untouched.
pub trait Surface {
    /// Strokes an open polyline through `points`.
    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f64);
    /// Strokes a circle outline.
    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: f64);
    /// Fills a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);
    /// Strokes a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);
    /// Draws `text` anchored at `pos`.
    fn text(&mut self, text: &str, pos: Point, color: Color);
}

/// Draws one curve onto one surface.
///
/// Borrows the curve shared and the surface exclusively for the length
/// of a paint pass; all geometry goes through the curve's public
/// queries.
pub struct CurveRenderer<'a, S> {
    curve: &'a Curve,
    surface: &'a mut S,
}

impl<'a, S: Surface> CurveRenderer<'a, S> {
    pub fn new(curve: &'a Curve, surface: &'a mut S) -> CurveRenderer<'a, S> {
        CurveRenderer { curve, surface }
    }

    /// The standard frame: control polygon, curve, labelled markers.
    pub fn draw(&mut self) {
        self.draw_skeleton(SKELETON_COLOR);
        self.draw_curve(CURVE_COLOR);
        self.draw_points(true);
    }

    /// Strokes the curve as its lookup-table polyline.
    pub fn draw_curve(&mut self, color: Color) {
        let lut = self.curve.lut(Curve::DEFAULT_LUT_SAMPLES);
        self.surface.stroke_polyline(&lut, color, 1.0);
    }

    /// Strokes the control polygon.
    pub fn draw_skeleton(&mut self, color: Color) {
        self.surface.stroke_polyline(self.curve.points(), color, 1.0);
    }

    /// Marks every control point: a disc in a fixed four-color cycle
    /// with a grey outline and, when `labels` is set, the coordinates
    /// beside it, truncated to integers.
    pub fn draw_points(&mut self, labels: bool) {
        for (i, &p) in self.curve.points().iter().enumerate() {
            let fill = MARKER_COLORS[i % MARKER_COLORS.len()];
            self.surface.fill_circle(p, MARKER_RADIUS, fill);
            self.surface
                .stroke_circle(p, MARKER_RADIUS, MARKER_OUTLINE_COLOR, 2.0);
            if labels {
                let label = format!("({},{})", p.x as i64, p.y as i64);
                let at = Point::new(p.x + LABEL_OFFSET, p.y + LABEL_OFFSET);
                self.surface.text(&label, at, Color::BLACK);
            }
        }
    }

    /// Draws the de Casteljau construction at `t`: each intermediate
    /// level as a polyline with circle markers at its points. The
    /// control points themselves are left to
    /// [`draw_points`](CurveRenderer::draw_points), and the final
    /// single point is the curve point, not a strut, so neither level
    /// is drawn here.
    pub fn draw_struts(&mut self, t: f64, color: Color) {
        let struts = self.curve.struts(t);
        let mut level_start = self.curve.points().len();
        let mut level_len = self.curve.points().len() - 1;
        while level_len > 1 {
            let level = &struts[level_start..level_start + level_len];
            self.surface.stroke_polyline(level, color, 1.0);
            for &p in level {
                self.surface.stroke_circle(p, MARKER_RADIUS, color, 1.0);
            }
            level_start += level_len;
            level_len -= 1;
        }
    }

    /// Strokes the curve's bounding box.
    pub fn draw_bounding_box(&mut self, color: Color) {
        self.surface.stroke_rect(self.curve.bbox(), color, 1.0);
    }
}
