//! Bézier curve geometry for interactive teaching tools.
//!
//! The central type is [`Curve`], a Bézier curve of any degree stored as
//! its control points and evaluated by the de Casteljau construction.
//! Everything an interactive primer needs falls out of that construction:
//! points on the curve, the intermediate "strut" points that show the
//! construction happening, geometric subdivision, a polyline lookup
//! table for display, bounding boxes, control point picking under a
//! cursor, and re-basing a curve into the canonical frame of its own
//! chord.
//!
//! Geometry and presentation stay apart: [`CurveRenderer`] turns a curve
//! into calls against a host-implemented [`Surface`], so the math
//! carries no drawing dependency.
//!
//! Built on [kurbo] for points, vectors and affine maps.
//!
//! [kurbo]: https://docs.rs/kurbo

mod align;
mod curve;
mod error;
mod render;

pub use curve::{bounding_box, Curve};
pub use error::CurveError;
pub use render::{Color, CurveRenderer, Surface, CURVE_COLOR, SKELETON_COLOR, STRUT_COLOR};
