//! Renders the stock demonstration curves to an SVG document on stdout.
//!
//! The output shows the full teaching picture for a quadratic and a
//! cubic: control polygon, de Casteljau struts at t = 0.5, the curve,
//! its bounding box, and labelled control point markers.

use std::fmt::Write;

use kurbo::{Point, Rect};

use bezlab::{Color, Curve, CurveRenderer, Surface, CURVE_COLOR, SKELETON_COLOR, STRUT_COLOR};

/// Collects draw calls as SVG elements.
#[derive(Default)]
struct SvgSurface {
    body: String,
}

fn hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

impl Surface for SvgSurface {
    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f64) {
        let coords = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            self.body,
            r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="{}" />"#,
            coords,
            hex(color),
            width
        )
        .unwrap();
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: f64) {
        writeln!(
            self.body,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{}" fill="none" stroke="{}" stroke-width="{}" />"#,
            center.x,
            center.y,
            radius,
            hex(color),
            width
        )
        .unwrap();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        writeln!(
            self.body,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" />"#,
            center.x,
            center.y,
            radius,
            hex(color)
        )
        .unwrap();
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        writeln!(
            self.body,
            r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="{}" stroke-width="{}" />"#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            hex(color),
            width
        )
        .unwrap();
    }

    fn text(&mut self, text: &str, pos: Point, color: Color) {
        writeln!(
            self.body,
            r#"  <text x="{:.2}" y="{:.2}" font-size="10" fill="{}">{}</text>"#,
            pos.x,
            pos.y,
            hex(color),
            text
        )
        .unwrap();
    }
}

fn picture(curve: &Curve) -> String {
    let mut surface = SvgSurface::default();
    let mut renderer = CurveRenderer::new(curve, &mut surface);
    renderer.draw_skeleton(SKELETON_COLOR);
    renderer.draw_struts(0.5, STRUT_COLOR);
    renderer.draw_curve(CURVE_COLOR);
    renderer.draw_bounding_box(SKELETON_COLOR);
    renderer.draw_points(true);
    surface.body
}

fn main() {
    println!(r#"<svg xmlns="http://www.w3.org/2000/svg" width="600" height="300">"#);
    println!("<g>");
    print!("{}", picture(&Curve::default_quadratic()));
    println!("</g>");
    println!(r#"<g transform="translate(300 0)">"#);
    print!("{}", picture(&Curve::default_cubic()));
    println!("</g>");
    println!("</svg>");
}
