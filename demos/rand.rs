//! A simple test program that draws a random cubic.
//!
//! This builds a curve from four random control points and outputs an
//! SVG; the bounding box goes to stderr.

use rand::distributions::{Distribution, Uniform};

use kurbo::Point;

use bezlab::Curve;

fn main() {
    let mut rng = rand::thread_rng();
    let pts = (0..4)
        .map(|_| {
            let x = Uniform::from(0.0..500.0).sample(&mut rng);
            let y = Uniform::from(0.0..500.0).sample(&mut rng);
            Point::new(x, y)
        })
        .collect::<Vec<_>>();
    let curve = Curve::new(pts.clone()).expect("four points make a curve");
    eprintln!("bbox: {:?}", curve.bbox());
    let coords = curve
        .lut(Curve::DEFAULT_LUT_SAMPLES)
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    println!(r#"<svg xmlns="http://www.w3.org/2000/svg" width="500" height="500">"#);
    println!(
        r##"  <polyline points="{}" fill="none" stroke="#000" />"##,
        coords
    );
    for pt in &pts {
        println!(
            r#"  <circle cx="{:.2}" cy="{:.2}" r="3" fill="blue" />"#,
            pt.x, pt.y
        );
    }
    println!("</svg>");
}
