//! Reads curves from a JSON file and draws them as SVG.
//!
//! The file holds an array of curves, each an array of control points:
//!
//! ```json
//! [[{"x": 70, "y": 250}, {"x": 20, "y": 110}, {"x": 220, "y": 60}]]
//! ```
//!
//! A curve with fewer than two points is rejected at parse time.

use bezlab::Curve;

fn main() {
    let path = std::env::args().skip(1).next().expect("needs filename");
    let data = std::fs::read_to_string(path).unwrap();
    let curves: Vec<Curve> = serde_json::from_str(&data).unwrap();
    println!(r#"<svg xmlns="http://www.w3.org/2000/svg" width="500" height="500">"#);
    for curve in &curves {
        let coords = curve
            .lut(Curve::DEFAULT_LUT_SAMPLES)
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            r##"  <polyline points="{}" fill="none" stroke="#333" />"##,
            coords
        );
        for p in curve.points() {
            println!(
                r#"  <circle cx="{:.2}" cy="{:.2}" r="3" fill="blue" />"#,
                p.x, p.y
            );
        }
    }
    println!("</svg>");
}
