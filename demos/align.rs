//! Shows that a curve's shape is independent of its placement: the
//! stock quadratic next to its canonical-frame twin.

use bezlab::Curve;

fn print_polyline(curve: &Curve, stroke: &str) {
    let coords = curve
        .lut(Curve::DEFAULT_LUT_SAMPLES)
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        r#"  <polyline points="{}" fill="none" stroke="{}" />"#,
        coords, stroke
    );
    for p in curve.points() {
        println!(
            r#"  <circle cx="{:.2}" cy="{:.2}" r="3" fill="blue" />"#,
            p.x, p.y
        );
    }
}

fn main() {
    let curve = Curve::default_quadratic();
    let aligned = curve.aligned();
    for p in aligned.points() {
        eprintln!("aligned: ({:.3}, {:.3})", p.x, p.y);
    }
    println!(r#"<svg xmlns="http://www.w3.org/2000/svg" width="600" height="300">"#);
    print_polyline(&curve, "#333");
    // The aligned copy starts at the origin; shift it into view.
    println!(r#"<g transform="translate(320 150)">"#);
    print_polyline(&aligned, "#c33");
    println!("</g>");
    println!("</svg>");
}
