//! Relaxation of a single 1.5° heading sector under a 3° turn.
//!
//! Prints the arc box, the four rotated faces, and the tangent/chord
//! constraints for the sector [180°, 181.5°] at speed 200.

use arcrelax::prelude::*;

fn main() {
    let iv = AngleInterval::from_degrees(180.0, 181.5).expect("finite, ordered");
    let speed = 200.0;
    let bb = arc_bounding_box_checked(iv, speed).expect("inside scan window");
    println!("bbox: {bb:?}");

    let frame = RotationFrame::from_angle(3f64.to_radians());
    let cfg = RelaxCfg::default();
    let faces = rotated_faces(&frame, &bb, &cfg);
    for (name, hp) in faces.iter() {
        let op = match hp.sense {
            Sense::Le => "<=",
            Sense::Ge => ">=",
        };
        println!(
            "{name}: {:.4}x {:+.4}y {:+.1}p {op} {:.4}",
            hp.coeffs.x, hp.coeffs.y, hp.coeffs.z, hp.c
        );
    }

    let poly = arc_polygon(iv, speed, cfg.tangent_samples).expect("narrow sector");
    for t in &poly.tangents {
        println!("{:.1}x {:+.1}y {:+.1} <= 0", t.a, t.b, t.c);
    }
    let s = poly.chord;
    println!("{:.1}x {:+.1}y {:+.1} >= 0", s.a, s.b, s.c);
    println!(
        "outer_gap={:.6} inner_gap={:.6}",
        poly.outer_gap(),
        poly.inner_gap()
    );
}
