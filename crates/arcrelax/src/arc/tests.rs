use super::*;
use crate::cfg::{SCAN_WINDOW_HI, SCAN_WINDOW_LO};
use crate::error::RelaxError;
use nalgebra::Vector2;
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn full_circle_is_speed_square() {
    let bb = arc_bounding_box(0.0, TAU, 3.5);
    assert_eq!(
        bb,
        BoundingBox {
            vx_lower: -3.5,
            vx_upper: 3.5,
            vy_lower: -3.5,
            vy_upper: 3.5,
        }
    );
}

#[test]
fn degenerate_interval_is_point_box() {
    let a = 0.7;
    let bb = arc_bounding_box(a, a, 12.0);
    assert_eq!(bb.vx_lower, 12.0 * a.cos());
    assert_eq!(bb.vx_upper, 12.0 * a.cos());
    assert_eq!(bb.vy_lower, 12.0 * a.sin());
    assert_eq!(bb.vy_upper, 12.0 * a.sin());
}

#[test]
fn first_quadrant() {
    let bb = arc_bounding_box(0.0, FRAC_PI_2, 200.0);
    assert!(close(bb.vx_lower, 0.0, 1e-9));
    assert_eq!(bb.vx_upper, 200.0);
    assert!(close(bb.vy_lower, 0.0, 1e-9));
    assert_eq!(bb.vy_upper, 200.0);
}

#[test]
fn wraparound_through_pi_clamps_x_lower() {
    let (a, b) = (170f64.to_radians(), 190f64.to_radians());
    let bb = arc_bounding_box(a, b, 1.0);
    assert_eq!(bb.vx_lower, -1.0);
    assert!(close(bb.vx_upper, a.cos().max(b.cos()), 1e-15));
    assert!(close(bb.vx_upper, -0.984_807_753, 1e-8));
    assert!(close(bb.vy_lower, b.sin(), 1e-15));
    assert!(close(bb.vy_lower, -0.173_648_178, 1e-8));
    assert!(close(bb.vy_upper, 0.173_648_178, 1e-8));
}

#[test]
fn negative_headings_wrap_to_family_members() {
    // [-100°, -80°] contains -π/2 = 3π/2 − 2π
    let bb = arc_bounding_box((-100f64).to_radians(), (-80f64).to_radians(), 2.0);
    assert_eq!(bb.vy_lower, -2.0);
    assert!(bb.vy_upper < 0.0);
    assert!(bb.vx_lower < 0.0 && bb.vx_upper > 0.0);
}

#[test]
fn scan_and_modular_tests_agree_on_endpoints() {
    let iv = AngleInterval::new(PI, PI);
    assert!(scan_hits(CriticalAngle::XMin, &iv));
    assert!(contains_mod_tau(CriticalAngle::XMin, &iv));
    let iv = AngleInterval::new(TAU, TAU);
    assert!(scan_hits(CriticalAngle::XMax, &iv));
    assert!(contains_mod_tau(CriticalAngle::XMax, &iv));
}

#[test]
fn scan_and_modular_agree_on_every_scanned_member() {
    // endpoints sitting exactly on `base + 2πk` for each scanned offset
    for family in CriticalAngle::ALL {
        for k in -2..=2 {
            let theta = family.base() + f64::from(k) * TAU;
            for iv in [
                AngleInterval::new(theta, theta),
                AngleInterval::new(theta, theta + 0.1),
                AngleInterval::new(theta - 0.1, theta),
            ] {
                assert!(scan_hits(family, &iv), "{family:?} k={k}");
                assert!(contains_mod_tau(family, &iv), "{family:?} k={k}");
            }
        }
    }
}

#[test]
fn modular_box_handles_headings_beyond_scan_window() {
    // 20π + [170°, 190°]: the scan misses π + 20π, modular containment does not
    let shift = 10.0 * TAU;
    let iv = AngleInterval::new(170f64.to_radians() + shift, 190f64.to_radians() + shift);
    let loose = arc_bounding_box(iv.psi_min, iv.psi_max, 1.0);
    let exact = arc_bounding_box_exact(iv, 1.0).unwrap();
    assert!(loose.vx_lower > -0.99);
    assert_eq!(exact.vx_lower, -1.0);
}

#[test]
fn checked_rejects_bad_inputs() {
    let iv = AngleInterval {
        psi_min: 1.0,
        psi_max: 0.5,
    };
    assert!(matches!(
        arc_bounding_box_checked(iv, 1.0),
        Err(RelaxError::InvertedInterval { .. })
    ));
    let iv = AngleInterval::new(0.0, 0.5);
    assert_eq!(
        arc_bounding_box_checked(iv, 0.0),
        Err(RelaxError::NonPositiveRadius(0.0))
    );
    assert_eq!(
        arc_bounding_box_checked(iv, f64::NAN),
        Err(RelaxError::NonFinite)
    );
    let wide = AngleInterval::new(0.0, SCAN_WINDOW_HI + 0.1);
    assert!(matches!(
        arc_bounding_box_checked(wide, 1.0),
        Err(RelaxError::IntervalOutsideWindow { .. })
    ));
    let ok = arc_bounding_box_checked(AngleInterval::new(SCAN_WINDOW_LO, 0.0), 1.0).unwrap();
    assert!(ok.is_well_formed());
}

#[test]
fn interval_sampling_hits_endpoints() {
    let iv = AngleInterval::new(0.1, 0.4);
    let s = iv.sample(4);
    assert_eq!(s.len(), 4);
    assert_eq!(s[0], 0.1);
    assert_eq!(s[3], 0.4);
    assert!(close(s[1], 0.2, 1e-15));
    assert_eq!(iv.sample(1), vec![iv.mid()]);
    assert!(iv.sample(0).is_empty());
}

fn interval_in_window() -> impl Strategy<Value = (f64, f64)> {
    (SCAN_WINDOW_LO..SCAN_WINDOW_HI, 0.0..(1.5 * TAU))
        .prop_map(|(a, len)| (a, (a + len).min(SCAN_WINDOW_HI)))
}

proptest! {
    #[test]
    fn bounds_are_ordered((a, b) in interval_in_window(), speed in 0.01f64..500.0) {
        let bb = arc_bounding_box(a, b, speed);
        prop_assert!(bb.is_well_formed());
    }

    #[test]
    fn box_contains_and_hugs_the_arc((a, b) in interval_in_window(), speed in 0.01f64..500.0) {
        let bb = arc_bounding_box(a, b, speed);
        let iv = AngleInterval::new(a, b);
        let tol = 1e-9 * speed;
        let (mut xl, mut xu, mut yl, mut yu) = (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY);
        for theta in iv.sample(4000) {
            let v = Vector2::new(speed * theta.cos(), speed * theta.sin());
            prop_assert!(bb.contains(v, tol));
            xl = xl.min(v.x);
            xu = xu.max(v.x);
            yl = yl.min(v.y);
            yu = yu.max(v.y);
        }
        let slack = 1e-5 * speed;
        prop_assert!(close(bb.vx_lower, xl, slack));
        prop_assert!(close(bb.vx_upper, xu, slack));
        prop_assert!(close(bb.vy_lower, yl, slack));
        prop_assert!(close(bb.vy_upper, yu, slack));
    }

    #[test]
    fn scan_matches_modular_inside_window((a, b) in interval_in_window()) {
        let iv = AngleInterval::new(a, b);
        for family in CriticalAngle::ALL {
            prop_assert_eq!(scan_hits(family, &iv), contains_mod_tau(family, &iv));
        }
        prop_assert_eq!(arc_bounding_box(a, b, 1.0), arc_bounding_box_exact(iv, 1.0).unwrap());
    }
}
