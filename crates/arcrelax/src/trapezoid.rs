//! Polygonal sandwich of a circular arc (tangents outside, chord inside).
//!
//! Model
//! - Tangent lines at `n` evenly spaced angles of `[ψ_min, ψ_max]` (endpoints
//!   included) bound the arc from outside; the chord through the endpoints
//!   bounds it from inside. With `n = 3` the region is a trapezoid.
//! - Region: every tangent `≤ 0`, chord `≥ 0`. Bounded only for spans below π.
//! - The outer gap is `r (sec(δ/2) − 1)` for sample spacing δ, so tightness is
//!   tuned by `n`.

use nalgebra::Vector2;

use crate::arc::AngleInterval;
use crate::cfg::MAX_POLYGON_SPAN;
use crate::error::RelaxError;
use crate::lines::{polar_point, secant_line, tangent_line, Line2};

#[derive(Clone, Debug, PartialEq)]
pub struct ArcPolygon {
    pub interval: AngleInterval,
    pub radius: f64,
    /// Sample angles, increasing; `tangents[i]` touches the circle at `angles[i]`.
    pub angles: Vec<f64>,
    pub tangents: Vec<Line2>,
    pub chord: Line2,
}

/// Build the tangent/chord polygon for `iv` on the circle of `radius`.
pub fn arc_polygon(
    iv: AngleInterval,
    radius: f64,
    samples: usize,
) -> Result<ArcPolygon, RelaxError> {
    let iv = AngleInterval::try_new(iv.psi_min, iv.psi_max)?;
    if !radius.is_finite() {
        return Err(RelaxError::NonFinite);
    }
    if radius <= 0.0 {
        return Err(RelaxError::NonPositiveRadius(radius));
    }
    if samples < 2 {
        return Err(RelaxError::TooFewSamples {
            got: samples,
            min: 2,
        });
    }
    let span = iv.len();
    if !(span > 0.0 && span < MAX_POLYGON_SPAN) {
        return Err(RelaxError::SpanOutOfRange {
            span,
            max: MAX_POLYGON_SPAN,
        });
    }

    let angles = iv.sample(samples);
    let tangents = angles
        .iter()
        .map(|&theta| tangent_line(polar_point(theta, radius)))
        .collect();
    let chord = secant_line(
        polar_point(iv.psi_min, radius),
        polar_point(iv.psi_max, radius),
    )?;
    tracing::debug!(
        psi_min = iv.psi_min,
        psi_max = iv.psi_max,
        radius,
        samples,
        "arc polygon"
    );
    Ok(ArcPolygon {
        interval: iv,
        radius,
        angles,
        tangents,
        chord,
    })
}

impl ArcPolygon {
    /// Membership with signed-distance slack `eps`.
    pub fn contains(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.tangents.iter().all(|t| t.signed_distance(p) <= eps)
            && self.chord.signed_distance(p) >= -eps
    }

    /// All constraints rewritten as `line(p) ≤ 0`.
    pub fn le_zero_constraints(&self) -> Vec<Line2> {
        let mut out = self.tangents.clone();
        out.push(Line2::new(-self.chord.a, -self.chord.b, -self.chord.c));
        out
    }

    /// Boundary vertices, counter-clockwise: arc start, consecutive tangent
    /// crossings, arc end. The chord closes the loop.
    pub fn vertices(&self) -> Vec<Vector2<f64>> {
        let mut out = Vec::with_capacity(self.tangents.len() + 1);
        out.push(polar_point(self.interval.psi_min, self.radius));
        out.extend(
            self.tangents
                .windows(2)
                .filter_map(|w| w[0].intersect(&w[1])),
        );
        out.push(polar_point(self.interval.psi_max, self.radius));
        out
    }

    /// Largest distance of the outer boundary beyond the arc.
    pub fn outer_gap(&self) -> f64 {
        self.vertices()
            .iter()
            .map(|v| v.norm() - self.radius)
            .fold(0.0, f64::max)
    }

    /// Sagitta: distance from the chord to the arc midpoint.
    pub fn inner_gap(&self) -> f64 {
        self.radius * (1.0 - (0.5 * self.interval.len()).cos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sector(deg0: f64, width: f64) -> AngleInterval {
        AngleInterval::from_degrees(deg0, deg0 + width).unwrap()
    }

    #[test]
    fn three_degree_trapezoid_coefficients() {
        let poly = arc_polygon(sector(3.0, 3.0), 200.0, 3).unwrap();
        let t0 = poly.tangents[0];
        assert!((t0.a - 200.0 * 3f64.to_radians().cos()).abs() < 1e-9);
        assert!((t0.b - 200.0 * 3f64.to_radians().sin()).abs() < 1e-9);
        assert!((t0.c + 40_000.0).abs() < 1e-6);
        assert_eq!(poly.tangents.len(), 3);
        assert!((poly.angles[1] - 4.5f64.to_radians()).abs() < 1e-15);
        // chord: positive on the arc, negative at the centre
        assert!(poly.chord.eval(polar_point(4.5f64.to_radians(), 200.0)) > 0.0);
        assert!(poly.chord.c < 0.0);
    }

    #[test]
    fn arc_is_sandwiched() {
        let poly = arc_polygon(sector(-40.0, 70.0), 12.0, 5).unwrap();
        for theta in poly.interval.sample(500) {
            assert!(poly.contains(polar_point(theta, 12.0), 1e-9));
        }
        assert!(!poly.contains(Vector2::zeros(), 1e-9));
        assert!(!poly.contains(polar_point(poly.interval.mid(), 13.0), 1e-9));
        for v in poly.vertices() {
            assert!(poly.contains(v, 1e-9));
        }
        assert_eq!(poly.vertices().len(), 6);
        assert_eq!(poly.le_zero_constraints().len(), 6);
    }

    #[test]
    fn more_samples_tighten_outer_gap() {
        let iv = sector(10.0, 60.0);
        let r = 200.0;
        let mut prev = f64::INFINITY;
        for n in [2, 3, 5, 9] {
            let poly = arc_polygon(iv, r, n).unwrap();
            let gap = poly.outer_gap();
            let delta = iv.len() / (n - 1) as f64;
            let expected = r * (1.0 / (0.5 * delta).cos() - 1.0);
            assert!((gap - expected).abs() < 1e-9 * r, "n={n}: {gap} vs {expected}");
            assert!(gap < prev);
            prev = gap;
        }
        let poly = arc_polygon(iv, r, 3).unwrap();
        assert!((poly.inner_gap() - r * (1.0 - 30f64.to_radians().cos())).abs() < 1e-9);
    }

    #[test]
    fn rejects_degenerate_sectors() {
        assert!(matches!(
            arc_polygon(sector(5.0, 0.0), 1.0, 3),
            Err(RelaxError::SpanOutOfRange { .. })
        ));
        assert!(matches!(
            arc_polygon(sector(0.0, 200.0), 1.0, 3),
            Err(RelaxError::SpanOutOfRange { .. })
        ));
        assert_eq!(
            arc_polygon(sector(0.0, 10.0), 1.0, 1),
            Err(RelaxError::TooFewSamples { got: 1, min: 2 })
        );
        assert_eq!(
            arc_polygon(sector(0.0, 10.0), -1.0, 3),
            Err(RelaxError::NonPositiveRadius(-1.0))
        );
    }
}
