//! Tangent and secant lines of a circle centred at the origin.
//!
//! Convention: `Line2 { a, b, c }` is the zero set of `a·x + b·y + c`. This differs
//! from `rotated::HalfPlane`, which compares against its constant.

use nalgebra::{Matrix2, Vector2};

use crate::error::RelaxError;

/// Line `a·x + b·y + c = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line2 {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        Vector2::new(self.a, self.b)
    }

    #[inline]
    pub fn eval(&self, p: Vector2<f64>) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Signed distance (positive on the side the normal points to).
    #[inline]
    pub fn signed_distance(&self, p: Vector2<f64>) -> f64 {
        self.eval(p) / self.normal().norm()
    }

    /// Crossing point with `other`, or `None` when (numerically) parallel.
    pub fn intersect(&self, other: &Line2) -> Option<Vector2<f64>> {
        let m = Matrix2::new(self.a, self.b, other.a, other.b);
        let scale = self.normal().norm() * other.normal().norm();
        if m.determinant().abs() <= 1e-12 * scale {
            return None;
        }
        let inv = m.try_inverse()?;
        Some(inv * Vector2::new(-self.c, -other.c))
    }
}

/// `(r cos θ, r sin θ)`.
#[inline]
pub fn polar_point(theta: f64, r: f64) -> Vector2<f64> {
    let (s, c) = theta.sin_cos();
    Vector2::new(r * c, r * s)
}

/// Inverse of `polar_point`: `(θ, ρ)` with θ ∈ (−π, π].
#[inline]
pub fn to_polar(p: Vector2<f64>) -> (f64, f64) {
    (p.y.atan2(p.x), p.x.hypot(p.y))
}

/// Tangent at `p` to the origin-centred circle through `p`: `p·q − |p|² = 0`.
///
/// Evaluates to 0 at `p` and to `−|p|²` at the centre, so the disc lies on the `≤ 0` side.
#[inline]
pub fn tangent_line(p: Vector2<f64>) -> Line2 {
    Line2::new(p.x, p.y, -p.norm_squared())
}

/// Two-point line through `p1` and `p2`.
///
/// For `p1 → p2` counter-clockwise on a circle, the minor arc lies on the `≥ 0` side.
pub fn secant_line(p1: Vector2<f64>, p2: Vector2<f64>) -> Result<Line2, RelaxError> {
    if p1 == p2 {
        return Err(RelaxError::CoincidentPoints);
    }
    let a = p2.y - p1.y;
    let b = p1.x - p2.x;
    let c = -(a * p1.x + b * p1.y);
    Ok(Line2::new(a, b, c))
}
