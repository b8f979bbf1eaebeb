//! Supporting half-planes for the rotated turn dynamics.
//!
//! Model
//! - With heading delta Δψ (`cos`, `sin`) and velocity `v` in an arc box, the
//!   turn update reads
//!   `cos·x + sin·y − x' = −cos·vx − sin·vy + F`
//!   `−sin·x + cos·y − y' = sin·vx − cos·vy`
//!   where `F` is the nominal forward-speed constant (`RelaxCfg::forward_speed`).
//! - Each right-hand side is linear in `v`, so its range over the box is given
//!   by the support function evaluated edge-wise. The four faces returned here
//!   are that range written as `≤`/`≥` constraints over `(x, y, x')` or `(x, y, y')`.
//!
//! Soundness: every `(x, y, x', y')` produced by a velocity inside the box
//! satisfies all four faces. Faces are loose when the box is loose.

use nalgebra::{Vector2, Vector3};

use crate::arc::BoundingBox;
use crate::cfg::{RelaxCfg, SupportRule};

/// Heading delta `(cos Δψ, sin Δψ)`; unit norm is the caller's responsibility.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationFrame {
    pub cos: f64,
    pub sin: f64,
}

impl RotationFrame {
    #[inline]
    pub fn new(cos: f64, sin: f64) -> Self {
        Self { cos, sin }
    }

    #[inline]
    pub fn from_angle(dpsi: f64) -> Self {
        let (sin, cos) = dpsi.sin_cos();
        Self { cos, sin }
    }

    #[inline]
    pub fn is_unit(&self, eps: f64) -> bool {
        (self.cos * self.cos + self.sin * self.sin - 1.0).abs() <= eps
    }

    /// Right-hand-side velocity terms `(−cos·vx − sin·vy, sin·vx − cos·vy)`, without `F`.
    #[inline]
    pub fn velocity_terms(&self, v: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(
            -self.cos * v.x - self.sin * v.y,
            self.sin * v.x - self.cos * v.y,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sense {
    Le,
    Ge,
}

/// `coeffs · (x, y, primed) ⋈ c` with `⋈` given by `sense`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfPlane {
    pub coeffs: Vector3<f64>,
    pub c: f64,
    pub sense: Sense,
}

impl HalfPlane {
    #[inline]
    pub fn eval(&self, p: Vector3<f64>) -> f64 {
        self.coeffs.dot(&p)
    }

    #[inline]
    pub fn satisfies(&self, p: Vector3<f64>, eps: f64) -> bool {
        let lhs = self.eval(p);
        match self.sense {
            Sense::Le => lhs <= self.c + eps,
            Sense::Ge => lhs >= self.c - eps,
        }
    }
}

/// The four faces for one heading delta and box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotatedFaces {
    pub xup: HalfPlane,
    pub xlo: HalfPlane,
    pub yup: HalfPlane,
    pub ylo: HalfPlane,
}

impl RotatedFaces {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &HalfPlane)> {
        [
            ("xup", &self.xup),
            ("xlo", &self.xlo),
            ("yup", &self.yup),
            ("ylo", &self.ylo),
        ]
        .into_iter()
    }
}

/// Max of `k·t` over `t ∈ [lo, hi]`.
#[inline]
pub fn support_max(k: f64, lo: f64, hi: f64, rule: SupportRule) -> f64 {
    match rule {
        SupportRule::Products => (k * hi).max(k * lo),
        SupportRule::SignBranch => {
            if k >= 0.0 {
                k * hi
            } else {
                k * lo
            }
        }
    }
}

/// Min of `k·t` over `t ∈ [lo, hi]`.
#[inline]
pub fn support_min(k: f64, lo: f64, hi: f64, rule: SupportRule) -> f64 {
    match rule {
        SupportRule::Products => (k * hi).min(k * lo),
        SupportRule::SignBranch => {
            if k >= 0.0 {
                k * lo
            } else {
                k * hi
            }
        }
    }
}

#[inline]
fn assert_well_formed(bb: &BoundingBox) {
    assert!(bb.vx_lower <= bb.vx_upper, "box: vx_lower > vx_upper");
    assert!(bb.vy_lower <= bb.vy_upper, "box: vy_lower > vy_upper");
}

#[inline]
fn x_coeffs(f: &RotationFrame) -> Vector3<f64> {
    Vector3::new(f.cos, f.sin, -1.0)
}

#[inline]
fn y_coeffs(f: &RotationFrame) -> Vector3<f64> {
    Vector3::new(-f.sin, f.cos, -1.0)
}

/// `cos·x + sin·y − x' ≤ max(−cos·vx) + max(−sin·vy) + F`.
///
/// Panics if `bb` has a lower bound above its upper bound.
pub fn x_upper(f: &RotationFrame, bb: &BoundingBox, cfg: &RelaxCfg) -> HalfPlane {
    assert_well_formed(bb);
    let r = cfg.support;
    let c = support_max(-f.cos, bb.vx_lower, bb.vx_upper, r)
        + support_max(-f.sin, bb.vy_lower, bb.vy_upper, r)
        + cfg.forward_speed;
    HalfPlane {
        coeffs: x_coeffs(f),
        c,
        sense: Sense::Le,
    }
}

/// `cos·x + sin·y − x' ≥ min(−cos·vx) + min(−sin·vy) + F`.
pub fn x_lower(f: &RotationFrame, bb: &BoundingBox, cfg: &RelaxCfg) -> HalfPlane {
    assert_well_formed(bb);
    let r = cfg.support;
    let c = support_min(-f.cos, bb.vx_lower, bb.vx_upper, r)
        + support_min(-f.sin, bb.vy_lower, bb.vy_upper, r)
        + cfg.forward_speed;
    HalfPlane {
        coeffs: x_coeffs(f),
        c,
        sense: Sense::Ge,
    }
}

/// `−sin·x + cos·y − y' ≤ max(sin·vx) + max(−cos·vy)`.
pub fn y_upper(f: &RotationFrame, bb: &BoundingBox, cfg: &RelaxCfg) -> HalfPlane {
    assert_well_formed(bb);
    let r = cfg.support;
    let c = support_max(f.sin, bb.vx_lower, bb.vx_upper, r)
        + support_max(-f.cos, bb.vy_lower, bb.vy_upper, r);
    HalfPlane {
        coeffs: y_coeffs(f),
        c,
        sense: Sense::Le,
    }
}

/// `−sin·x + cos·y − y' ≥ min(sin·vx) + min(−cos·vy)`.
pub fn y_lower(f: &RotationFrame, bb: &BoundingBox, cfg: &RelaxCfg) -> HalfPlane {
    assert_well_formed(bb);
    let r = cfg.support;
    let c = support_min(f.sin, bb.vx_lower, bb.vx_upper, r)
        + support_min(-f.cos, bb.vy_lower, bb.vy_upper, r);
    HalfPlane {
        coeffs: y_coeffs(f),
        c,
        sense: Sense::Ge,
    }
}

/// All four faces (`xup`, `xlo`, `yup`, `ylo`).
pub fn rotated_faces(f: &RotationFrame, bb: &BoundingBox, cfg: &RelaxCfg) -> RotatedFaces {
    RotatedFaces {
        xup: x_upper(f, bb, cfg),
        xlo: x_lower(f, bb, cfg),
        yup: y_upper(f, bb, cfg),
        ylo: y_lower(f, bb, cfg),
    }
}
