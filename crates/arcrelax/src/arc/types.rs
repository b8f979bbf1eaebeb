//! Angle intervals and axis-aligned boxes.

use nalgebra::Vector2;

use crate::error::RelaxError;

/// Closed heading interval `[psi_min, psi_max]` in radians.
///
/// Invariant: `psi_min <= psi_max`, both finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleInterval {
    pub psi_min: f64,
    pub psi_max: f64,
}

impl AngleInterval {
    /// Unchecked constructor; ordering is only debug-asserted.
    #[inline]
    pub fn new(psi_min: f64, psi_max: f64) -> Self {
        debug_assert!(psi_min <= psi_max, "inverted interval");
        Self { psi_min, psi_max }
    }

    pub fn try_new(psi_min: f64, psi_max: f64) -> Result<Self, RelaxError> {
        if !psi_min.is_finite() || !psi_max.is_finite() {
            return Err(RelaxError::NonFinite);
        }
        if psi_min > psi_max {
            return Err(RelaxError::InvertedInterval { psi_min, psi_max });
        }
        Ok(Self { psi_min, psi_max })
    }

    /// Degree-valued convenience constructor.
    pub fn from_degrees(min_deg: f64, max_deg: f64) -> Result<Self, RelaxError> {
        Self::try_new(min_deg.to_radians(), max_deg.to_radians())
    }

    #[inline]
    pub fn len(&self) -> f64 {
        self.psi_max - self.psi_min
    }

    #[inline]
    pub fn mid(&self) -> f64 {
        0.5 * (self.psi_min + self.psi_max)
    }

    #[inline]
    pub fn contains(&self, theta: f64) -> bool {
        self.psi_min <= theta && theta <= self.psi_max
    }

    /// `n` evenly spaced angles with both endpoints included (`n == 1` gives the midpoint).
    pub fn sample(&self, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![self.mid()],
            _ => {
                let step = self.len() / (n - 1) as f64;
                let mut out: Vec<f64> = (0..n - 1)
                    .map(|i| self.psi_min + step * i as f64)
                    .collect();
                // land exactly on the upper endpoint
                out.push(self.psi_max);
                out
            }
        }
    }
}

/// Axis-aligned box `[vx_lower, vx_upper] × [vy_lower, vy_upper]`, already scaled by speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub vx_lower: f64,
    pub vx_upper: f64,
    pub vy_lower: f64,
    pub vy_upper: f64,
}

impl BoundingBox {
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.vx_lower <= self.vx_upper && self.vy_lower <= self.vy_upper
    }

    #[inline]
    pub fn contains(&self, v: Vector2<f64>, eps: f64) -> bool {
        v.x >= self.vx_lower - eps
            && v.x <= self.vx_upper + eps
            && v.y >= self.vy_lower - eps
            && v.y <= self.vy_upper + eps
    }

    /// Corners in CCW order starting at the lower-left.
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        [
            Vector2::new(self.vx_lower, self.vy_lower),
            Vector2::new(self.vx_upper, self.vy_lower),
            Vector2::new(self.vx_upper, self.vy_upper),
            Vector2::new(self.vx_lower, self.vy_upper),
        ]
    }
}
