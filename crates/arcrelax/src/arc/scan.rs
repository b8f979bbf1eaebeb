//! Critical-angle containment tests.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::types::AngleInterval;
use crate::cfg::SCAN_OFFSETS;

/// Angle families where the unit circle reaches an axis extremum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CriticalAngle {
    /// x = +1 at 2πk.
    XMax,
    /// x = −1 at π + 2πk.
    XMin,
    /// y = +1 at π/2 + 2πk.
    YMax,
    /// y = −1 at 3π/2 + 2πk.
    YMin,
}

impl CriticalAngle {
    pub const ALL: [CriticalAngle; 4] = [
        CriticalAngle::XMax,
        CriticalAngle::XMin,
        CriticalAngle::YMax,
        CriticalAngle::YMin,
    ];

    /// Family representative in `[0, 2π)`.
    #[inline]
    pub fn base(self) -> f64 {
        match self {
            CriticalAngle::XMax => 0.0,
            CriticalAngle::XMin => PI,
            CriticalAngle::YMax => FRAC_PI_2,
            CriticalAngle::YMin => 3.0 * FRAC_PI_2,
        }
    }
}

/// Bounded offset scan: does `base + 2πk` land in the interval for some `k ∈ -2..=2`?
pub fn scan_hits(family: CriticalAngle, iv: &AngleInterval) -> bool {
    let base = family.base();
    SCAN_OFFSETS
        .into_iter()
        .any(|k| iv.contains(base + f64::from(k) * TAU))
}

/// Exact modular test: smallest family member `>= psi_min`, then compare with `psi_max`.
pub fn contains_mod_tau(family: CriticalAngle, iv: &AngleInterval) -> bool {
    let base = family.base();
    let k = ((iv.psi_min - base) / TAU).ceil();
    // the rounded quotient can be off by one period either way; every
    // candidate is rebuilt from its own offset so it matches `scan_hits` bitwise
    [k - 1.0, k, k + 1.0]
        .into_iter()
        .map(|j| base + j * TAU)
        .find(|&theta| theta >= iv.psi_min)
        .is_some_and(|theta| theta <= iv.psi_max)
}
