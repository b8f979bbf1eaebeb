//! Relaxation configuration and fixed scan constants.
//!
//! Policy
//! - The scan constants are fixed; they define which intervals the bounding-box
//!   scan handles exactly. Everything a caller may reasonably tune lives in
//!   `RelaxCfg`.

use std::f64::consts::{PI, TAU};

/// Integer offsets `k` tried for each critical-angle family (`base + 2πk`).
pub(crate) const SCAN_OFFSETS: std::ops::RangeInclusive<i32> = -2..=2;

/// Lowest endpoint the offset scan supports exactly.
pub const SCAN_WINDOW_LO: f64 = -2.0 * TAU;
/// Highest endpoint the offset scan supports exactly.
pub const SCAN_WINDOW_HI: f64 = 2.0 * TAU;

/// Widest interval accepted by the trapezoid relaxation (exclusive).
pub(crate) const MAX_POLYGON_SPAN: f64 = PI;

/// Upper bound on the sector count of one heading range.
pub const MAX_SECTORS: usize = 1 << 20;

/// How support-function bounds over a box edge are evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SupportRule {
    /// `max(k·lo, k·hi)` / `min(k·lo, k·hi)` without branching.
    #[default]
    Products,
    /// Pick the edge by the sign of `k`.
    SignBranch,
}

/// Relaxation configuration.
#[derive(Clone, Copy, Debug)]
pub struct RelaxCfg {
    /// Nominal forward-speed constant added to the x-direction faces.
    pub forward_speed: f64,
    pub support: SupportRule,
    /// Slack for cfg-driven checks: `SectorRelaxation::admits_velocity` and the
    /// unit-norm check on the rotation frame in `relax_sectors`.
    pub eps_feas: f64,
    /// Tangent sample angles per sector, endpoints included.
    pub tangent_samples: usize,
}

impl Default for RelaxCfg {
    fn default() -> Self {
        Self {
            forward_speed: 200.0,
            support: SupportRule::Products,
            eps_feas: 1e-9,
            tangent_samples: 3,
        }
    }
}
