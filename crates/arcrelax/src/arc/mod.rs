//! Arc bounding boxes (critical-angle scan + speed scaling).
//!
//! Purpose
//! - Enclose `{(s cos θ, s sin θ) : θ ∈ [ψ_min, ψ_max]}` in its tightest
//!   axis-aligned box. Seeds come from the endpoints; each of the four
//!   circle-extremal angle families clamps a bound to ±1 when one of its
//!   members falls inside the interval.
//!
//! Two containment tests
//! - `scan`: the bounded offset scan `base + 2πk`, `k ∈ -2..=2`. Exact for
//!   endpoints in `[SCAN_WINDOW_LO, SCAN_WINDOW_HI]`; `arc_bounding_box_checked`
//!   enforces that window.
//! - `exact`: modular containment, valid for any finite interval.
//!
//! Code cross-refs: `rotated::rotated_faces` consumes `BoundingBox`.

mod bbox;
mod scan;
mod types;

pub use bbox::{arc_bounding_box, arc_bounding_box_checked, arc_bounding_box_exact};
pub use scan::{contains_mod_tau, scan_hits, CriticalAngle};
pub use types::{AngleInterval, BoundingBox};

#[cfg(test)]
mod tests;
