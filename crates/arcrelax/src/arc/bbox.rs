use super::scan::{contains_mod_tau, scan_hits, CriticalAngle};
use super::types::{AngleInterval, BoundingBox};
use crate::cfg::{SCAN_WINDOW_HI, SCAN_WINDOW_LO};
use crate::error::RelaxError;

/// Tightest box of the arc `speed · (cos θ, sin θ)`, θ ∈ [psi_min, psi_max].
///
/// Pre: `psi_min <= psi_max`, `speed > 0`. Not validated; endpoints outside
/// the scan window give a sound but possibly loose box.
/// Post: `lower <= upper` on both axes; a degenerate interval gives a point box.
pub fn arc_bounding_box(psi_min: f64, psi_max: f64, speed: f64) -> BoundingBox {
    bounding_box_with(&AngleInterval::new(psi_min, psi_max), speed, scan_hits)
}

/// `arc_bounding_box` with the interval and radius validated against the scan window.
pub fn arc_bounding_box_checked(
    iv: AngleInterval,
    speed: f64,
) -> Result<BoundingBox, RelaxError> {
    let iv = AngleInterval::try_new(iv.psi_min, iv.psi_max)?;
    check_speed(speed)?;
    if iv.psi_min < SCAN_WINDOW_LO || iv.psi_max > SCAN_WINDOW_HI {
        return Err(RelaxError::IntervalOutsideWindow {
            psi_min: iv.psi_min,
            psi_max: iv.psi_max,
            lo: SCAN_WINDOW_LO,
            hi: SCAN_WINDOW_HI,
        });
    }
    let bb = bounding_box_with(&iv, speed, scan_hits);
    tracing::debug!(psi_min = iv.psi_min, psi_max = iv.psi_max, speed, ?bb, "arc bbox");
    Ok(bb)
}

/// Modular-containment variant; valid for any finite interval.
pub fn arc_bounding_box_exact(iv: AngleInterval, speed: f64) -> Result<BoundingBox, RelaxError> {
    let iv = AngleInterval::try_new(iv.psi_min, iv.psi_max)?;
    check_speed(speed)?;
    Ok(bounding_box_with(&iv, speed, contains_mod_tau))
}

fn check_speed(speed: f64) -> Result<(), RelaxError> {
    if !speed.is_finite() {
        return Err(RelaxError::NonFinite);
    }
    if speed <= 0.0 {
        return Err(RelaxError::NonPositiveRadius(speed));
    }
    Ok(())
}

fn bounding_box_with<F>(iv: &AngleInterval, speed: f64, hits: F) -> BoundingBox
where
    F: Fn(CriticalAngle, &AngleInterval) -> bool,
{
    let (y_start, x_start) = iv.psi_min.sin_cos();
    let (y_end, x_end) = iv.psi_max.sin_cos();

    let mut vx_lower = x_start.min(x_end);
    let mut vx_upper = x_start.max(x_end);
    let mut vy_lower = y_start.min(y_end);
    let mut vy_upper = y_start.max(y_end);

    for family in CriticalAngle::ALL {
        if !hits(family, iv) {
            continue;
        }
        match family {
            CriticalAngle::XMax => vx_upper = 1.0,
            CriticalAngle::XMin => vx_lower = -1.0,
            CriticalAngle::YMax => vy_upper = 1.0,
            CriticalAngle::YMin => vy_lower = -1.0,
        }
    }

    BoundingBox {
        vx_lower: vx_lower * speed,
        vx_upper: vx_upper * speed,
        vy_lower: vy_lower * speed,
        vy_upper: vy_upper * speed,
    }
}
