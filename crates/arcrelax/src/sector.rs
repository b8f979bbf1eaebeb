//! Heading-range discretisation and per-sector relaxations.
//!
//! A continuous heading range is split into equal sectors; each sector gets its
//! arc box, the four rotated faces, and (when the span allows) the
//! tangent/chord polygon. A sector whose polygon cannot be built is kept with
//! `polygon: None` so one bad sector does not sink the batch.

use nalgebra::Vector2;

use crate::arc::{arc_bounding_box_checked, AngleInterval, BoundingBox};
use crate::cfg::{RelaxCfg, MAX_SECTORS};
use crate::error::RelaxError;
use crate::rotated::{rotated_faces, RotatedFaces, RotationFrame};
use crate::trapezoid::{arc_polygon, ArcPolygon};

#[derive(Clone, Debug, PartialEq)]
pub struct SectorRelaxation {
    pub interval: AngleInterval,
    pub bbox: BoundingBox,
    pub faces: RotatedFaces,
    pub polygon: Option<ArcPolygon>,
}

impl SectorRelaxation {
    /// Velocity `v` lies in the sector's box and, when present, its polygon
    /// (slack `cfg.eps_feas`).
    pub fn admits_velocity(&self, v: Vector2<f64>, cfg: &RelaxCfg) -> bool {
        self.bbox.contains(v, cfg.eps_feas)
            && self
                .polygon
                .as_ref()
                .is_none_or(|p| p.contains(v, cfg.eps_feas))
    }
}

/// Split `range` into `count` equal, adjacent sectors (`1..=MAX_SECTORS`).
pub fn split_heading_range(
    range: AngleInterval,
    count: usize,
) -> Result<Vec<AngleInterval>, RelaxError> {
    if count == 0 {
        return Err(RelaxError::TooFewSamples { got: 0, min: 1 });
    }
    if count > MAX_SECTORS {
        return Err(RelaxError::TooManySectors {
            got: count,
            max: MAX_SECTORS,
        });
    }
    let range = AngleInterval::try_new(range.psi_min, range.psi_max)?;
    let cuts = range.sample(count + 1);
    Ok(cuts
        .windows(2)
        .map(|w| AngleInterval::new(w[0], w[1]))
        .collect())
}

/// Relax every sector of `range` at the given speed and heading delta.
pub fn relax_sectors(
    range: AngleInterval,
    count: usize,
    speed: f64,
    frame: &RotationFrame,
    cfg: &RelaxCfg,
) -> Result<Vec<SectorRelaxation>, RelaxError> {
    let sectors = split_heading_range(range, count)?;
    if !frame.is_unit(cfg.eps_feas) {
        tracing::warn!(cos = frame.cos, sin = frame.sin, "rotation frame is not unit-norm");
    }
    let mut out = Vec::with_capacity(sectors.len());
    for (idx, iv) in sectors.into_iter().enumerate() {
        let bbox = arc_bounding_box_checked(iv, speed)?;
        let faces = rotated_faces(frame, &bbox, cfg);
        let polygon = match arc_polygon(iv, speed, cfg.tangent_samples) {
            Ok(p) => Some(p),
            Err(err) => {
                tracing::warn!(sector = idx, %err, "skipping arc polygon");
                None
            }
        };
        out.push(SectorRelaxation {
            interval: iv,
            bbox,
            faces,
            polygon,
        });
    }
    tracing::debug!(sectors = out.len(), speed, "relaxed heading range");
    Ok(out)
}
