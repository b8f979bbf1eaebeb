//! Linear relaxations of a speed-scaled heading arc.
//!
//! A body moving at fixed speed `s` with heading ψ ∈ [ψ_min, ψ_max] has velocity
//! `(s cos ψ, s sin ψ)`. Linear and mixed-integer engines cannot carry the sine
//! and cosine terms, so this crate derives half-planes that enclose them:
//!
//! - `arc`: tight axis-aligned box of the arc (critical-angle scan).
//! - `rotated`: four support-function faces of the rotated turn dynamics.
//! - `lines` + `trapezoid`: tangent/secant lines and the polygon they cut out.
//! - `sector`: split a heading range into sectors and relax each one.
//!
//! Everything is pure and allocation-light; callers register the returned
//! coefficients with their own solver.

pub mod arc;
pub mod cfg;
pub mod error;
pub mod lines;
pub mod rotated;
pub mod sector;
pub mod trapezoid;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use arc::{
    arc_bounding_box, arc_bounding_box_checked, arc_bounding_box_exact, AngleInterval,
    BoundingBox, CriticalAngle,
};
pub use cfg::{RelaxCfg, SupportRule};
pub use error::RelaxError;
pub use lines::{polar_point, secant_line, tangent_line, to_polar, Line2};
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
pub use rotated::{rotated_faces, HalfPlane, RotatedFaces, RotationFrame, Sense};
pub use sector::{relax_sectors, split_heading_range, SectorRelaxation};
pub use trapezoid::{arc_polygon, ArcPolygon};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::arc::{arc_bounding_box, arc_bounding_box_checked, AngleInterval, BoundingBox};
    pub use crate::cfg::{RelaxCfg, SupportRule};
    pub use crate::error::RelaxError;
    pub use crate::lines::{polar_point, secant_line, tangent_line, Line2};
    pub use crate::rotated::{rotated_faces, HalfPlane, RotatedFaces, RotationFrame, Sense};
    pub use crate::sector::{relax_sectors, split_heading_range};
    pub use crate::trapezoid::{arc_polygon, ArcPolygon};
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
