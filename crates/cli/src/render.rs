//! JSON views of relaxation outputs.

use arcrelax::{ArcPolygon, BoundingBox, HalfPlane, Line2, RotatedFaces, SectorRelaxation, Sense};
use serde_json::{json, Value};

pub fn bbox(bb: &BoundingBox) -> Value {
    json!({
        "vx_lower": bb.vx_lower,
        "vx_upper": bb.vx_upper,
        "vy_lower": bb.vy_lower,
        "vy_upper": bb.vy_upper,
    })
}

pub fn half_plane(hp: &HalfPlane) -> Value {
    let sense = match hp.sense {
        Sense::Le => "<=",
        Sense::Ge => ">=",
    };
    json!({
        "coeffs": [hp.coeffs.x, hp.coeffs.y, hp.coeffs.z],
        "sense": sense,
        "scalar": hp.c,
    })
}

pub fn faces(f: &RotatedFaces) -> Value {
    let mut obj = serde_json::Map::new();
    for (name, hp) in f.iter() {
        obj.insert(name.to_string(), half_plane(hp));
    }
    Value::Object(obj)
}

pub fn line(l: &Line2) -> Value {
    json!([l.a, l.b, l.c])
}

pub fn polygon(p: &ArcPolygon) -> Value {
    json!({
        "angles": p.angles,
        "tangents_le_zero": p.tangents.iter().map(line).collect::<Vec<_>>(),
        "chord_ge_zero": line(&p.chord),
        "vertices": p.vertices().iter().map(|v| [v.x, v.y]).collect::<Vec<_>>(),
        "outer_gap": p.outer_gap(),
        "inner_gap": p.inner_gap(),
    })
}

pub fn sector(s: &SectorRelaxation) -> Value {
    json!({
        "psi_min": s.interval.psi_min,
        "psi_max": s.interval.psi_max,
        "bbox": bbox(&s.bbox),
        "faces": faces(&s.faces),
        "polygon": s.polygon.as_ref().map(polygon),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcrelax::{arc_bounding_box, rotated_faces, RelaxCfg, RotationFrame};

    #[test]
    fn faces_are_keyed_by_name() {
        let bb = arc_bounding_box(0.0, 0.2, 10.0);
        let f = rotated_faces(&RotationFrame::new(1.0, 0.0), &bb, &RelaxCfg::default());
        let v = faces(&f);
        assert_eq!(v["xup"]["sense"], "<=");
        assert_eq!(v["ylo"]["sense"], ">=");
        assert_eq!(v["xlo"]["coeffs"][2], -1.0);
    }
}
