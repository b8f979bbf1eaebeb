use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use arcrelax::{
    arc_bounding_box_checked, arc_bounding_box_exact, arc_polygon, relax_sectors, rotated_faces,
    AngleInterval, RotationFrame,
};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod provenance;
mod render;

use config::{CfgFile, RuleName};

#[derive(Parser)]
#[command(name = "arcrelax")]
#[command(about = "Linear relaxations of a speed-scaled heading arc (angles in degrees)")]
struct Cmd {
    /// JSON file with relaxation settings; flags take precedence
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Copy)]
struct Sector {
    #[arg(long, allow_hyphen_values = true)]
    min_deg: f64,
    #[arg(long, allow_hyphen_values = true)]
    max_deg: f64,
}

#[derive(Args)]
struct CfgFlags {
    #[arg(long)]
    forward_speed: Option<f64>,
    #[arg(long, value_enum)]
    rule: Option<RuleName>,
    #[arg(long)]
    samples: Option<usize>,
}

impl CfgFlags {
    fn overrides(&self) -> CfgFile {
        CfgFile {
            forward_speed: self.forward_speed,
            support: self.rule,
            eps_feas: None,
            tangent_samples: self.samples,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Axis-aligned box of the speed-scaled arc
    Bbox {
        #[command(flatten)]
        sector: Sector,
        #[arg(long)]
        speed: f64,
        /// Use modular containment (no scan-window limit)
        #[arg(long)]
        exact: bool,
    },
    /// Four rotated half-planes for one sector and heading delta
    Faces {
        #[command(flatten)]
        sector: Sector,
        #[arg(long)]
        speed: f64,
        #[arg(long, allow_hyphen_values = true)]
        turn_deg: f64,
        #[command(flatten)]
        flags: CfgFlags,
    },
    /// Tangent/chord polygon of one sector
    Polygon {
        #[command(flatten)]
        sector: Sector,
        #[arg(long)]
        radius: f64,
        #[command(flatten)]
        flags: CfgFlags,
    },
    /// Split a heading range into sectors and relax each
    Sectors {
        #[command(flatten)]
        range: Sector,
        #[arg(long)]
        count: usize,
        #[arg(long)]
        speed: f64,
        #[arg(long, allow_hyphen_values = true)]
        turn_deg: f64,
        #[command(flatten)]
        flags: CfgFlags,
        /// Write JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let config = cmd.config.as_deref();
    match cmd.action {
        Action::Bbox {
            sector,
            speed,
            exact,
        } => bbox(sector, speed, exact),
        Action::Faces {
            sector,
            speed,
            turn_deg,
            flags,
        } => faces(sector, speed, turn_deg, config, &flags),
        Action::Polygon {
            sector,
            radius,
            flags,
        } => polygon(sector, radius, config, &flags),
        Action::Sectors {
            range,
            count,
            speed,
            turn_deg,
            flags,
            out,
        } => sectors(range, count, speed, turn_deg, config, &flags, out),
        Action::Report => report(),
    }
}

fn interval(s: Sector) -> Result<AngleInterval> {
    AngleInterval::from_degrees(s.min_deg, s.max_deg)
        .with_context(|| format!("sector [{}°, {}°]", s.min_deg, s.max_deg))
}

fn print(v: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(v)?);
    Ok(())
}

fn bbox(sector: Sector, speed: f64, exact: bool) -> Result<()> {
    let iv = interval(sector)?;
    tracing::info!(psi_min = iv.psi_min, psi_max = iv.psi_max, speed, exact, "bbox");
    let bb = if exact {
        arc_bounding_box_exact(iv, speed)?
    } else {
        arc_bounding_box_checked(iv, speed)?
    };
    print(&render::bbox(&bb))
}

fn faces(
    sector: Sector,
    speed: f64,
    turn_deg: f64,
    config: Option<&Path>,
    flags: &CfgFlags,
) -> Result<()> {
    let cfg = config::resolve(config, &flags.overrides())?;
    let iv = interval(sector)?;
    tracing::info!(psi_min = iv.psi_min, psi_max = iv.psi_max, speed, turn_deg, "faces");
    let bb = arc_bounding_box_checked(iv, speed)?;
    let frame = RotationFrame::from_angle(turn_deg.to_radians());
    let f = rotated_faces(&frame, &bb, &cfg);
    print(&json!({
        "bbox": render::bbox(&bb),
        "faces": render::faces(&f),
        "forward_speed": cfg.forward_speed,
    }))
}

fn polygon(sector: Sector, radius: f64, config: Option<&Path>, flags: &CfgFlags) -> Result<()> {
    let cfg = config::resolve(config, &flags.overrides())?;
    let iv = interval(sector)?;
    tracing::info!(
        psi_min = iv.psi_min,
        psi_max = iv.psi_max,
        radius,
        samples = cfg.tangent_samples,
        "polygon"
    );
    let p = arc_polygon(iv, radius, cfg.tangent_samples)?;
    print(&render::polygon(&p))
}

fn sectors(
    range: Sector,
    count: usize,
    speed: f64,
    turn_deg: f64,
    config: Option<&Path>,
    flags: &CfgFlags,
    out: Option<PathBuf>,
) -> Result<()> {
    let cfg = config::resolve(config, &flags.overrides())?;
    let iv = interval(range)?;
    tracing::info!(psi_min = iv.psi_min, psi_max = iv.psi_max, count, speed, turn_deg, "sectors");
    let frame = RotationFrame::from_angle(turn_deg.to_radians());
    let relaxed = relax_sectors(iv, count, speed, &frame, &cfg)?;
    let doc = json!(relaxed.iter().map(render::sector).collect::<Vec<_>>());

    let Some(out) = out else {
        return print(&doc);
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(&out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let payload = provenance::Payload {
        command: "sectors",
        params: json!({
            "min_deg": range.min_deg,
            "max_deg": range.max_deg,
            "count": count,
            "speed": speed,
            "turn_deg": turn_deg,
            "forward_speed": cfg.forward_speed,
            "tangent_samples": cfg.tangent_samples,
        }),
    };
    let prov = provenance::write_sidecar(&out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote sectors");
    Ok(())
}

fn report() -> Result<()> {
    print(&json!({
        "code_rev": provenance::current_git_rev(),
        "arcrelax": arcrelax::VERSION,
        "params": {},
        "outputs": []
    }))
}
