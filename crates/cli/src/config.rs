//! Relaxation settings from a JSON file, overridden by flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use arcrelax::{RelaxCfg, SupportRule};
use clap::ValueEnum;
use serde::Deserialize;

/// Support rule as spelled on the command line and in config files.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RuleName {
    Products,
    SignBranch,
}

impl From<RuleName> for SupportRule {
    fn from(r: RuleName) -> Self {
        match r {
            RuleName::Products => SupportRule::Products,
            RuleName::SignBranch => SupportRule::SignBranch,
        }
    }
}

/// Optional overrides; absent keys keep `RelaxCfg::default()`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CfgFile {
    pub forward_speed: Option<f64>,
    pub support: Option<RuleName>,
    pub eps_feas: Option<f64>,
    pub tangent_samples: Option<usize>,
}

impl CfgFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_slice(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn apply(&self, mut cfg: RelaxCfg) -> RelaxCfg {
        if let Some(v) = self.forward_speed {
            cfg.forward_speed = v;
        }
        if let Some(r) = self.support {
            cfg.support = r.into();
        }
        if let Some(v) = self.eps_feas {
            cfg.eps_feas = v;
        }
        if let Some(n) = self.tangent_samples {
            cfg.tangent_samples = n;
        }
        cfg
    }
}

/// Defaults, then the config file (if any), then flag overrides.
pub fn resolve(path: Option<&Path>, flags: &CfgFile) -> Result<RelaxCfg> {
    let mut cfg = RelaxCfg::default();
    if let Some(p) = path {
        cfg = CfgFile::load(p)?.apply(cfg);
    }
    Ok(flags.apply(cfg))
}
