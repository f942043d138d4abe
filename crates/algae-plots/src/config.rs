use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Model parameters for the phase-plane equilibrium overlay.
///
/// `beta` and `Q` are derived from `beta_n0` and `q_n0` against the
/// trajectory's initial nutrient level on every call; nothing here is cached.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PhasePlaneParams {
    /// Carried with the model parameters; the overlay does not use it.
    pub alpha: f64,
    pub rho: f64,
    pub gamma: f64,
    pub sigma: f64,
    #[serde(rename = "betaN0")]
    pub beta_n0: f64,
    #[serde(rename = "QN0")]
    pub q_n0: f64,

    #[serde(default)]
    pub nullcline_domain: NullclineDomain,
}

impl Default for PhasePlaneParams {
    fn default() -> Self {
        Self {
            alpha: 0.0,
            rho: 1e-3,
            gamma: 0.0,
            sigma: 0.1,
            beta_n0: 0.1,
            q_n0: 7.5e-3,
            nullcline_domain: NullclineDomain::default(),
        }
    }
}

/// Sample points used for the P-nullcline curve.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum NullclineDomain {
    /// Reuse the trajectory's own N(t) samples, in time order.
    #[default]
    TrajectorySamples,
    /// Evenly spaced grid between min N(t) and max N(t).
    Linspace { points: usize },
}

impl FromStr for NullclineDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.split_once(':') {
            None if lower == "samples" => Ok(NullclineDomain::TrajectorySamples),
            Some(("linspace", n)) => n
                .trim()
                .parse::<usize>()
                .map(|points| NullclineDomain::Linspace { points })
                .map_err(|e| format!("Invalid linspace point count '{}': {}", n, e)),
            _ => Err(format!(
                "Unknown nullcline domain: {}. Expected 'samples' or 'linspace:<points>'",
                s
            )),
        }
    }
}

/// Size and spacing of the multi-panel figure.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FigureConfig {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Gap between neighbouring panels as a fraction of the figure width.
    pub horizontal_spacing: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        // 10x3 inches at 100 dpi
        Self {
            width: 1000,
            height: 300,
            horizontal_spacing: 0.1,
        }
    }
}
