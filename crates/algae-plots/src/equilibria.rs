//! Equilibrium curves for the phase-plane overlay.
//!
//! With beta = betaN0 / N(0) and Q = QN0 * N(0), the P-nullcline is
//! P = Q / (rho * beta * N) and the second equilibrium condition is the
//! horizontal line N = (gamma + sigma) / beta. No guard against zero
//! divisors: a zero N(0) or N(t) produces inf/NaN, which is returned as-is.
use itertools_num::linspace;
use ndarray::ArrayView1;

use crate::config::{NullclineDomain, PhasePlaneParams};

/// Parameters derived from the trajectory's initial nutrient level.
#[derive(Debug, Clone, PartialEq)]
pub struct EquilibriumModel {
    pub beta: f64,
    pub q: f64,
    pub rho: f64,
    pub gamma: f64,
    pub sigma: f64,
}

impl EquilibriumModel {
    pub fn from_initial_nutrient(params: &PhasePlaneParams, n0: f64) -> Self {
        Self {
            beta: params.beta_n0 / n0,
            q: params.q_n0 * n0,
            rho: params.rho,
            gamma: params.gamma,
            sigma: params.sigma,
        }
    }

    /// P value on the nullcline for nutrient level `n`.
    pub fn nullcline_p(&self, n: f64) -> f64 {
        self.q / (self.rho * self.beta * n)
    }

    /// Height of the horizontal equilibrium line.
    pub fn horizontal_level(&self) -> f64 {
        (self.gamma + self.sigma) / self.beta
    }

    /// Nullcline as `(p, n)` series over the requested domain.
    pub fn nullcline(
        &self,
        n_samples: ArrayView1<'_, f64>,
        domain: NullclineDomain,
    ) -> (Vec<f64>, Vec<f64>) {
        let n: Vec<f64> = match domain {
            NullclineDomain::TrajectorySamples => n_samples.to_vec(),
            NullclineDomain::Linspace { points } => {
                let lo = n_samples.iter().copied().fold(f64::INFINITY, f64::min);
                let hi = n_samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                linspace(lo, hi, points).collect()
            }
        };
        let p = n.iter().map(|&v| self.nullcline_p(v)).collect();
        (p, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn derived_parameters_with_defaults() {
        let model = EquilibriumModel::from_initial_nutrient(&PhasePlaneParams::default(), 5.0);
        assert_eq!(model.beta, 0.1 / 5.0);
        assert_eq!(model.q, 7.5e-3 * 5.0);
        assert_eq!(model.horizontal_level(), 0.1 / (0.1 / 5.0));
    }

    #[test]
    fn zero_initial_nutrient_is_not_guarded() {
        let model = EquilibriumModel::from_initial_nutrient(&PhasePlaneParams::default(), 0.0);
        assert!(model.beta.is_infinite());
        assert_eq!(model.q, 0.0);
        assert_eq!(model.horizontal_level(), 0.0);
        assert!(model.nullcline_p(0.0).is_nan());
    }

    #[test]
    fn linspace_domain_spans_sample_range() {
        let model = EquilibriumModel::from_initial_nutrient(&PhasePlaneParams::default(), 2.0);
        let samples = array![3.0, 1.0, 2.0];
        let (p, n) = model.nullcline(samples.view(), NullclineDomain::Linspace { points: 5 });
        assert_eq!(n.len(), 5);
        assert_eq!(p.len(), 5);
        assert_eq!(n[0], 1.0);
        assert_eq!(n[4], 3.0);
    }

    #[test]
    fn sample_domain_keeps_time_order() {
        let model = EquilibriumModel::from_initial_nutrient(&PhasePlaneParams::default(), 2.0);
        let samples = array![3.0, 1.0, 2.0];
        let (_, n) = model.nullcline(samples.view(), NullclineDomain::TrajectorySamples);
        assert_eq!(n, vec![3.0, 1.0, 2.0]);
    }
}
