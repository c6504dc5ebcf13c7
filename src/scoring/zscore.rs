use super::cdf::normal_cdf;
use super::clamp_score;
use super::reference::VariableSpec;

/// Percentile of the direction-signed z-score, scaled to [0, 100].
pub fn normalize_z(x: f64, spec: &VariableSpec) -> f64 {
    let z = spec.direction.sign() * ((x - spec.mean) / spec.standard_deviation);
    clamp_score(100.0 * normal_cdf(z))
}
