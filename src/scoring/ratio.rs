use super::clamp_score;

pub fn normalize_ratio(x: f64, full_scale: f64) -> f64 {
    clamp_score((x / full_scale) * 100.0)
}
