use super::cdf::normal_cdf;
use super::clamp_score;
use crate::error::{LqError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Transform applied to the Coronary Artery Calcium score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacMethod {
    /// Φ(-(ln(cac + 1) - ln 100)); 99 Agatston scores 50.
    #[default]
    Logarithmic,
    /// Banded linear scale over 0..400 Agatston.
    Piecewise,
}

impl CacMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            CacMethod::Logarithmic => "logarithmic",
            CacMethod::Piecewise => "piecewise",
        }
    }
}

impl fmt::Display for CacMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacMethod {
    type Err = LqError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "logarithmic" | "ln" => Ok(CacMethod::Logarithmic),
            "piecewise" => Ok(CacMethod::Piecewise),
            _ => Err(LqError::InvalidMethod(s.to_string())),
        }
    }
}

pub fn normalize_cac(value: f64, method: CacMethod) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(LqError::InvalidInput(format!(
            "cac must be a non-negative Agatston score (got {value})"
        )));
    }
    Ok(match method {
        CacMethod::Logarithmic => logarithmic(value),
        CacMethod::Piecewise => piecewise(value),
    })
}

fn logarithmic(value: f64) -> f64 {
    clamp_score(100.0 * normal_cdf(-((value + 1.0).ln() - 100.0_f64.ln())))
}

// The bands meet discontinuously at 100 (80 from the left, 50 from the right).
fn piecewise(value: f64) -> f64 {
    if value == 0.0 {
        100.0
    } else if value >= 400.0 {
        0.0
    } else if value <= 100.0 {
        clamp_score(100.0 - 0.2 * value)
    } else {
        clamp_score(50.0 - 0.1 * (value - 100.0))
    }
}
