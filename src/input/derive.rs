use crate::error::{LqError, Result};

/// Weekly MVPA minutes are capped at this value when derived from activity minutes.
pub const MVPA_CAP: f64 = 1000.0;

/// MVPA from wearable activity minutes: high counts fully, medium counts half.
pub fn mvpa_from_activity(high_minutes: f64, medium_minutes: f64) -> f64 {
    MVPA_CAP.min(high_minutes + 0.5 * medium_minutes)
}

/// REM share of total sleep time, as a percentage.
pub fn rem_pct_from_sleep(rem_minutes: f64, total_sleep_minutes: f64) -> Result<f64> {
    if total_sleep_minutes.is_nan() || total_sleep_minutes <= 0.0 {
        return Err(LqError::InvalidInput(format!(
            "total_sleep_minutes must be positive (got {total_sleep_minutes})"
        )));
    }
    Ok(100.0 * rem_minutes / total_sleep_minutes)
}
