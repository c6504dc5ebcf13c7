use crate::scoring::cac::CacMethod;
use crate::types::record::{NormalizedRecord, RawInputRecord};
use chrono::Utc;
use serde::Serialize;

/// A scored record together with the inputs and settings that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub tool: String,
    pub version: String,
    pub generated_at: String,
    pub cac_method: CacMethod,
    pub inputs: RawInputRecord,
    #[serde(flatten)]
    pub result: NormalizedRecord,
}

impl ScoreReport {
    pub fn new(inputs: RawInputRecord, result: NormalizedRecord, cac_method: CacMethod) -> Self {
        Self {
            tool: "lq".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            cac_method,
            inputs,
            result,
        }
    }
}
