pub mod cac;
pub mod cdf;
pub mod ratio;
pub mod reference;
pub mod zscore;

use crate::error::Result;
use crate::types::record::{NormalizedRecord, RawInputRecord};
use crate::types::variable::{NormalizationKind, Variable, VARIABLE_COUNT};
use cac::CacMethod;
use reference::ReferenceTable;
use tracing::debug;

pub const LQ_MIN: f64 = 300.0;
pub const LQ_MAX: f64 = 850.0;
pub const LQ_SLOPE: f64 = 5.5;

pub fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

pub fn lq_from_composite(composite: f64) -> f64 {
    (LQ_MIN + LQ_SLOPE * composite).clamp(LQ_MIN, LQ_MAX)
}

/// Applies every per-variable normalizer and aggregates the results.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    table: &'a ReferenceTable,
    cac_method: CacMethod,
}

impl<'a> Scorer<'a> {
    pub fn new(table: &'a ReferenceTable, cac_method: CacMethod) -> Self {
        Self { table, cac_method }
    }

    pub fn cac_method(&self) -> CacMethod {
        self.cac_method
    }

    pub fn score(&self, raw: &RawInputRecord) -> Result<NormalizedRecord> {
        let mut scores = [0.0; VARIABLE_COUNT];
        for variable in Variable::ORDER {
            let value = raw.get(variable);
            scores[variable.index()] = match variable.kind() {
                NormalizationKind::ZScore => {
                    zscore::normalize_z(value, self.table.lookup(variable)?)
                }
                NormalizationKind::Cac => cac::normalize_cac(value, self.cac_method)?,
                NormalizationKind::Ratio { full_scale } => {
                    ratio::normalize_ratio(value, full_scale)
                }
            };
        }

        let composite = scores.iter().sum::<f64>() / VARIABLE_COUNT as f64;
        let lq = lq_from_composite(composite);
        debug!(
            composite,
            lq,
            cac_method = %self.cac_method,
            "scored record"
        );
        Ok(NormalizedRecord::new(scores, composite, lq))
    }
}

pub fn compute_score(
    raw: &RawInputRecord,
    table: &ReferenceTable,
    cac_method: CacMethod,
) -> Result<NormalizedRecord> {
    Scorer::new(table, cac_method).score(raw)
}
