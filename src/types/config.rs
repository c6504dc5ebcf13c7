use crate::error::{LqError, Result};
use crate::report::OutputFormat;
use crate::scoring::cac::CacMethod;
use serde::Deserialize;

pub const DEFAULT_PRECISION: usize = 2;
pub const MAX_PRECISION: u32 = 12;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LqConfig {
    pub scoring: Option<ScoringConfig>,
    pub batch: Option<BatchConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub cac_method: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    pub parallel: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub precision: Option<u32>,
}

impl LqConfig {
    pub fn cac_method(&self) -> Result<CacMethod> {
        match self
            .scoring
            .as_ref()
            .and_then(|scoring| scoring.cac_method.as_deref())
        {
            Some(method) => method.parse(),
            None => Ok(CacMethod::default()),
        }
    }

    pub fn parallel_batch(&self) -> bool {
        self.batch
            .as_ref()
            .and_then(|batch| batch.parallel)
            .unwrap_or(true)
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        match self
            .output
            .as_ref()
            .and_then(|output| output.format.as_deref())
        {
            Some(format) => format.parse(),
            None => Ok(OutputFormat::Md),
        }
    }

    pub fn precision(&self) -> usize {
        self.output
            .as_ref()
            .and_then(|output| output.precision)
            .map(|precision| precision as usize)
            .unwrap_or(DEFAULT_PRECISION)
    }

    pub fn validate(&self) -> Result<()> {
        self.cac_method()?;
        self.output_format()?;
        if let Some(precision) = self.output.as_ref().and_then(|output| output.precision) {
            if precision > MAX_PRECISION {
                return Err(LqError::ConfigParse(format!(
                    "output.precision must be between 0 and {MAX_PRECISION} (found {precision})"
                )));
            }
        }
        Ok(())
    }
}
