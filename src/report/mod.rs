pub mod catalogue;
pub mod json;
pub mod md;

use crate::error::{LqError, Result};
use crate::types::report::ScoreReport;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl FromStr for OutputFormat {
    type Err = LqError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Md),
            other => Err(LqError::ConfigParse(format!(
                "unsupported output.format: {other} (use json|md)"
            ))),
        }
    }
}

pub fn render(report: &ScoreReport, format: OutputFormat, precision: usize) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(LqError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report, precision)),
    }
}
