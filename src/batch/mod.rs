pub mod table;

use crate::error::Result;
use crate::input::InputRow;
use crate::scoring::Scorer;
use crate::types::record::NormalizedRecord;
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    Parallel,
    Sequential,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub scored: usize,
    pub failed: usize,
    pub input_sha256: String,
    pub output: PathBuf,
}

fn score_row(input: Result<InputRow>, scorer: &Scorer<'_>) -> Result<NormalizedRecord> {
    input.and_then(|row| row.resolve()).and_then(|raw| scorer.score(&raw))
}

/// Scores each row independently; the result at index `i` belongs to input row `i`.
pub fn score_rows(
    rows: Vec<Result<InputRow>>,
    scorer: &Scorer<'_>,
    execution: Execution,
) -> Vec<Result<NormalizedRecord>> {
    match execution {
        Execution::Parallel => rows
            .into_par_iter()
            .map(|row| score_row(row, scorer))
            .collect(),
        Execution::Sequential => rows
            .into_iter()
            .map(|row| score_row(row, scorer))
            .collect(),
    }
}

pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "batch".to_string());
    input.with_file_name(format!("{stem}.lq.csv"))
}

pub fn run_batch(
    input: &Path,
    output: &Path,
    scorer: &Scorer<'_>,
    execution: Execution,
) -> Result<BatchSummary> {
    let bytes = fs::read(input)?;
    let input_sha256 = sha256_hex(&bytes);
    let mut table = table::read_table(bytes.as_slice())?;
    info!(
        rows = table.rows.len(),
        cac_method = %scorer.cac_method(),
        ?execution,
        "scoring batch {}",
        input.display()
    );

    let inputs = table
        .rows
        .iter_mut()
        .map(|row| std::mem::replace(&mut row.input, Ok(InputRow::default())))
        .collect::<Vec<_>>();
    let outcomes = score_rows(inputs, scorer, execution);

    for (index, outcome) in outcomes.iter().enumerate() {
        if let Err(err) = outcome {
            warn!(row = index + 1, "row failed: {err}");
        }
    }

    let file = fs::File::create(output)?;
    table::write_table(std::io::BufWriter::new(file), &table, &outcomes)?;

    let failed = outcomes.iter().filter(|outcome| outcome.is_err()).count();
    let summary = BatchSummary {
        rows: outcomes.len(),
        scored: outcomes.len() - failed,
        failed,
        input_sha256,
        output: output.to_path_buf(),
    };
    info!(
        scored = summary.scored,
        failed = summary.failed,
        "wrote {}",
        output.display()
    );
    Ok(summary)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}
