use crate::scoring::reference::{Direction, ReferenceTable};
use crate::types::variable::{NormalizationKind, Variable};

/// Plain-text listing of the variables and how each one is normalized.
pub fn render_catalogue(table: &ReferenceTable) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<14} {:<28} {:<26} {}\n",
        "id", "measure", "normalization", "range"
    ));
    for variable in Variable::ORDER {
        let normalization = match variable.kind() {
            NormalizationKind::ZScore => match table.lookup(variable) {
                Ok(spec) => format!(
                    "z mean={} sd={} {}",
                    spec.mean,
                    spec.standard_deviation,
                    match spec.direction {
                        Direction::HigherIsBetter => "↑",
                        Direction::LowerIsBetter => "↓",
                    }
                ),
                Err(_) => "z (unregistered)".to_string(),
            },
            NormalizationKind::Cac => "cac ln|piecewise".to_string(),
            NormalizationKind::Ratio { full_scale } => format!("ratio /{full_scale}"),
        };
        let range = variable
            .bounds()
            .map(|(lo, hi)| format!("{lo}–{hi}"))
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{:<14} {:<28} {:<26} {}\n",
            variable.id(),
            variable.label(),
            normalization,
            range
        ));
    }
    output
}
