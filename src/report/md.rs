use crate::types::report::ScoreReport;

pub fn to_markdown(report: &ScoreReport, precision: usize) -> String {
    let mut output = String::new();
    output.push_str("# Longevity Quotient Report\n\n");
    output.push_str(&format!(
        "LQ: {:.prec$}\n\nComposite: {:.prec$}\n\nCAC method: {}\n\n",
        report.result.lq(),
        report.result.composite(),
        report.cac_method,
        prec = precision
    ));

    output.push_str("## Sub-scores\n\n");
    output.push_str("| variable | measure | raw | score |\n");
    output.push_str("|---|---|---:|---:|\n");
    for ((variable, raw), (_, score)) in report.inputs.iter().zip(report.result.iter()) {
        output.push_str(&format!(
            "| {} | {} | {} | {:.prec$} |\n",
            variable.id(),
            variable.label(),
            raw,
            score,
            prec = precision
        ));
    }

    output
}
