use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lq",
    version,
    about = "Longevity Quotient (LQ) calculator: 20 biomarkers scored onto a 300-850 scale"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file to use instead of ./lq.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single record
    Score(ScoreCommand),
    /// Score every row of a CSV file
    Batch(BatchCommand),
    /// List the input variables and their reference parameters
    Vars,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PresetArg {
    Typical,
    HighPerformer,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CacMethodArg {
    Logarithmic,
    Piecewise,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// TOML or JSON file keyed by variable id
    #[arg(short, long, conflicts_with = "preset")]
    pub input: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub preset: Option<PresetArg>,

    /// Set or override one field, e.g. --set cac=120
    #[arg(long = "set", value_name = "ID=VALUE", value_parser = parse_assignment)]
    pub overrides: Vec<(String, f64)>,

    /// High-intensity activity minutes per week (derives MVPA)
    #[arg(long, requires = "oura_medium", allow_negative_numbers = true)]
    pub oura_high: Option<f64>,

    /// Medium-intensity activity minutes per week (derives MVPA)
    #[arg(long, requires = "oura_high", allow_negative_numbers = true)]
    pub oura_medium: Option<f64>,

    /// REM minutes (derives REM %)
    #[arg(long, requires = "total_sleep_minutes", allow_negative_numbers = true)]
    pub rem_minutes: Option<f64>,

    /// Total sleep minutes (derives REM %)
    #[arg(long, requires = "rem_minutes", allow_negative_numbers = true)]
    pub total_sleep_minutes: Option<f64>,

    #[arg(long, value_enum)]
    pub cac_method: Option<CacMethodArg>,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct BatchCommand {
    pub input: PathBuf,

    /// Output CSV (defaults to <input>.lq.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub cac_method: Option<CacMethodArg>,

    /// Score rows one at a time instead of in parallel
    #[arg(long)]
    pub sequential: bool,
}

fn parse_assignment(s: &str) -> Result<(String, f64), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=VALUE, got '{s}'"))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value for {}: {e}", key.trim()))?;
    Ok((key.trim().to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_assignment_splits_key_and_value() {
        assert_eq!(
            parse_assignment("bmd_t=-1.2").expect("assignment should parse"),
            ("bmd_t".to_string(), -1.2)
        );
        assert!(parse_assignment("cac").is_err());
        assert!(parse_assignment("cac=lots").is_err());
    }

    #[test]
    fn score_accepts_repeated_overrides() {
        let cli = Cli::try_parse_from([
            "lq",
            "score",
            "--preset",
            "high-performer",
            "--set",
            "cac=10",
            "--set",
            "grip=60",
            "--cac-method",
            "piecewise",
        ])
        .expect("arguments should parse");
        let Commands::Score(cmd) = cli.command else {
            panic!("expected score command");
        };
        assert!(matches!(cmd.preset, Some(PresetArg::HighPerformer)));
        assert_eq!(cmd.overrides.len(), 2);
        assert!(matches!(cmd.cac_method, Some(CacMethodArg::Piecewise)));
    }

    #[test]
    fn helper_minutes_must_come_in_pairs() {
        let result = Cli::try_parse_from(["lq", "score", "--oura-high", "100"]);
        assert!(result.is_err());
    }
}
