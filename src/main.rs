mod batch;
mod cli;
mod config;
mod error;
mod input;
mod logging;
mod report;
mod scoring;
mod types;

use crate::error::LqError;
use crate::input::presets::Preset;
use crate::input::InputRow;
use crate::scoring::cac::CacMethod;
use crate::scoring::reference::ReferenceTable;
use crate::scoring::Scorer;
use crate::types::report::ScoreReport;
use clap::Parser;
use tracing::info;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn cac_method_from(arg: cli::CacMethodArg) -> CacMethod {
    match arg {
        cli::CacMethodArg::Logarithmic => CacMethod::Logarithmic,
        cli::CacMethodArg::Piecewise => CacMethod::Piecewise,
    }
}

fn build_input(cmd: &cli::ScoreCommand) -> Result<InputRow, LqError> {
    let mut row = match (&cmd.input, cmd.preset) {
        (Some(path), _) => input::load_file(path)?,
        (None, Some(cli::PresetArg::Typical)) => InputRow::from_record(&Preset::Typical.record()),
        (None, Some(cli::PresetArg::HighPerformer)) => {
            InputRow::from_record(&Preset::HighPerformer.record())
        }
        (None, None) => InputRow::default(),
    };

    if let (Some(high), Some(medium)) = (cmd.oura_high, cmd.oura_medium) {
        row.use_activity_minutes(high, medium);
    }
    if let (Some(rem), Some(total)) = (cmd.rem_minutes, cmd.total_sleep_minutes) {
        row.use_sleep_minutes(rem, total);
    }
    for (key, value) in &cmd.overrides {
        row.set(key, *value)?;
    }
    Ok(row)
}

fn run() -> Result<i32, LqError> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?;
    let table = ReferenceTable::lq_v1_1();

    match cli.command {
        cli::Commands::Score(cmd) => {
            let cac_method = match cmd.cac_method {
                Some(arg) => cac_method_from(arg),
                None => loaded.cac_method()?,
            };
            let output_format = match cmd.format {
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                None => loaded.output_format()?,
            };

            let raw = build_input(&cmd)?.resolve()?;
            let result = scoring::compute_score(&raw, &table, cac_method)?;
            info!(lq = result.lq(), "scored single record");

            let score_report = ScoreReport::new(raw, result, cac_method);
            let rendered = report::render(&score_report, output_format, loaded.precision())?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            if !cmd.input.exists() {
                return Err(LqError::InvalidInput(format!(
                    "path does not exist: {}",
                    cmd.input.display()
                )));
            }
            let cac_method = match cmd.cac_method {
                Some(arg) => cac_method_from(arg),
                None => loaded.cac_method()?,
            };
            let execution = if cmd.sequential || !loaded.parallel_batch() {
                batch::Execution::Sequential
            } else {
                batch::Execution::Parallel
            };
            let output = cmd
                .output
                .clone()
                .unwrap_or_else(|| batch::default_output_path(&cmd.input));

            let scorer = Scorer::new(&table, cac_method);
            let summary = batch::run_batch(&cmd.input, &output, &scorer, execution)?;

            println!(
                "batch: {} rows, {} scored, {} failed",
                summary.rows, summary.scored, summary.failed
            );
            println!("input sha256: {}", summary.input_sha256);
            println!("output: {}", summary.output.display());

            if summary.failed > 0 {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Vars => {
            print!("{}", report::catalogue::render_catalogue(&table));
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
