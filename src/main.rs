use std::process::ExitCode;

use anyhow::Context;

use spotbugs_report::cli::Cli;
use spotbugs_report::config::ConfigManager;
use spotbugs_report::error::FileNotFound;
use spotbugs_report::output::Output;
use spotbugs_report::parser;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("{:#}", error);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether any defect was classified as an error.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = ConfigManager::load(cli)?;

    // The parser reports unreadable input as a syntax failure; a missing
    // path gets its own message here instead.
    if !cli.file.exists() {
        return Err(FileNotFound {
            path: cli.file.clone(),
        }
        .into());
    }

    let defects = parser::parse_report_file(&cli.file)
        .with_context(|| format!("failed to parse report `{}`", cli.file.display()))?;

    let threshold = config.report.error_threshold;
    let output = Output::new(config.verbosity());

    let mut stdout = std::io::stdout().lock();
    let any_error = output.print_defects(&mut stdout, &defects, threshold)?;

    if config.output.verbose {
        eprintln!("{}", output.format_summary(&defects, threshold));
    }

    Ok(any_error)
}
