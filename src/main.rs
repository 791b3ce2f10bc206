use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use human_panic::setup_panic;

use code_format::cli::{
    apply_cli_overrides, check_for_stdout_stream, get_config_path, get_log_file, get_matches,
    get_verbosity,
};
use code_format::config::read_or_default;
use code_format::invoker::{RunOptions, RunReport, format_roots};
use code_format::logging::init_logger;

fn main() -> ExitCode {
    setup_panic!();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{} {err:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Runs the formatter across the configured roots
///
/// Returns whether every root was walked and every invocation
/// succeeded; that result drives the process exit code.
fn run() -> Result<bool> {
    let matches = get_matches()?;

    let verbosity = get_verbosity(&matches);
    let log_file = get_log_file(&matches)?;
    init_logger(verbosity, &log_file)?;

    let mut config = read_or_default(&get_config_path(&matches)?)?;
    apply_cli_overrides(&mut config, &matches)?;

    let options = RunOptions {
        config,
        dry_run: matches.get_flag("dry"),
    };

    let report = format_roots(&options)?;
    print_summary(&report, options.dry_run);

    check_for_stdout_stream();

    Ok(report.success())
}

/// Prints the end-of-run summary line
fn print_summary(report: &RunReport, dry_run: bool) {
    let headline = format!(
        "{}{} file(s) in {} root(s)",
        if dry_run { "would format " } else { "formatted " },
        report.stats.files_discovered,
        report.stats.roots_visited
    );

    if report.success() {
        println!("{}", headline.green());
    } else {
        println!("{}", headline.yellow());
        println!(
            "{}",
            format!(
                "{} invocation(s) failed, {} root(s) could not be walked",
                report.stats.invocations_failed, report.stats.roots_failed
            )
            .red()
        );
    }
}
