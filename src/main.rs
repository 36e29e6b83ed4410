//! cpusched - CPU scheduling simulator
//!
//! Usage: cpusched [OPTIONS] <INPUT>

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use log::info;

use cpusched::loader::load_workload;
use cpusched::report::Report;
use cpusched::simulation::simulate;
use cpusched::LoadError;

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Simulate FCFS, SJF, or priority scheduling over a workload file.
#[derive(Debug, Parser)]
#[command(name = "cpusched", version, about)]
struct Args {
    /// Workload file (processcount / runfor / use / process / end directives).
    input: PathBuf,

    /// Write the report here instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Report format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// CLI errors
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("cannot serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot write report to '{}': {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write report to stdout: {0}")]
    Stdout(#[source] io::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    let workload = load_workload(&args.input)?;
    let report = Report::from_outcome(simulate(workload));

    // Render fully before writing so a failure never leaves a partial report.
    let rendered = match args.format {
        Format::Text => report.to_string(),
        Format::Json => {
            let mut json = report.to_json()?;
            json.push('\n');
            json
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered).map_err(|source| CliError::Output {
                path: path.clone(),
                source,
            })?;
            info!("report written to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(CliError::Stdout)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from([
            "cpusched", "-vv", "--format", "json", "-o", "out.json", "case.in",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("case.in"));
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert_eq!(args.format, Format::Json);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["cpusched", "case.in"]).unwrap();
        assert_eq!(args.format, Format::Text);
        assert_eq!(args.output, None);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_input_required() {
        assert!(Args::try_parse_from(["cpusched"]).is_err());
    }
}
