use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use log::{warn, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::{scan, write_json, AuditError, AuditResult, ScanOptions, ScanOutcome, TextReporter};

const EXIT_FAILURE: u8 = 1;

/// A tool to audit ScanNet *.sens data: timestamps monotonicity and camera poses legality.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct AuditCli {
    /// Either a `scans` directory holding one directory per scene, or a single .sens file.
    pub input: PathBuf,

    /// Accepted for compatibility with older scripts, it is not used.
    pub dataset_dir: Option<PathBuf>,

    /// Number of scenes audited concurrently in dataset mode (0 = one per CPU).
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Also write the result as JSON to this file.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Never highlight the yes/no verdicts.
    #[arg(long)]
    pub no_color: bool,

    /// Log verbosity on stderr, repeat for more details.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl AuditCli {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions { jobs: self.jobs }
    }
}

/// Entry point of the `sensaudit` binary.
pub fn run_cli() -> ExitCode {
    let stdout = io::stdout();
    let terminal = stdout.is_terminal();
    ExitCode::from(run(std::env::args_os(), stdout, terminal))
}

/// Parses `args`, runs the audit and renders it to `out`. Returns the process exit status:
/// 0 once the audit ran, whatever the health of the sequences, 1 otherwise.
pub fn run<I, T, W>(args: I, out: W, terminal: bool) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match AuditCli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return 0;
        }
        Err(e) => {
            eprintln!("{}", AuditError::InvalidArguments(e.to_string()));
            return EXIT_FAILURE;
        }
    };
    init_logging(cli.verbose);

    match execute(&cli, out, terminal && !cli.no_color) {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("ERROR: {e}");
            EXIT_FAILURE
        }
    }
}

/// Runs the audit described by `cli`.
pub fn execute<W: Write>(cli: &AuditCli, out: W, highlight: bool) -> AuditResult<ScanOutcome> {
    if let Some(dir) = &cli.dataset_dir {
        warn!("Ignoring the dataset directory argument {}", dir.display());
    }
    let mut reporter = TextReporter::new(out, highlight);
    let outcome = scan(&cli.input, &cli.scan_options(), &mut reporter)?;
    if let Some(path) = &cli.json {
        write_json(&outcome, path)?;
    }
    Ok(outcome)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // Only the first audit of the process installs the logger.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_reference_invocation() {
        let cli = AuditCli::try_parse_from(["sensaudit", "/data/scans/"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("/data/scans/"));
        assert_eq!(cli.dataset_dir, None);
        assert_eq!(cli.scan_options(), ScanOptions::default());
        assert!(!cli.no_color);
    }

    #[test]
    fn accepts_the_unused_second_argument() {
        let cli = AuditCli::try_parse_from(["sensaudit", "a.sens", "/data"]).unwrap();
        assert_eq!(cli.dataset_dir, Some(PathBuf::from("/data")));
    }

    #[test]
    fn extra_options() {
        let cli = AuditCli::try_parse_from([
            "sensaudit", "scans", "-j", "4", "--json", "out.json", "--no-color", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.jobs, 4);
        assert_eq!(cli.json, Some(PathBuf::from("out.json")));
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn wrong_argument_count_exits_with_1() {
        assert_eq!(run(["sensaudit"], Vec::new(), false), 1);
        assert_eq!(run(["sensaudit", "a.sens", "b", "c"], Vec::new(), false), 1);
    }

    #[test]
    fn wrong_input_name_exits_with_1() {
        let mut out = Vec::new();
        assert_eq!(run(["sensaudit", "/data/scene.txt"], &mut out, false), 1);
        assert!(out.is_empty());
    }
}
