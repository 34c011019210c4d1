use std::{
    io::{self, Write},
    path::PathBuf,
};

use allparams::{
    AllParamsError, DEFAULT_LABEL_WIDTH, FfmpegLogLevel, MalformedInformPolicy, MediaInfo,
    PrintOptions, printer,
};
use clap::{CommandFactory, Parser, error::ErrorKind};
use clap_complete::Shell;
use colored::Colorize;
use thiserror::Error;

const CLI_AFTER_HELP: &str = "Examples:\n  allparams input.mp4\n  allparams input.mkv --json\n  allparams input.mkv --strict --verbose\n  allparams --completions zsh > _allparams";

/// Prints all available parameters with their values for all streams.
/// Parameters without values are hidden.
#[derive(Debug, Parser)]
#[command(
    name = "allparams",
    version,
    about = "Print every available metadata parameter of a media file",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    /// Media file to inspect. Exactly one is expected.
    files: Vec<PathBuf>,

    /// Output the report as machine-readable JSON.
    #[arg(long)]
    json: bool,

    /// Fail instead of skipping an Inform value that cannot be parsed.
    #[arg(long)]
    strict: bool,

    /// Width of the label column in text output.
    #[arg(long, default_value_t = DEFAULT_LABEL_WIDTH)]
    label_width: usize,

    /// Show debug logging output.
    #[arg(long)]
    verbose: bool,

    /// FFmpeg log level (quiet, panic, fatal, error, warning, info, verbose, debug, trace).
    #[arg(long, default_value = "error")]
    log_level: String,

    /// Print shell completions and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Give exactly one filename as an argument.")]
    Usage,

    #[error("Could not open file: {0}")]
    Open(#[source] AllParamsError),

    #[error(transparent)]
    Run(#[from] AllParamsError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default();
    let mut builder = env_logger::Builder::from_env(env.default_filter_or(default_filter));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_none() {
        // `run` prints report warnings with its own prefix.
        builder.filter_module("allparams", log::LevelFilter::Error);
    }
    builder.format_timestamp(None).init();
}

/// Help and version requests succeed; every other parse failure is a usage
/// error.
fn parse_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn print_options(cli: &Cli) -> PrintOptions {
    let policy = if cli.strict {
        MalformedInformPolicy::Fail
    } else {
        MalformedInformPolicy::Skip
    };
    PrintOptions::new()
        .with_label_width(cli.label_width)
        .with_malformed_inform(policy)
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_logging(cli.verbose);

    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "allparams", &mut io::stdout());
        return Ok(());
    }

    let [path] = cli.files.as_slice() else {
        return Err(CliError::Usage);
    };

    let log_level: FfmpegLogLevel = cli.log_level.parse()?;
    allparams::set_ffmpeg_log_level(log_level);

    let media = MediaInfo::open(path).map_err(CliError::Open)?;
    let options = print_options(&cli);
    let report = allparams::inspect(&media, &options)?;

    for warning in &report.warnings {
        eprintln!("{} {warning}", "Warning:".yellow().bold());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        printer::write_json(&report, &mut out)?;
    } else {
        printer::write_text(&report, &options, &mut out)?;
    }
    out.flush()?;

    media.close();
    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            std::process::exit(parse_exit_code(error.kind()));
        }
    };

    if let Err(error) = run(cli) {
        eprintln!("{} {error}", "Error:".red().bold());
        std::process::exit(1);
    }
}
