use clap::{Parser, ValueEnum};
use scent_robot::{InstructionPolicy, InterpreterConfig, OutputFormat, SimulationError, run};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(bin_name = "scent-robot")]
#[command(about = "Drive robots across a bounded grid; lost robots leave a scent")]
#[command(version)]
struct CliArgs {
    /// Input file; reads stdin when omitted.
    input: Option<PathBuf>,

    #[arg(long, help = "Skip instruction characters other than L, R and F")]
    ignore_unknown_instructions: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[arg(
        long,
        short = 'd',
        help = "Trace grid size, robot poses and scents to stderr (also enabled by DEBUG)"
    )]
    debug: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.debug || std::env::var_os("DEBUG").is_some_and(|v| !v.is_empty()));

    match execute(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &CliArgs) -> Result<scent_robot::RunSummary, SimulationError> {
    let config = InterpreterConfig {
        instruction_policy: if args.ignore_unknown_instructions {
            InstructionPolicy::Ignore
        } else {
            InstructionPolicy::Reject
        },
    };
    let stdout = io::stdout().lock();
    let format = args.format.into();

    match &args.input {
        Some(path) => run(BufReader::new(File::open(path)?), stdout, config, format),
        None => run(io::stdin().lock(), stdout, config, format),
    }
}

/// Diagnostics go to stderr so stdout carries only reports. `RUST_LOG`
/// overrides the level chosen by `--debug`.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
