//! Tracker CLI - Command-line interface for the fitness tracker
//!
//! Commands:
//! - demo: Process the built-in reference packages (default when no command is given)
//! - run: Process packages from a file or stdin
//! - validate: Validate packages without computing metrics

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use fitness_tracker::{
    demo_packages, process_packages, InfoMessage, Package, PackageReader, TrackerError,
    TRACKER_VERSION,
};

/// Tracker - Workout metrics from raw sensor packages
#[derive(Parser)]
#[command(name = "tracker")]
#[command(version = TRACKER_VERSION)]
#[command(about = "Compute distance, speed and calories from workout sensor packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process the built-in reference packages
    Demo {
        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,
    },

    /// Process packages from a file or stdin
    Run {
        /// Input file path (use - for stdin; defaults to piped stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,
    },

    /// Validate packages without computing metrics
    Validate {
        /// Input file path (use - for stdin; defaults to piped stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one package per line)
    Ndjson,
    /// JSON array of packages
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// One summary line per package
    Text,
    /// Newline-delimited JSON (one info record per line)
    Ndjson,
    /// JSON array of info records
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to init logging. {}", e);
    }
}

fn run(cli: Cli) -> Result<(), TrackerCliError> {
    match cli.command {
        None => cmd_demo(OutputFormat::Text),
        Some(Commands::Demo { output_format }) => cmd_demo(output_format),
        Some(Commands::Run {
            input,
            input_format,
            output_format,
        }) => cmd_run(input.as_deref(), input_format, output_format),
        Some(Commands::Validate {
            input,
            input_format,
            json,
        }) => cmd_validate(input.as_deref(), input_format, json),
    }
}

fn cmd_demo(output_format: OutputFormat) -> Result<(), TrackerCliError> {
    let packages = demo_packages();
    info!(count = packages.len(), "processing demo packages");
    write_infos(&process_packages(&packages)?, &output_format)
}

fn cmd_run(
    input: Option<&Path>,
    input_format: InputFormat,
    output_format: OutputFormat,
) -> Result<(), TrackerCliError> {
    let packages = read_packages(input, input_format)?;
    if packages.is_empty() {
        return Err(TrackerCliError::NoPackages);
    }

    info!(count = packages.len(), "processing packages");
    write_infos(&process_packages(&packages)?, &output_format)
}

fn cmd_validate(
    input: Option<&Path>,
    input_format: InputFormat,
    json: bool,
) -> Result<(), TrackerCliError> {
    let packages = read_packages(input, input_format)?;
    let failures = PackageReader::validate_packages(&packages);

    let report = ValidationReport {
        total_packages: packages.len(),
        valid_packages: packages.len() - failures.len(),
        invalid_packages: failures.len(),
        errors: failures
            .iter()
            .map(|f| ValidationErrorDetail {
                index: f.index,
                workout_type: f.workout_type.clone(),
                error: f.error.to_string(),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation Report");
        println!("=================");
        println!("Total packages:   {}", report.total_packages);
        println!("Valid packages:   {}", report.valid_packages);
        println!("Invalid packages: {}", report.invalid_packages);

        if !report.errors.is_empty() {
            println!("\nErrors:");
            for err in &report.errors {
                println!(
                    "  - Package {} (index {}): {}",
                    err.workout_type, err.index, err.error
                );
            }
        }
    }

    if report.invalid_packages > 0 {
        Err(TrackerCliError::ValidationFailed(report.invalid_packages))
    } else {
        Ok(())
    }
}

fn read_packages(
    input: Option<&Path>,
    input_format: InputFormat,
) -> Result<Vec<Package>, TrackerCliError> {
    let input_data = match input {
        Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(path)?,
        Some(_) => read_stdin()?,
        None if atty::is(atty::Stream::Stdin) => return Err(TrackerCliError::NoInput),
        None => read_stdin()?,
    };

    let packages = match input_format {
        InputFormat::Ndjson => PackageReader::parse_ndjson(&input_data)?,
        InputFormat::Json => PackageReader::parse_array(&input_data)?,
    };
    Ok(packages)
}

fn read_stdin() -> Result<String, TrackerCliError> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn write_infos(infos: &[InfoMessage], output_format: &OutputFormat) -> Result<(), TrackerCliError> {
    let mut stdout = io::stdout().lock();
    match output_format {
        OutputFormat::Text => {
            for info in infos {
                writeln!(stdout, "{}", info.get_message())?;
            }
        }
        OutputFormat::Ndjson => {
            for info in infos {
                writeln!(stdout, "{}", serde_json::to_string(info)?)?;
            }
        }
        OutputFormat::Json => writeln!(stdout, "{}", serde_json::to_string(infos)?)?,
        OutputFormat::JsonPretty => writeln!(stdout, "{}", serde_json::to_string_pretty(infos)?)?,
    }
    stdout.flush()?;
    Ok(())
}

// Error types

#[derive(Debug)]
enum TrackerCliError {
    Io(io::Error),
    Tracker(TrackerError),
    Json(serde_json::Error),
    NoInput,
    NoPackages,
    ValidationFailed(usize),
}

impl From<io::Error> for TrackerCliError {
    fn from(e: io::Error) -> Self {
        TrackerCliError::Io(e)
    }
}

impl From<TrackerError> for TrackerCliError {
    fn from(e: TrackerError) -> Self {
        TrackerCliError::Tracker(e)
    }
}

impl From<serde_json::Error> for TrackerCliError {
    fn from(e: serde_json::Error) -> Self {
        TrackerCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<TrackerCliError> for CliError {
    fn from(e: TrackerCliError) -> Self {
        match e {
            TrackerCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            TrackerCliError::Tracker(e) => {
                let (code, hint) = match &e {
                    TrackerError::InvalidKey(_) => {
                        ("INVALID_KEY", "Workout type must be one of RUN, WLK, SWM")
                    }
                    TrackerError::InvalidArguments { .. } => (
                        "INVALID_ARGUMENTS",
                        "RUN takes 3 values, WLK takes 4, SWM takes 5",
                    ),
                    TrackerError::InvalidValue { .. } | TrackerError::InvalidDuration(_) => {
                        ("INVALID_VALUE", "Run 'tracker validate' for details")
                    }
                    TrackerError::ParseError(_) | TrackerError::JsonError(_) => {
                        ("PARSE_ERROR", "Ensure each package is {\"workout_type\": ..., \"data\": [...]}")
                    }
                };
                CliError {
                    code: code.to_string(),
                    message: e.to_string(),
                    hint: Some(hint.to_string()),
                }
            }
            TrackerCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
            TrackerCliError::NoInput => CliError {
                code: "NO_INPUT".to_string(),
                message: "No input given".to_string(),
                hint: Some("Pass --input <file> or pipe packages on stdin".to_string()),
            },
            TrackerCliError::NoPackages => CliError {
                code: "NO_PACKAGES".to_string(),
                message: "No packages found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            TrackerCliError::ValidationFailed(count) => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: format!("{} packages failed validation", count),
                hint: Some("Fix validation errors and retry".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct ValidationReport {
    total_packages: usize,
    valid_packages: usize,
    invalid_packages: usize,
    errors: Vec<ValidationErrorDetail>,
}

#[derive(serde::Serialize)]
struct ValidationErrorDetail {
    index: usize,
    workout_type: String,
    error: String,
}
