use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use idsweep::{RangeSummer, RuleVariant, parse_ranges};
use log::info;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Puzzle part selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Part {
    One,
    Two,
}

impl From<Part> for RuleVariant {
    fn from(part: Part) -> Self {
        match part {
            Part::One => RuleVariant::PartOne,
            Part::Two => RuleVariant::PartTwo,
        }
    }
}

/// Idsweep - Sum product IDs made of a repeated digit group
#[derive(Parser, Debug)]
#[command(name = "idsweep")]
#[command(about = "Sum the invalid product IDs found in a list of inclusive ranges")]
#[command(version)]
pub struct CliArgs {
    /// File holding the comma-separated ranges, or '-' for stdin
    #[arg(default_value = "input")]
    pub input: PathBuf,

    /// Only solve this part (default: both)
    #[arg(short, long, value_enum)]
    pub part: Option<Part>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub input: PathBuf,
    pub variants: Vec<RuleVariant>,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        let variants = match args.part {
            Some(part) => vec![part.into()],
            None => RuleVariant::ALL.to_vec(),
        };

        CliConfig {
            input: args.input,
            variants,
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> CliConfig {
    CliArgs::parse().into()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
}

/// Read the whole input source; `-` means stdin
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return io::read_to_string(io::stdin()).context("Failed to read input from stdin");
    }

    if !path.exists() {
        bail!("Input not found: {}", path.display());
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read input {}", path.display()))
}

/// Compute one `Part <n>: <total>` line per variant
pub fn report(input: &str, variants: &[RuleVariant]) -> Result<Vec<String>> {
    let ranges = parse_ranges(input).context("Invalid range list")?;
    let summer = RangeSummer::new();

    variants
        .iter()
        .map(|&variant| {
            let total = summer
                .sum_all(&ranges, variant)
                .with_context(|| format!("Failed to solve {}", variant))?;
            Ok(format!("{}: {}", variant, total))
        })
        .collect()
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args();

    // Initialize logging
    init_logging(&config.log_level);

    info!("Reading ranges from {}", config.input.display());
    let input = read_input(&config.input)?;

    // Every part is computed before anything is printed.
    for line in report(&input, &config.variants)? {
        println!("{}", line);
    }
    Ok(())
}
