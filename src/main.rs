// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::app_config::Config;
use crate::app_controller::Controller;

mod app_config;
mod app_controller;
mod comparison;
mod errors;
mod providers;
mod usage;

/// CLI wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// OCR two images and compare the detected texts
    Compare {
        /// Reference image
        #[arg(value_name = "IMAGE1")]
        image1: PathBuf,

        /// Image to compare against the reference
        #[arg(value_name = "IMAGE2")]
        image2: PathBuf,
    },

    /// Compare two local text files without calling any OCR backend
    DiffText {
        /// Reference text file
        #[arg(value_name = "FILE1")]
        file1: PathBuf,

        /// Text file to compare against the reference
        #[arg(value_name = "FILE2")]
        file2: PathBuf,
    },

    /// Show the monthly OCR usage counter
    Usage,
}

/// ocrdiff - fuzzy comparison of OCR-extracted text
///
/// Runs OCR on two images (or reads two text files directly) and reports an
/// overall similarity score plus a line-level diff of deleted, modified and
/// added lines.
#[derive(Parser, Debug)]
#[command(name = "ocrdiff")]
#[command(version = "1.0.0")]
#[command(about = "Fuzzy OCR text comparison tool")]
#[command(long_about = "ocrdiff extracts text from two images via an OCR backend and compares the
results: an overall word-level similarity percentage and a line diff that
classifies each reference line as deleted, modified or unchanged, and each
leftover compare line as added.

EXAMPLES:
    ocrdiff compare before.jpg after.jpg       # OCR both images and diff them
    ocrdiff diff-text before.txt after.txt     # Diff two text files offline
    ocrdiff usage                              # Show the monthly OCR quota
    ocrdiff -p mock compare a.jpg b.jpg        # Override the configured provider
    ocrdiff -l debug compare a.jpg b.jpg       # Verbose logging

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config. If the config file doesn't exist, a
    default one will be created automatically.

SUPPORTED PROVIDERS:
    google_vision - Google Cloud Vision REST API (requires API key)
    mock          - In-memory backend for testing")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// OCR provider to use, overriding the configured one (google_vision, mock)
    #[arg(short, long)]
    provider: Option<String>,

    /// Set logging level
    #[arg(short = 'l', long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Fold command-line overrides into the loaded configuration
fn apply_overrides(config: &mut Config, options: &CommandLineOptions) -> Result<()> {
    if let Some(provider) = &options.provider {
        config.provider = provider.parse()?;
    }
    if let Some(cli_level) = &options.log_level {
        config.log_level = cli_level.clone().into();
    }
    Ok(())
}

/// Custom logger writing timestamped, colored lines to stderr
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    fn color_code(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[0m",
            Level::Debug => "\x1B[2m",
            Level::Trace => "\x1B[2m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                Self::color_code(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let options = CommandLineOptions::parse();

    let mut config = Config::from_file_or_default(&options.config_path)?;
    apply_overrides(&mut config, &options)?;

    if let Err(e) = CustomLogger::init(config.log_level.to_level_filter()) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match options.command {
        Commands::Compare { image1, image2 } => {
            let controller = Controller::from_config(&config)?;
            let report = controller.compare_images(&image1, &image2).await?;
            print_json(&report)
        }
        Commands::DiffText { file1, file2 } => {
            let text1 = std::fs::read_to_string(&file1)
                .with_context(|| format!("Failed to read text file: {:?}", file1))?;
            let text2 = std::fs::read_to_string(&file2)
                .with_context(|| format!("Failed to read text file: {:?}", file2))?;

            let service = comparison::ComparisonService::new(config.comparison.clone());
            let result = service.compare(&text1, &text2);
            print_json(&result)
        }
        Commands::Usage => {
            let tracker =
                usage::FileUsageTracker::new(&config.usage.usage_file, config.usage.monthly_limit);
            let snapshot = usage::UsageGate::snapshot(&tracker)?;
            print_json(&snapshot)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let serialized = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{}", serialized);
    Ok(())
}
