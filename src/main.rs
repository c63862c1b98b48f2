// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::Write;
use std::path::PathBuf;

use xamlcopy::app_config::{Config, LogLevel};
use xamlcopy::{COMPLETION_MESSAGE, Controller, DecodePolicy};

/// CLI Wrapper for DecodePolicy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliDecodePolicy {
    Ignore,
    Replace,
}

impl From<CliDecodePolicy> for DecodePolicy {
    fn from(cli_policy: CliDecodePolicy) -> Self {
        match cli_policy {
            CliDecodePolicy::Ignore => DecodePolicy::Ignore,
            CliDecodePolicy::Replace => DecodePolicy::Replace,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for xamlcopy
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// xamlcopy - copy .xaml files to .xaml.txt on the Desktop
#[derive(Parser, Debug)]
#[command(name = "xamlcopy")]
#[command(version)]
#[command(about = "Copy every .xaml file in the current directory to <name>.xaml.txt on the Desktop")]
#[command(long_about = "Copies the text of every *.xaml file (case-insensitive, non-recursive) in the
current directory into <name>.xaml.txt and moves it to ~/Desktop.

EXAMPLES:
    xamlcopy                                # Convert files in the current directory
    xamlcopy --on-invalid replace           # Keep U+FFFD where bytes are not UTF-8
    xamlcopy -l info                        # Log each file as it is moved
    xamlcopy completions bash > xamlcopy.bash")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory to scan instead of the current directory
    #[arg(long, value_name = "DIR")]
    source_dir: Option<PathBuf>,

    /// Directory to move output into instead of ~/Desktop
    #[arg(long, value_name = "DIR")]
    destination_dir: Option<PathBuf>,

    /// How to handle byte sequences that are not valid UTF-8
    #[arg(long, value_enum)]
    on_invalid: Option<CliDecodePolicy>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "1;31"),
            Level::Warn => ("🚧", "1;33"),
            Level::Info => ("📄", "1;32"),
            Level::Debug => ("🔍", "1;36"),
            Level::Trace => ("📋", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::style_for_level(record.level());

            // stdout is reserved for the completion line
            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "xamlcopy", &mut std::io::stdout());
        return Ok(());
    }

    // The logger's own filter is Trace; log::set_max_level does the gating
    CustomLogger::init(LevelFilter::Trace)?;

    let config = build_config(cli)?;
    log::set_max_level(config.log_level.to_level_filter());
    if log::log_enabled!(Level::Debug) {
        // Non UTF-8 paths cannot be serialized; fall back to Debug output
        let rendered = serde_json::to_string(&config).unwrap_or_else(|_| format!("{:?}", config));
        debug!("Resolved config: {}", rendered);
    }

    let controller = Controller::with_config(config).context("Configuration validation failed")?;
    controller.run().context("Conversion aborted")?;

    println!("{}", COMPLETION_MESSAGE);
    Ok(())
}

// @resolves: Defaults from the environment, then command line overrides
fn build_config(cli: CommandLineOptions) -> Result<Config> {
    let mut config = Config::resolve(cli.source_dir, cli.destination_dir)
        .context("Failed to resolve the working directory or Desktop")?;

    if let Some(policy) = cli.on_invalid {
        config.decode_policy = policy.into();
    }

    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }

    Ok(config)
}
