//! Command-line definition and startup validation.

use crate::ops::OpKind;
use crate::runner::ExecMode;
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

/// Analyze proxy access log files.
#[derive(Parser, Debug)]
#[command(name = "logsift", version)]
#[command(about = "Analyze log files", long_about = None)]
pub struct Cli {
    /// Path to log file(s), a directory with log files, or a glob pattern
    #[arg(long, num_args = 1.., value_name = "PATH")]
    pub input: Vec<PathBuf>,

    /// Extract the most frequent IP address
    #[arg(long)]
    pub most_frequent_ip: bool,

    /// Extract the least frequent IP address
    #[arg(long)]
    pub least_frequent_ip: bool,

    /// Print events per second
    #[arg(long)]
    pub events_per_second: bool,

    /// Total amount of bytes exchanged
    #[arg(long)]
    pub total_amount_of_bytes: bool,

    /// Output JSON file location
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format (only "json" is supported)
    #[arg(long, value_name = "NAME", default_value = "json")]
    pub format: String,

    /// Process input files in parallel
    #[cfg(feature = "parallel")]
    #[arg(long)]
    pub parallel: bool,

    /// Worker thread count for parallel processing
    #[cfg(feature = "parallel")]
    #[arg(long, value_name = "N", requires = "parallel")]
    pub threads: Option<usize>,
}

/// Fatal startup conditions, each with its own process exit code.
///
/// Everything else -- missing inputs, unreadable files, malformed lines --
/// is recoverable and never terminates the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StartupError {
    #[error("No input specified")]
    NoInput,
    #[error("No operation selected")]
    NoOperation,
    #[error("No output file specified")]
    NoOutput,
    #[error("Error writing to file {0}")]
    OutputWrite(String),
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

impl StartupError {
    /// Process exit code for this condition.
    pub fn exit_code(&self) -> i32 {
        match self {
            StartupError::NoInput => 1,
            StartupError::NoOperation => 2,
            StartupError::NoOutput => 4,
            StartupError::OutputWrite(_) => 5,
            StartupError::UnsupportedFormat(_) => 6,
        }
    }
}

/// Validated run parameters.
#[derive(Debug)]
pub struct RunConfig {
    pub inputs: Vec<PathBuf>,
    pub operations: Vec<OpKind>,
    pub output: PathBuf,
    pub mode: ExecMode,
}

impl Cli {
    /// Operations selected by flags, in canonical order.
    pub fn selected_operations(&self) -> Vec<OpKind> {
        OpKind::ALL
            .into_iter()
            .filter(|kind| match kind {
                OpKind::MostFrequentIp => self.most_frequent_ip,
                OpKind::LeastFrequentIp => self.least_frequent_ip,
                OpKind::EventsPerSecond => self.events_per_second,
                OpKind::TotalBytes => self.total_amount_of_bytes,
            })
            .collect()
    }

    fn exec_mode(&self) -> ExecMode {
        #[cfg(feature = "parallel")]
        if self.parallel {
            return ExecMode::Parallel {
                threads: self.threads,
            };
        }
        ExecMode::Sequential
    }

    /// Validate the startup conditions, checked in a fixed order:
    /// operations, inputs, output, then format.
    pub fn validate(self) -> Result<RunConfig, StartupError> {
        let operations = self.selected_operations();
        if operations.is_empty() {
            return Err(StartupError::NoOperation);
        }
        if self.input.is_empty() {
            return Err(StartupError::NoInput);
        }
        let Some(output) = self.output.clone() else {
            return Err(StartupError::NoOutput);
        };
        if self.format != "json" {
            return Err(StartupError::UnsupportedFormat(self.format.clone()));
        }
        let mode = self.exec_mode();
        Ok(RunConfig {
            inputs: self.input,
            operations,
            output,
            mode,
        })
    }
}
