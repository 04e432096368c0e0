//! Drives records from every source through every selected operation.

use crate::ops::Operation;
use crate::parse::parse_line;
use crate::record::LogRecord;
use crate::source;
use anyhow::Result;
use serde::Serialize;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::Mutex;

/// Execution mode for a run.
#[derive(Clone, Copy, Debug)]
pub enum ExecMode {
    /// One file at a time, fully drained before the next.
    Sequential,
    /// Whole files processed concurrently; each operation is guarded by a
    /// mutex so accumulators stay safe under concurrent `handle` calls.
    #[cfg(feature = "parallel")]
    Parallel {
        /// Worker thread count; defaults to one per core, capped at the
        /// number of files.
        threads: Option<usize>,
    },
}

/// Per-run counters, reported at debug level once the run completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Files opened and drained (possibly partially, after a read error).
    pub files_read: u64,
    /// Files that could not be opened.
    pub files_skipped: u64,
    /// Lines seen across all files.
    pub lines: u64,
    /// Lines that normalized into a record.
    pub records: u64,
    /// Blank or malformed lines, absorbed silently.
    pub malformed_lines: u64,
}

impl RunStats {
    fn merged(mut self, other: RunStats) -> RunStats {
        self.files_read += other.files_read;
        self.files_skipped += other.files_skipped;
        self.lines += other.lines;
        self.records += other.records;
        self.malformed_lines += other.malformed_lines;
        self
    }
}

/// The broadcast driver.
///
/// Feeds every line of every source through the normalizer and hands each
/// resulting record to every operation. Sources that cannot be opened are
/// logged and skipped; the run itself never fails over input trouble.
pub struct Runner {
    pub mode: ExecMode,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            mode: ExecMode::Sequential,
        }
    }
}

impl Runner {
    /// Process `files` in order (or concurrently in parallel mode),
    /// accumulating into `ops`. Returns the run's counters.
    pub fn run(&self, files: &[PathBuf], ops: &mut [Box<dyn Operation>]) -> RunStats {
        let stats = match self.mode {
            ExecMode::Sequential => run_sequential(files, ops),
            #[cfg(feature = "parallel")]
            ExecMode::Parallel { threads } => run_parallel(files, ops, threads),
        };
        debug!(?stats, "run complete");
        stats
    }
}

fn run_sequential(files: &[PathBuf], ops: &mut [Box<dyn Operation>]) -> RunStats {
    let mut stats = RunStats::default();
    for path in files {
        let drained = drain_file(path, |record| {
            for op in ops.iter_mut() {
                op.handle(record);
            }
        });
        stats = match drained {
            Ok(file_stats) => stats.merged(file_stats),
            Err(err) => {
                warn!("skipping {}: {err:#}", path.display());
                stats.files_skipped += 1;
                stats
            }
        };
    }
    stats
}

#[cfg(feature = "parallel")]
fn run_parallel(
    files: &[PathBuf],
    ops: &mut [Box<dyn Operation>],
    threads: Option<usize>,
) -> RunStats {
    let threads = threads.unwrap_or_else(|| num_cpus::get().min(files.len().max(1)));
    let pool = match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool,
        Err(err) => {
            warn!("falling back to sequential execution: {err}");
            return run_sequential(files, ops);
        }
    };

    let guarded: Vec<Mutex<&mut Box<dyn Operation>>> = ops.iter_mut().map(Mutex::new).collect();
    pool.install(|| {
        files
            .par_iter()
            .map(|path| {
                let drained = drain_file(path, |record| {
                    for op in &guarded {
                        op.lock().unwrap().handle(record);
                    }
                });
                match drained {
                    Ok(file_stats) => file_stats,
                    Err(err) => {
                        warn!("skipping {}: {err:#}", path.display());
                        RunStats {
                            files_skipped: 1,
                            ..RunStats::default()
                        }
                    }
                }
            })
            .reduce(RunStats::default, RunStats::merged)
    })
}

/// Drain one file line by line, invoking `on_record` for every line that
/// normalizes into a record.
///
/// Returns an error only when the file cannot be opened. A read error mid
/// file abandons the remainder of that file; lines already consumed stay
/// counted.
fn drain_file(path: &Path, mut on_record: impl FnMut(&LogRecord)) -> Result<RunStats> {
    let reader = source::open_lines(path)?;
    let mut stats = RunStats {
        files_read: 1,
        ..RunStats::default()
    };
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!(
                    "read error in {}, abandoning rest of file: {err}",
                    path.display()
                );
                break;
            }
        };
        stats.lines += 1;
        match parse_line(&line) {
            Some(record) => {
                stats.records += 1;
                on_record(&record);
            }
            None => stats.malformed_lines += 1,
        }
    }
    Ok(stats)
}
