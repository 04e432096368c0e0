//! Input source discovery and line readers.
//!
//! Inputs named on the command line are expanded into a flat list of
//! regular files:
//!
//! - a regular file stands for itself;
//! - a directory contributes its regular-file children, one level deep;
//! - a path that does not exist but contains glob metacharacters is
//!   expanded as a pattern (`logs/*.gz` and friends);
//! - anything else is reported on diagnostic output and skipped -- a
//!   missing input never aborts the run.
//!
//! Expansion is best-effort by design: the run proceeds with whatever
//! sources resolve. Results come out sorted within each directory or
//! pattern for a deterministic processing order.

pub mod compression;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::warn;

use compression::auto_decompress_reader;

/// Expand the raw input paths into the list of files to process.
///
/// Unresolvable entries are logged and dropped; the returned list may be
/// empty. Order follows the input list, with directory children and glob
/// matches sorted lexicographically.
pub fn expand_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            match list_dir_files(input) {
                Ok(children) => files.extend(children),
                Err(err) => warn!("skipping directory {}: {err:#}", input.display()),
            }
        } else if input.exists() {
            files.push(input.clone());
        } else if looks_like_glob(input) {
            match expand_glob(input) {
                Ok(matches) if !matches.is_empty() => files.extend(matches),
                Ok(_) => warn!("File {} does not exist", input.display()),
                Err(err) => warn!("skipping pattern {}: {err:#}", input.display()),
            }
        } else {
            warn!("File {} does not exist", input.display());
        }
    }
    files
}

/// Regular-file children of a directory, one level deep, sorted.
fn list_dir_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read directory {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("read directory entry in {}", dir.display()))?
            .path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn looks_like_glob(path: &Path) -> bool {
    path.to_string_lossy()
        .contains(['*', '?', '['])
}

/// Expand a glob pattern into a sorted vector of matching file paths.
fn expand_glob(pattern: &Path) -> Result<Vec<PathBuf>> {
    let pattern = pattern.to_string_lossy();
    let paths = glob::glob(&pattern).with_context(|| format!("invalid glob pattern: {pattern}"))?;

    let mut files = Vec::new();
    for entry in paths {
        let path = entry.with_context(|| format!("read glob entry for pattern: {pattern}"))?;
        // Only include actual files, not directories
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Open a source for line-by-line reading, decompressing transparently.
pub fn open_lines(path: &Path) -> Result<impl BufRead> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let reader = auto_decompress_reader(file, path)
        .with_context(|| format!("setup decompression for {}", path.display()))?;
    Ok(BufReader::new(reader))
}
