//! Result merging and JSON report output.

use crate::ops::Operation;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};
use std::io::Write;
use std::path::Path;

/// Merge every operation's result into one name-to-value mapping.
///
/// With the built-in operation set all names are distinct; should two
/// operations ever report the same name, the later one wins.
pub fn merge_results(ops: &[Box<dyn Operation>]) -> Map<String, Value> {
    let mut merged = Map::new();
    for op in ops {
        let (name, value) = op.result();
        let value = serde_json::to_value(&value).unwrap_or(Value::Null);
        merged.insert(name.to_string(), value);
    }
    merged
}

/// Render the merged results as a JSON object with 4-space indentation and
/// a trailing newline.
pub fn render_json(results: &Map<String, Value>) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    results
        .serialize(&mut serializer)
        .context("serialize report")?;
    buf.push(b'\n');
    String::from_utf8(buf).context("report is not valid UTF-8")
}

/// Render the report and write it to `path` in one shot.
pub fn write_report(path: &Path, results: &Map<String, Value>) -> Result<()> {
    let rendered = render_json(results)?;
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("create {}", path.display()))?;
    file.write_all(rendered.as_bytes())
        .with_context(|| format!("write {}", path.display()))?;
    file.flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
