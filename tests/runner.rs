//! End-to-end tests for input expansion and the broadcast driver.

use logsift::{OpKind, Runner, build_operations, expand_inputs, merge_results};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const LINE_A: &str = "1035368418.577    776 210.8.79.228 TCP_MISS/200 4797 GET http://a.com - DIRECT/64.14.118.196 text/html";
const LINE_B: &str = "1035368420.577    500 210.8.79.228 TCP_MISS/200 100 GET http://b.com - DIRECT/1.2.3.4 text/html";

fn run_over(files: &[PathBuf], kinds: &[OpKind]) -> serde_json::Map<String, serde_json::Value> {
    let mut ops = build_operations(kinds);
    let runner = Runner::default();
    runner.run(files, &mut ops);
    merge_results(&ops)
}

#[test]
fn two_line_fixture_reports_rate_and_bytes() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let file = dir.path().join("access.log");
    fs::write(&file, format!("{LINE_A}\n{LINE_B}\n"))?;

    let results = run_over(
        &[file],
        &[OpKind::EventsPerSecond, OpKind::TotalBytes],
    );

    assert_eq!(results["events per second"], json!(1.0));
    assert_eq!(
        results["total amount of bytes exchanged"],
        json!(776 + 4797 + 500 + 100)
    );
    Ok(())
}

#[test]
fn mixed_syntaxes_in_one_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let file = dir.path().join("mixed.log");
    fs::write(
        &file,
        format!(
            "{LINE_A}\n1035368420.577,500,10.0.0.1,TCP_HIT/200,100,GET,http://b.com/,-,DIRECT/1.2.3.4,text/html\n"
        ),
    )?;

    let results = run_over(&[file], &[OpKind::TotalBytes, OpKind::MostFrequentIp]);
    assert_eq!(results["total amount of bytes exchanged"], json!(6173));
    assert_eq!(results["most frequent ip"], json!("210.8.79.228"));
    Ok(())
}

#[test]
fn blank_and_malformed_lines_are_absorbed() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let file = dir.path().join("noisy.log");
    fs::write(&file, format!("\n   \ngarbage here\n{LINE_A}\n"))?;

    let mut ops = build_operations(&[OpKind::TotalBytes]);
    let runner = Runner::default();
    let stats = runner.run(&[file], &mut ops);

    assert_eq!(stats.files_read, 1);
    assert_eq!(stats.lines, 4);
    assert_eq!(stats.records, 1);
    assert_eq!(stats.malformed_lines, 3);
    assert_eq!(merge_results(&ops)["total amount of bytes exchanged"], json!(776 + 4797));
    Ok(())
}

#[test]
fn directory_inputs_expand_one_level_deep() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("a.log"), format!("{LINE_A}\n"))?;
    fs::write(dir.path().join("b.log"), format!("{LINE_B}\n"))?;
    // Nested directories are not descended into.
    fs::create_dir(dir.path().join("nested"))?;
    fs::write(dir.path().join("nested").join("c.log"), format!("{LINE_A}\n"))?;

    let files = expand_inputs(&[dir.path().to_path_buf()]);
    assert_eq!(files.len(), 2);

    let results = run_over(&files, &[OpKind::TotalBytes]);
    assert_eq!(results["total amount of bytes exchanged"], json!(6173));
    Ok(())
}

#[test]
fn missing_inputs_are_dropped_not_fatal() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let real = dir.path().join("real.log");
    fs::write(&real, format!("{LINE_A}\n"))?;
    let missing = dir.path().join("no-such-file.log");

    let files = expand_inputs(&[missing, real.clone()]);
    assert_eq!(files, vec![real]);
    Ok(())
}

#[test]
fn glob_patterns_expand_to_matching_files() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("a.log"), format!("{LINE_A}\n"))?;
    fs::write(dir.path().join("b.log"), format!("{LINE_B}\n"))?;
    fs::write(dir.path().join("unrelated.txt"), "not a log\n")?;

    let pattern = dir.path().join("*.log");
    let files = expand_inputs(&[pattern]);
    assert_eq!(files.len(), 2);

    let results = run_over(&files, &[OpKind::TotalBytes]);
    assert_eq!(results["total amount of bytes exchanged"], json!(6173));
    Ok(())
}

#[test]
fn unreadable_file_does_not_poison_the_run() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let good = dir.path().join("good.log");
    fs::write(&good, format!("{LINE_A}\n"))?;
    // One valid line, then bytes that fail UTF-8 line decoding.
    let corrupt = dir.path().join("corrupt.log");
    let mut bytes = format!("{LINE_B}\n").into_bytes();
    bytes.extend_from_slice(&[0xff, 0xfe, 0x00, 0xff]);
    bytes.push(b'\n');
    fs::write(&corrupt, bytes)?;

    let mut ops = build_operations(&[OpKind::TotalBytes]);
    let runner = Runner::default();
    let stats = runner.run(&[corrupt, good], &mut ops);

    assert_eq!(stats.files_read, 2);
    // Both valid lines made it through; the corrupt tail was abandoned.
    assert_eq!(
        merge_results(&ops)["total amount of bytes exchanged"],
        json!(776 + 4797 + 500 + 100)
    );
    Ok(())
}

#[test]
fn directory_with_corrupt_file_reflects_only_the_valid_one() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    // Garbage from the first byte: no line of this file decodes.
    fs::write(dir.path().join("corrupt.log"), [0xff, 0xfe, 0x00, 0x9f, 0xff])?;
    fs::write(dir.path().join("good.log"), format!("{LINE_A}\n{LINE_B}\n"))?;

    let files = expand_inputs(&[dir.path().to_path_buf()]);
    let results = run_over(&files, &[OpKind::EventsPerSecond, OpKind::TotalBytes]);

    assert_eq!(results["events per second"], json!(1.0));
    assert_eq!(results["total amount of bytes exchanged"], json!(6173));
    Ok(())
}

#[test]
fn operation_state_spans_multiple_files() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let first = dir.path().join("first.log");
    let second = dir.path().join("second.log");
    fs::write(&first, format!("{LINE_A}\n"))?;
    fs::write(&second, format!("{LINE_B}\n"))?;

    let results = run_over(&[first, second], &[OpKind::EventsPerSecond]);
    // Timestamps two seconds apart across separate files.
    assert_eq!(results["events per second"], json!(1.0));
    Ok(())
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_mode_matches_sequential_results() -> anyhow::Result<()> {
    use logsift::ExecMode;

    let dir = TempDir::new()?;
    let mut files = Vec::new();
    for i in 0..4 {
        let file = dir.path().join(format!("{i}.log"));
        let ts = 1035368418 + i;
        fs::write(
            &file,
            format!("{ts}.000    {i}00 10.0.0.{i} TCP_MISS/200 50 GET http://a.com - DIRECT/1.2.3.4 text/html\n"),
        )?;
        files.push(file);
    }

    let kinds = [OpKind::EventsPerSecond, OpKind::TotalBytes];
    let sequential = run_over(&files, &kinds);

    let mut ops = build_operations(&kinds);
    let runner = Runner {
        mode: ExecMode::Parallel { threads: Some(2) },
    };
    runner.run(&files, &mut ops);
    let parallel = merge_results(&ops);

    assert_eq!(sequential["events per second"], parallel["events per second"]);
    assert_eq!(
        sequential["total amount of bytes exchanged"],
        parallel["total amount of bytes exchanged"]
    );
    Ok(())
}
