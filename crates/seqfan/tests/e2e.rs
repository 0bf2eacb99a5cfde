//! End-to-end CLI integration tests.
//!
//! These drive the real binary, so every assertion about ordering is
//! per-task only; interleaving across the four tasks is unspecified.

use assert_cmd::Command;
use predicates::prelude::*;

fn seqfan() -> Command {
    Command::cargo_bin("seqfan").expect("binary not found")
}

/// Run the binary and return stdout split into lines.
fn run_lines(args: &[&str]) -> Vec<String> {
    let output = seqfan().args(args).output().expect("failed to run binary");
    assert!(output.status.success(), "run failed: {output:?}");
    String::from_utf8(output.stdout)
        .expect("stdout not utf-8")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Extract a numeric `key=value` field from one line.
fn field(line: &str, key: &str) -> u64 {
    line.split_whitespace()
        .find_map(|part| part.strip_prefix(key))
        .unwrap_or_else(|| panic!("no field {key} in {line}"))
        .parse()
        .unwrap_or_else(|_| panic!("non-numeric field {key} in {line}"))
}

fn values_for(lines: &[String], tag: &str) -> Vec<u64> {
    let prefix = format!("[{tag}]");
    lines
        .iter()
        .filter(|l| l.starts_with(&prefix))
        .map(|l| field(l, "value="))
        .collect()
}

#[test]
fn help_flag() {
    seqfan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("harness"));
}

#[test]
fn version_flag() {
    seqfan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("seqfan"));
}

#[test]
fn four_joins_then_the_final_marker() {
    let lines = run_lines(&["4", "0"]);

    assert_eq!(lines.iter().filter(|l| l.starts_with("[worker]")).count(), 4);
    assert_eq!(lines.iter().filter(|l| l.starts_with("[child]")).count(), 4);
    assert_eq!(lines.iter().filter(|l| l.starts_with("[join]")).count(), 4);

    let last = lines.last().unwrap();
    assert!(last.starts_with("[main] pid="));
    assert!(last.ends_with(" terminated"));
}

#[test]
fn all_four_sequences_emit_their_values() {
    let lines = run_lines(&["6", "0"]);

    assert_eq!(values_for(&lines, "sum"), [0, 1, 3, 6, 10, 15]);
    assert_eq!(values_for(&lines, "product"), [1, 2, 6, 24, 120, 720]);
    assert_eq!(values_for(&lines, "pow2"), [1, 2, 4, 8, 16, 32]);
    assert_eq!(values_for(&lines, "fib"), [0, 1, 1, 2, 3, 5]);
}

#[test]
fn per_task_lines_keep_internal_order() {
    let lines = run_lines(&["3", "0"]);

    for (task_id, tag) in [(1, "sum"), (2, "product"), (3, "pow2"), (4, "fib")] {
        let pos = |prefix: &str| {
            lines
                .iter()
                .position(|l| l.starts_with(prefix))
                .unwrap_or_else(|| panic!("no line starting with {prefix}"))
        };
        let worker = pos(&format!("[worker] task={task_id} "));
        let child = pos(&format!("[child] task={task_id} "));
        let join = pos(&format!("[join] task={task_id} "));
        let terms: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.starts_with(&format!("[{tag}] task={task_id} ")))
            .map(|(i, _)| i)
            .collect();

        assert_eq!(terms.len(), 3);
        assert!(worker < child);
        assert!(child < terms[0]);
        assert!(*terms.last().unwrap() < join);

        // The join line names the same process the child header reported.
        assert_eq!(field(&lines[join], "child="), field(&lines[child], "pid="));
    }
}

#[test]
fn term_indices_are_contiguous_per_task() {
    let lines = run_lines(&["5", "0"]);

    for (tag, first) in [("sum", 0), ("product", 1), ("pow2", 0), ("fib", 0)] {
        let indices: Vec<u64> = lines
            .iter()
            .filter(|l| l.starts_with(&format!("[{tag}]")))
            .map(|l| field(l, "i="))
            .collect();
        let expected: Vec<u64> = (first..first + 5).collect();
        assert_eq!(indices, expected, "indices out of order for {tag}");
    }
}

#[test]
fn runs_are_deterministic_per_sequence() {
    let first = run_lines(&["8", "0"]);
    let second = run_lines(&["8", "0"]);

    for tag in ["sum", "product", "pow2", "fib"] {
        assert_eq!(values_for(&first, tag), values_for(&second, tag));
    }
}

#[test]
fn all_joins_report_normal_exit() {
    let lines = run_lines(&["2", "0"]);
    for line in lines.iter().filter(|l| l.starts_with("[join]")) {
        assert!(line.ends_with("outcome=0"), "unexpected outcome: {line}");
    }
}

#[test]
fn zero_iterations_rejected() {
    seqfan()
        .arg("0")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("must be positive"))
        .stderr(predicate::str::contains("Usage: seqfan"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn negative_iterations_rejected() {
    seqfan()
        .arg("-3")
        .assert()
        .failure()
        .code(4)
        .stdout(predicate::str::is_empty());
}

#[test]
fn child_mode_runs_exactly_one_generator() {
    let lines = run_lines(&["3", "0", "--child", "pow2", "--task-id", "9"]);

    assert!(lines[0].starts_with("[child] task=9 "));
    assert_eq!(values_for(&lines, "pow2"), [1, 2, 4]);
    assert!(!lines.iter().any(|l| l.starts_with("[worker]")));
    assert!(!lines.iter().any(|l| l.starts_with("[join]")));
    assert!(!lines.iter().any(|l| l.starts_with("[main]")));
}

#[test]
fn completion_flag() {
    seqfan()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}
