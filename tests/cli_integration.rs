//! Integration tests for the `st` CLI.
//!
//! Each test runs `st` as a subprocess against its own snapshot file in a
//! temp directory and verifies stdout and/or snapshot effects.

use std::path::PathBuf;
use std::process::Command;

use chrono::{Duration, Local};
use tempfile::TempDir;

/// Get the path to the built `st` binary.
fn st_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("st");
    path
}

/// Run `st` in `dir`, returning (stdout, stderr, success).
fn st(dir: &TempDir, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(st_bin())
        .current_dir(dir.path())
        .args(args)
        .output()
        .expect("failed to run st");
    (
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
        output.status.success(),
    )
}

#[test]
fn first_use_shows_a_fresh_task_list() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, ok) = st(&dir, &["list"]);
    assert!(ok);
    assert!(stdout.starts_with("Task List: due "));
    // Read-only commands leave no snapshot behind.
    assert!(!dir.path().join("tasktree.json").exists());
}

#[test]
fn add_persists_and_next_recommends_it() {
    let dir = TempDir::new().unwrap();

    let (stdout, _, ok) = st(
        &dir,
        &[
            "add",
            "Write essay",
            "--date",
            "2030-09-01",
            "--hour",
            "5",
            "--pm",
        ],
    );
    assert!(ok);
    assert_eq!(stdout, "added 'Write essay' (due 2030 SEPTEMBER 1, 5:00 pm)\n");
    assert!(dir.path().join("tasktree.json").exists());

    let (stdout, _, ok) = st(&dir, &["next"]);
    assert!(ok);
    assert_eq!(stdout, "Next task: Write essay (due 2030 SEPTEMBER 1, 5:00 pm)\n");
}

#[test]
fn next_prefers_the_earlier_of_two_tasks() {
    let dir = TempDir::new().unwrap();
    st(&dir, &["add", "Later", "--date", "2030-09-20"]);
    st(&dir, &["add", "Sooner", "--date", "2030-09-10"]);

    let (stdout, _, ok) = st(&dir, &["next"]);
    assert!(ok);
    assert!(stdout.starts_with("Next task: Sooner"));
}

#[test]
fn toggling_the_only_task_collapses_the_list() {
    let dir = TempDir::new().unwrap();
    st(&dir, &["add", "Write essay", "--date", "2030-09-01"]);

    let (stdout, _, ok) = st(&dir, &["toggle", "0"]);
    assert!(ok);
    assert_eq!(stdout, "completed 'Write essay'\n");

    // The root absorbed its finished child and completed itself.
    let (stdout, _, ok) = st(&dir, &["list"]);
    assert!(ok);
    assert_eq!(stdout.lines().count(), 1);

    let (stdout, _, ok) = st(&dir, &["show", ""]);
    assert!(ok);
    assert!(stdout.contains("Completed: YES"));
}

#[test]
fn subdividing_a_bulk_task_creates_day_buckets() {
    let dir = TempDir::new().unwrap();
    let due = (Local::now() + Duration::days(6)).format("%Y-%m-%d").to_string();
    st(&dir, &["add", "Essay", "--date", &due, "--count", "10"]);

    let (stdout, _, ok) = st(&dir, &["subdivide", "0"]);
    assert!(ok);
    assert!(stdout.starts_with("planned through "));

    let (stdout, _, ok) = st(&dir, &["list"]);
    assert!(ok);
    // Root, the bulk task, and its buckets; the first day always covers
    // items 0 and 1 at this rate.
    assert!(stdout.lines().count() >= 6);
    assert!(stdout.contains("Essay: 0 - 1"));
}

#[test]
fn unknown_paths_fail_with_a_clear_error() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, ok) = st(&dir, &["toggle", "7"]);
    assert!(!ok);
    assert!(stderr.contains("no task at path '7'"));
}

#[test]
fn rejected_dates_leave_the_snapshot_untouched() {
    let dir = TempDir::new().unwrap();
    st(&dir, &["add", "Fine", "--date", "2030-09-01"]);

    let before = std::fs::read_to_string(dir.path().join("tasktree.json")).unwrap();
    let (_, stderr, ok) = st(
        &dir,
        &["add", "Broken", "--date", "2030-02-30", "--minute", "0"],
    );
    assert!(!ok);
    assert!(stderr.contains("error"));
    let after = std::fs::read_to_string(dir.path().join("tasktree.json")).unwrap();
    assert_eq!(before, after);
}
