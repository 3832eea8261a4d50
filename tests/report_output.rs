use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_with_home(home: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cli-wrapped"))
        .env("HOME", home)
        .output()
        .expect("run binary")
}

#[test]
fn renders_boxed_report_for_history() {
    let home = tempfile::tempdir().unwrap();
    fs::write(
        home.path().join(".bash_history"),
        "ls -la\nls -la\ncd /tmp\ncat notes.md report.pdf\n\n",
    )
    .unwrap();

    let output = run_with_home(home.path());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    // frame
    assert!(stdout.contains("┌┌"));
    assert!(stdout.contains("└└"));
    assert!(stdout.contains("││"));

    // ranked sections: 5 commands total, 2 file tokens total
    assert!(stdout.contains("Top 10 most frequently used commands"));
    assert!(stdout.contains("1. ls -la"));
    assert!(stdout.contains(" 40.0%"));
    assert!(stdout.contains("Top 10 most frequently accessed files"));
    assert!(stdout.contains("notes.md"));
    assert!(stdout.contains("report.pdf"));
    assert!(stdout.contains(" 50.0%"));

    assert!(stdout.contains("Total commands: 5"));
    assert!(stdout.contains("Total files found: 2"));
}

#[test]
fn empty_history_reports_zero_totals() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join(".bash_history"), "").unwrap();

    let output = run_with_home(home.path());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("┌┌"));
    assert!(stdout.contains("Top 10 most frequently used commands"));
    assert!(stdout.contains("Total commands: 0"));
    assert!(stdout.contains("Total files found: 0"));
}
