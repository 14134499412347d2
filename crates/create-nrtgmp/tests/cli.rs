//! Binary-level precondition tests

use assert_cmd::Command;

#[test]
fn no_arguments_prints_usage_and_fails() {
    let output = Command::cargo_bin("create-nrtgmp-app")
        .unwrap()
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr was: {}", stderr);
}

#[test]
fn help_succeeds() {
    let output = Command::cargo_bin("create-nrtgmp-app")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("scaffolding NRTGMP projects"));
}

#[test]
fn existing_target_directory_fails_before_prompts() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("demo")).unwrap();

    let output = Command::cargo_bin("create-nrtgmp-app")
        .unwrap()
        .current_dir(dir.path())
        .arg("demo")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"), "stderr was: {}", stderr);
}
