use std::process::Command;

#[test]
fn init_creates_valid_toml() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_commitlink"))
        .arg("init")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "commitlink init failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let config_path = dir.path().join(".commitlink.toml");
    assert!(config_path.exists(), ".commitlink.toml should exist");

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[tracker]"));
    assert!(content.contains("[repo]"));
    assert!(content.contains("[output]"));

    // The template must satisfy the required-field schema as written.
    let config = commitlink_core::CommitlinkConfig::from_toml(&content).unwrap();
    assert!(!config.tracker.projects.is_empty());
}

#[test]
fn init_refuses_if_exists() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".commitlink.toml"), "# existing").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_commitlink"))
        .arg("init")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn run_without_config_fails_with_hint() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_commitlink"))
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(".commitlink.toml"), "stderr: {stderr}");
}

#[test]
fn run_with_incomplete_config_fails_at_startup() {
    let dir = tempfile::tempdir().unwrap();
    // Missing [repo] and [output] entirely.
    std::fs::write(
        dir.path().join(".commitlink.toml"),
        r#"
[tracker]
base_url = "https://issues.example.org"
projects = ["PROJ"]
issue_types = ["Bug"]
statuses = ["Resolved"]
resolutions = ["Fixed"]
created_before_days = 90
"#,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_commitlink"))
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
}
