use std::process::Command;

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cockpit"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute cockpit");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("window layouts"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cockpit"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute cockpit");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cockpit"));
}

#[test]
fn show_unknown_profile_fails() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cockpit"));
    cmd.args(["show", "no-such-profile-a8f2"]);

    // Act
    let output = cmd.output().expect("failed to execute cockpit");

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no-such-profile-a8f2"));
}

#[test]
fn apply_unknown_profile_fails() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cockpit"));
    cmd.args(["apply", "no-such-profile-a8f2"]);

    // Act
    let output = cmd.output().expect("failed to execute cockpit");

    // Assert
    assert!(!output.status.success());
}

#[test]
fn capture_requires_a_profile_name() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cockpit"));
    cmd.arg("capture");

    // Act
    let output = cmd.output().expect("failed to execute cockpit");

    // Assert: clap rejects the missing positional
    assert!(!output.status.success());
}
