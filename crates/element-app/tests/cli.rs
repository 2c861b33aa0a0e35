//! Runs the `element` binary headless and checks its output streams.

use std::process::Command;

use element_core::state::Frame;

#[test]
fn test_json_mode_stdout_is_frames_only() {
    let output = Command::new(env!("CARGO_BIN_EXE_element"))
        .args(["--json", "--fast", "--ticks", "3"])
        .env("RUST_LOG", "info")
        .output()
        .expect("run element");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let frames: Vec<Frame> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap_or_else(|e| panic!("{e}: {line}")))
        .collect();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[2].time.tick, 3);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("session finished"));
}

#[test]
fn test_rejects_unknown_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_element"))
        .arg("--bogus")
        .output()
        .expect("run element");
    assert!(!output.status.success());
}
