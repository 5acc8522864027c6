use std::fs;
use std::process::Command;

fn chatline() -> Command {
    Command::new(env!("CARGO_BIN_EXE_chatline"))
}

#[test]
fn validate_accepts_a_script_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("script.json");
    fs::write(
        &path,
        r#"{"participants": ["Alex", "Sam"], "messages": [{"from": "Alex", "text": "Hi"}]}"#,
    )
    .expect("write script");

    let output = chatline()
        .arg("validate")
        .arg(&path)
        .output()
        .expect("run chatline");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 messages"));
    assert!(stdout.contains("self = Alex"));
}

#[test]
fn validate_rejects_unknown_sender() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("script.json");
    fs::write(
        &path,
        r#"{"participants": ["Alex", "Sam"], "messages": [{"from": "Jordan", "text": "Hi"}]}"#,
    )
    .expect("write script");

    let output = chatline()
        .arg("validate")
        .arg(&path)
        .output()
        .expect("run chatline");
    assert!(!output.status.success());
}

#[test]
fn compile_demo_writes_timeline_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out/timeline.json");

    let status = chatline()
        .args(["compile", "--demo", "--output"])
        .arg(&out)
        .status()
        .expect("run chatline");
    assert!(status.success());

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read output")).expect("json");
    assert_eq!(json["messages"].as_array().map(Vec::len), Some(21));
    assert_eq!(json["fps"], 30);
}

#[test]
fn sample_accepts_negative_frames() {
    let output = chatline()
        .args(["sample", "--demo", "--frame", "-10"])
        .output()
        .expect("run chatline");
    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("sample report is json");
    assert_eq!(report["frame"], -10);
    assert_eq!(report["view"]["visible"], 0);
}
