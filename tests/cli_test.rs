use std::fs;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

#[test]
fn test_corrupt_explicit_config_is_fatal() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("pharmabot.json");
    fs::write(&config_path, r#"{ "port": 5977, bad"#).expect("Failed to write config");

    let output = Command::new(env!("CARGO_BIN_EXE_pharmabot"))
        .arg("--config")
        .arg(&config_path)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run pharmabot");

    assert!(!output.status.success(), "must not start on a corrupt config");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid config file") && stdout.contains("invalid config file"),
        "error not reported. stdout: {} stderr: {}",
        stdout,
        stderr
    );
    assert!(!stdout.contains("Listening on"));

    // Operator's file is left in place
    assert!(config_path.exists());
    assert!(!temp_dir.path().join("pharmabot.json.corrupt").exists());
}

#[test]
fn test_corrupt_default_config_warns() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join("pharmabot");
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");
    fs::write(config_dir.join("config.json"), "{ not valid json").expect("Failed to write config");

    // Falls back to defaults and serves, so stop it once it had time to start
    let mut child = Command::new(env!("CARGO_BIN_EXE_pharmabot"))
        .args(["--host", "127.0.0.1", "--port", "0"])
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn pharmabot");

    thread::sleep(Duration::from_secs(2));
    let _ = child.kill();
    let output = child.wait_with_output().expect("Failed to collect output");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Config file corrupted"),
        "warning not logged: {}",
        stdout
    );
    assert!(config_dir.join("config.json.corrupt").exists());
}
