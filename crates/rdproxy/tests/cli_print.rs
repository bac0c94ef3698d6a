//! Integration tests for `rdproxy print` output.
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.

use std::fs;
use std::process::Command;

const CONFIG: &str = "[Server]\nHost=127.0.0.1\nPort=3389\n\
    [Target]\nFixedTarget=TRUE\nHost=10.0.0.5\nPort=3390\n\
    [Channels]\nPassthrough=rdpdr,rdpsnd\n\
    [Plugins]\nModules=capture,demo\nRequired=capture\n\
    [Certificates]\nCertificateFile=server.crt\nPrivateKeyFile=server.key\n\
    RdpKeyContent=super-secret-rdp-key\n";

fn setup() -> tempfile::TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("server.crt"), "certificate").expect("Failed to write cert");
    fs::write(temp_dir.path().join("server.key"), "key").expect("Failed to write key");
    fs::write(temp_dir.path().join("proxy.ini"), CONFIG).expect("Failed to write config");
    temp_dir
}

fn run_print(args: &[&str]) -> (tempfile::TempDir, std::process::Output) {
    let temp_dir = setup();
    let output = Command::new(env!("CARGO_BIN_EXE_rdproxy"))
        .current_dir(temp_dir.path())
        .args(args)
        .output()
        .expect("Failed to execute 'rdproxy print'");

    assert!(
        output.status.success(),
        "rdproxy print failed with exit code {:?}. stderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    (temp_dir, output)
}

#[test]
fn test_print_dump() {
    let (_dir, output) = run_print(&["print", "proxy.ini"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.starts_with("Proxy configuration:"));
    assert!(stdout.contains("\t\tTargetHost: 10.0.0.5"));
    assert!(stdout.contains("\t\t- rdpdr\n\t\t- rdpsnd"));
    assert!(stdout.contains("\t\tRdpKeyContent: set"));
    assert!(
        !stdout.contains("super-secret-rdp-key"),
        "inline key content must not be printed: {}",
        stdout
    );
}

#[test]
fn test_print_stdout_is_clean() {
    let (_dir, output) = run_print(&["print", "proxy.ini"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
    assert!(
        stderr.is_empty(),
        "stderr should be empty in default (quiet) mode, got: {}",
        stderr
    );
}

#[test]
fn test_print_verbose_logs_to_stderr() {
    let (_dir, output) = run_print(&["-v", "print", "proxy.ini"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains("core.config.load_completed"),
        "verbose mode should log the load, got: {}",
        stderr
    );
}

#[test]
fn test_print_json() {
    let (_dir, output) = run_print(&["print", "proxy.ini", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let config: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be valid JSON");

    assert_eq!(config["server"]["port"], 3389);
    assert_eq!(config["target"]["fixed_target"], true);
    assert_eq!(
        config["channels"]["passthrough"],
        serde_json::json!(["rdpdr", "rdpsnd"])
    );
    assert_eq!(
        config["plugins"]["modules"],
        serde_json::json!(["capture", "demo"])
    );
    assert_eq!(config["certificates"]["certificate"]["file"], "server.crt");
    assert_eq!(config["certificates"]["rdp_key"]["content"], "set");
    assert!(!stdout.contains("super-secret-rdp-key"));
}
