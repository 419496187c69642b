use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn doodleboard_cmd() -> Command {
    Command::cargo_bin("doodleboard").expect("binary exists")
}

#[test]
fn doodleboard_help_prints_usage() {
    doodleboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Freehand drawing surface"));
}

#[test]
fn replay_help_describes_subcommand() {
    doodleboard_cmd()
        .args(["replay", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("save the result as PNG"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn bare_script_without_subcommand_is_rejected() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.txt");
    let output = temp.path().join("drawing.png");
    std::fs::write(&script, "init 10 10\n").unwrap();

    doodleboard_cmd()
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure();
    assert!(!output.exists());
}

#[test]
fn output_flag_is_required() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.txt");
    std::fs::write(&script, "init 10 10\n").unwrap();

    doodleboard_cmd()
        .arg("replay")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn replay_writes_png() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.txt");
    let output = temp.path().join("drawing.png");
    std::fs::write(
        &script,
        "init 400 300\nmode paint\ncolor #e53e3e\nwidth 6\ndown 10 10\nmove 50 50\nup\n",
    )
    .unwrap();

    doodleboard_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("replay")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 400x300 drawing"));

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn replay_without_init_uses_size_flags() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.txt");
    let output = temp.path().join("drawing.png");
    std::fs::write(&script, "mode erase\ndown 1 1\nmove 5 5\nleave\n").unwrap();

    doodleboard_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("replay")
        .arg(&script)
        .args(["-o"])
        .arg(&output)
        .args(["--width", "64", "--height", "32"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 64x32 drawing"));
}

#[test]
fn invalid_script_reports_line() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.txt");
    let output = temp.path().join("drawing.png");
    std::fs::write(&script, "init 10 10\nscribble 1 2\n").unwrap();

    doodleboard_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("replay")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn config_flag_sets_tool_defaults() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    let script = temp.path().join("script.txt");
    let output = temp.path().join("drawing.png");
    std::fs::write(&config, "[drawing]\ndefault_brush_width = 50\n").unwrap();
    std::fs::write(&script, "init 40 40\nmode paint\ndown 5 20\nmove 35 20\nup\n").unwrap();

    doodleboard_cmd()
        .arg("replay")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();
    assert!(output.exists());
}

#[cfg(target_os = "linux")]
#[test]
fn failed_flush_is_reported() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.txt");
    std::fs::write(&script, "init 8 8\n").unwrap();

    doodleboard_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("replay")
        .arg(&script)
        .args(["--output", "/dev/full"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Wrote").not())
        .stderr(predicate::str::contains("/dev/full"));
}
