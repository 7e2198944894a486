use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn inkboard_cmd() -> Command {
    Command::cargo_bin("inkboard").expect("binary exists")
}

const SCRIPT: &str = r##"
width = 64
height = 48
background = "white"

[[gestures]]
tool = "pen"
color = "#6366f1"
width = 3.0
points = [[10, 10], [20, 10], [20, 20]]

[[gestures]]
tool = "eraser"
width = 8.0
points = [[15, 5], [15, 25]]
"##;

#[test]
fn help_prints_usage() {
    inkboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand sketch surface with undo and PNG export",
        ));
}

#[test]
fn no_arguments_shows_usage_hints() {
    inkboard_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Replay a gesture script"));
}

#[test]
fn renders_script_to_explicit_output() {
    let temp = TempDir::new().unwrap();
    let script_path = temp.path().join("session.toml");
    std::fs::write(&script_path, SCRIPT).unwrap();
    let out_path = temp.path().join("out.png");

    inkboard_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg(&script_path)
        .arg("-o")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 2 strokes"));

    let bytes = std::fs::read(&out_path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn renders_script_into_save_dir_with_timestamped_name() {
    let temp = TempDir::new().unwrap();
    let script_path = temp.path().join("session.toml");
    std::fs::write(&script_path, SCRIPT).unwrap();
    let save_dir = temp.path().join("exports");

    inkboard_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg(&script_path)
        .arg("--save-dir")
        .arg(&save_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("drawing-"));

    let entries: Vec<_> = std::fs::read_dir(&save_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let name = entries[0].as_ref().unwrap().file_name();
    let name = name.to_string_lossy();
    assert!(name.starts_with("drawing-") && name.ends_with(".png"));
}

#[test]
fn missing_script_file_fails_with_context() {
    let temp = TempDir::new().unwrap();
    inkboard_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg(temp.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn rejects_zero_sized_script_surface() {
    let temp = TempDir::new().unwrap();
    let script_path = temp.path().join("bad.toml");
    std::fs::write(&script_path, "width = 0\nheight = 10\n").unwrap();

    inkboard_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg(&script_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-zero"));
}

#[test]
fn init_config_writes_default_file_once() {
    let temp = TempDir::new().unwrap();

    inkboard_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default config"));

    let config_path = temp.path().join("inkboard").join("config.toml");
    assert!(config_path.exists());

    // A second run refuses to clobber the existing file
    inkboard_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
