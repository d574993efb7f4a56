use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("lumenrig");
    // Keep log files out of the crate directory
    cmd.args(["--log-file", "/dev/null"]);
    cmd
}

#[test]
fn test_cli_outputs_default_rig_yaml() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("name: Coffee House"))
        .stdout(predicate::str::contains("lamp"))
        .stdout(predicate::str::contains("#ffd36c"))
        .stdout(predicate::str::contains("spot-rear"))
        .stdout(predicate::str::contains("windows"));
}

#[test]
fn test_cli_set_color() {
    cmd()
        .args(["--set", "lamp=#FF0000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#ff0000"))
        .stdout(predicate::str::contains("#ffd36c").not());
}

#[test]
fn test_cli_set_intensity() {
    cmd()
        .args(["--set", "lamp=40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("intensity: 0.4"));
}

#[test]
fn test_cli_set_applies_to_whole_group() {
    let output = cmd()
        .args(["--set", "env=10"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    // Both spots are in the env group
    assert_eq!(stdout.matches("intensity: 0.1").count(), 2);
}

#[test]
fn test_cli_unknown_control_fails() {
    cmd()
        .args(["--set", "ghost=40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown control 'ghost'"));
}

#[test]
fn test_cli_malformed_color_fails() {
    cmd()
        .args(["--set", "lamp=#GGGGGG"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for 'lamp'"));
}

#[test]
fn test_cli_malformed_intensity_fails() {
    cmd()
        .args(["--set", "lamp=bright"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for 'lamp'"));
}

#[test]
fn test_cli_clamp_is_the_default_policy() {
    cmd()
        .args(["--set", "lamp=150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("intensity: 1.0"));
}

#[test]
fn test_cli_reject_policy_fails_out_of_range() {
    cmd()
        .args(["--policy", "reject", "--set", "lamp=150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for 'lamp'"));
}

#[test]
fn test_cli_tree_output() {
    cmd()
        .arg("--tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee House"))
        .stdout(predicate::str::contains("  lights"))
        .stdout(predicate::str::contains("    lamp"))
        .stdout(predicate::str::contains("  surfaces"))
        .stdout(predicate::str::contains("    lamp-shade"));
}

#[test]
fn test_cli_rig_name_override() {
    cmd()
        .args(["--rig-name", "My Rig"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: My Rig"));
}

#[test]
fn test_cli_config_file_and_output_file() {
    let dir = std::env::temp_dir().join("lumenrig-test-cli");
    std::fs::create_dir_all(&dir).unwrap();
    let config_path = dir.join("rig.toml");
    let output_path = dir.join("state.yaml");

    std::fs::write(
        &config_path,
        r##"
[rig]
name = "File Rig"
"##,
    )
    .unwrap();

    cmd()
        .args(["--config", config_path.to_str().unwrap()])
        .args(["--output", output_path.to_str().unwrap()])
        .assert()
        .success();

    let yaml = std::fs::read_to_string(&output_path).unwrap();
    // File overrides the name; the built-in lights survive layering
    assert!(yaml.contains("name: File Rig"));
    assert!(yaml.contains("lamp"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_cli_missing_config_file_fails() {
    cmd()
        .args(["--config", "/definitely/not/a/rig.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load rig configuration"));
}

#[test]
fn test_cli_save_config_roundtrip() {
    let dir = std::env::temp_dir().join("lumenrig-test-save");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("effective.toml");

    cmd()
        .args(["--save-config", path.to_str().unwrap()])
        .assert()
        .success();

    let toml_str = std::fs::read_to_string(&path).unwrap();
    assert!(toml_str.contains("name = \"Coffee House\""));
    assert!(toml_str.contains("lamp"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_cli_ordered_sets_last_wins() {
    cmd()
        .args(["--set", "lamp=20", "--set", "lamp=60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("intensity: 0.6"));
}
