use assert_cmd::Command;
use assert_fs::prelude::*;
use std::fs;
use std::path::Path;

/// Command with an isolated config file so the user's own config is never read.
fn renumber_cmd(cfg_dir: &Path) -> Command {
    let cfg = cfg_dir.join("config.xml");
    if !cfg.exists() {
        fs::write(&cfg, "<config><log_level>quiet</log_level></config>").unwrap();
    }
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("renumber"));
    cmd.env("RENUMBER_CONFIG", &cfg);
    cmd
}

#[test]
fn binary_print_config_succeeds() {
    let td = assert_fs::TempDir::new().unwrap();
    renumber_cmd(td.path()).arg("--print-config").assert().success();
}

#[test]
fn yes_flag_renames_without_prompt() {
    let td = assert_fs::TempDir::new().unwrap();
    let images = td.child("images");
    images.child("5.png").write_str("five").unwrap();
    images.child("3.png").write_str("three").unwrap();
    images.child("5_b2.png").write_str("alt").unwrap();

    let output = renumber_cmd(td.path())
        .arg(images.path())
        .arg("--yes")
        .output()
        .expect("spawn binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("3.png -> 1.png"), "stdout: {stdout}");
    assert!(stdout.contains("5_b2.png -> 3.png"), "stdout: {stdout}");

    assert_eq!(fs::read_to_string(images.path().join("1.png")).unwrap(), "three");
    assert_eq!(fs::read_to_string(images.path().join("3.png")).unwrap(), "alt");
    assert!(!images.path().join("temp_rename").exists());
}

#[test]
fn declining_the_prompt_changes_nothing() {
    let td = assert_fs::TempDir::new().unwrap();
    let images = td.child("images");
    images.child("9.png").write_str("nine").unwrap();

    let output = renumber_cmd(td.path())
        .arg(images.path())
        .write_stdin("n\n")
        .output()
        .expect("spawn binary");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Operation cancelled."));
    assert!(images.path().join("9.png").exists());
    assert!(!images.path().join("1.png").exists());
}

#[test]
fn confirming_the_prompt_renames() {
    let td = assert_fs::TempDir::new().unwrap();
    let images = td.child("images");
    images.child("9.png").write_str("nine").unwrap();

    renumber_cmd(td.path())
        .arg(images.path())
        .write_stdin("yes\n")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(images.path().join("1.png")).unwrap(), "nine");
}

#[test]
fn dry_run_prints_plan_only() {
    let td = assert_fs::TempDir::new().unwrap();
    let images = td.child("images");
    images.child("40.png").touch().unwrap();

    let output = renumber_cmd(td.path())
        .arg(images.path())
        .arg("--dry-run")
        .output()
        .expect("spawn binary");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("40.png -> 1.png"));
    assert!(images.path().join("40.png").exists());
}

#[test]
fn missing_directory_exits_non_zero() {
    let td = assert_fs::TempDir::new().unwrap();
    renumber_cmd(td.path())
        .arg(td.path().join("absent"))
        .arg("--yes")
        .assert()
        .failure();
}

#[test]
fn commit_failure_exits_non_zero() {
    let td = assert_fs::TempDir::new().unwrap();
    let images = td.child("images");
    images.child("7.png").touch().unwrap();
    images.child("1.png").create_dir_all().unwrap();

    renumber_cmd(td.path())
        .arg(images.path())
        .arg("--yes")
        .assert()
        .failure();
    assert!(images.path().join("temp_rename").join("1.png").exists());
}

#[test]
fn init_config_writes_template_once() {
    let td = assert_fs::TempDir::new().unwrap();
    // canonical so no ancestor is a symlink (macOS /var -> /private/var)
    let cfg = fs::canonicalize(td.path()).unwrap().join("fresh").join("config.xml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("renumber"));
    cmd.env("RENUMBER_CONFIG", &cfg).arg("--init-config").assert().success();
    assert!(fs::read_to_string(&cfg).unwrap().contains("<max_count>2000</max_count>"));

    let mut again = Command::new(assert_cmd::cargo::cargo_bin!("renumber"));
    again.env("RENUMBER_CONFIG", &cfg).arg("--init-config").assert().failure();
}
