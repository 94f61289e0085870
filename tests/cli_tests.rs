use clap::Parser;
use renumber::cli::Args;
use renumber::config::types::{Config, LogLevel};
use std::path::PathBuf;

#[test]
fn positional_directory_overrides_config() {
    let args = Args::parse_from(["renumber", "/tmp/images"]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.directory, PathBuf::from("/tmp/images"));
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["renumber", "--debug", "--log-level", "quiet"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug)); // --debug wins

    let args = Args::parse_from(["renumber", "--log-level", "info"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Info));

    let args = Args::parse_from(["renumber", "--log-level", "loud"]);
    assert_eq!(args.effective_log_level(), None);
}

#[test]
fn apply_overrides_sets_all_fields() {
    let args = Args::parse_from([
        "renumber",
        "/imgs",
        "--extension",
        ".jpg",
        "--marker",
        "_alt",
        "--max-count",
        "50",
        "--staging-dir",
        ".stage",
        "--log-file",
        "/tmp/renumber.log",
        "--dry-run",
    ]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.directory, PathBuf::from("/imgs"));
    assert_eq!(cfg.extension, "jpg");
    assert_eq!(cfg.variant_marker, "_alt");
    assert_eq!(cfg.max_count, 50);
    assert_eq!(cfg.staging_dir_name, ".stage");
    assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/renumber.log")));
    assert!(cfg.dry_run);
}

#[test]
fn unset_flags_leave_config_alone() {
    let args = Args::parse_from(["renumber"]);
    let mut cfg = Config::new("/from/file").with_max_count(7);
    let before = cfg.clone();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg, before);
    assert!(!args.yes);
}

#[test]
fn short_flags() {
    let args = Args::parse_from(["renumber", "-y", "-e", "webp", "-m", "_b3"]);
    assert!(args.yes);
    assert_eq!(args.extension.as_deref(), Some("webp"));
    assert_eq!(args.marker.as_deref(), Some("_b3"));
}
