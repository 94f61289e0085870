//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a commented template on request (`--init-config`).
//!
//! Notes:
//! - Unknown XML fields are rejected so typos surface instead of being ignored.
//! - Values are whitespace-trimmed; empty values mean "use the default".

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{default_config_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use super::{
    CONFIG_ENV, DIRECTORY_DEFAULT, EXTENSION_DEFAULT, MAX_COUNT_DEFAULT, STAGING_DIR_DEFAULT,
    VARIANT_MARKER_DEFAULT,
};
use crate::platform::{set_dir_mode_0700, set_file_mode_0600, write_config_secure_new_0600};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    directory: Option<String>,
    extension: Option<String>,
    variant_marker: Option<String>,
    #[serde(default, deserialize_with = "de_usize_trimmed_opt")]
    max_count: Option<usize>,
    staging_dir: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
}

// Custom deserializer that trims surrounding whitespace for optional usize
fn de_usize_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<usize>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("max_count '{s}': {e}"))),
    }
}

fn trimmed(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

// Map XmlConfig -> Config, falling back to defaults field by field.
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(d) = trimmed(parsed.directory) {
        cfg.directory = PathBuf::from(d);
    }
    if let Some(ext) = trimmed(parsed.extension) {
        cfg.extension = ext.trim_start_matches('.').to_string();
    }
    // the marker is matched verbatim, so only surrounding whitespace is dropped
    if let Some(m) = trimmed(parsed.variant_marker) {
        cfg.variant_marker = m;
    }
    if let Some(n) = parsed.max_count {
        cfg.max_count = n;
    }
    if let Some(s) = trimmed(parsed.staging_dir) {
        cfg.staging_dir_name = s;
    }
    if let Some(lvl) = trimmed(parsed.log_level) {
        cfg.log_level = match lvl.parse::<LogLevel>() {
            Ok(l) => l,
            Err(e) => bail!(e),
        };
    }
    cfg.log_file = trimmed(parsed.log_file).map(PathBuf::from);

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid value in '{}'", path.display()))
}

/// Load the effective file config.
///
/// - `$RENUMBER_CONFIG` set: that file must exist and parse.
/// - Otherwise the default location is used if present, else built-in defaults.
pub fn load_config() -> Result<Config> {
    let explicit = env::var_os(CONFIG_ENV).is_some();
    let Some(path) = default_config_path() else {
        debug!("No config location could be determined; using defaults");
        return Ok(Config::default());
    };

    if !path.exists() {
        if explicit {
            bail!(
                "{CONFIG_ENV} points to '{}', which does not exist",
                path.display()
            );
        }
        debug!("No config file at {}; using defaults", path.display());
        return Ok(Config::default());
    }

    debug!("Loading config from {}", path.display());
    load_config_from_xml_path(&path)
}

/// Write a commented template config to `path` (fails if it already exists).
pub fn create_template_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("Config file already exists: {}", path.display());
    }
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
        let _ = set_dir_mode_0700(parent);
    }

    let content = format!(
        "<!--\n  renumber configuration (XML)\n\n  directory       -> folder whose files are renumbered (not recursive)\n  extension       -> file extension to process, without the dot (case-sensitive)\n  variant_marker  -> substring marking alternate files; they are numbered after regular ones\n  max_count       -> highest index assigned; extra files are left untouched\n  staging_dir     -> temporary subdirectory used during the two-phase move\n  log_level       -> quiet | normal | info | debug\n  log_file        -> optional path to a log file\n\n  CLI flags override XML values.\n-->\n<config>\n  <directory>{}</directory>\n  <extension>{}</extension>\n  <variant_marker>{}</variant_marker>\n  <max_count>{}</max_count>\n  <staging_dir>{}</staging_dir>\n  <log_level>normal</log_level>\n  <log_file></log_file>\n</config>\n",
        DIRECTORY_DEFAULT,
        EXTENSION_DEFAULT,
        VARIANT_MARKER_DEFAULT,
        MAX_COUNT_DEFAULT,
        STAGING_DIR_DEFAULT
    );

    write_config_secure_new_0600(path, content.as_bytes())?;
    let _ = set_file_mode_0600(path);

    info!("Created template config at {}", path.display());
    Ok(())
}
