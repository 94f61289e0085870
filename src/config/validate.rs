//! Config validation logic.
//! Checks the static parameters before any filesystem work starts. Directory
//! existence is checked by discovery so it maps onto its own error kind.

use std::path::{Component, Path};
use tracing::info;

use crate::errors::RenumberError;

use super::types::Config;

impl Config {
    /// Validate extension, marker, cap and staging name.
    pub fn validate(&self) -> Result<(), RenumberError> {
        let invalid = |msg: String| Err(RenumberError::InvalidConfig(msg));

        if self.extension.is_empty() {
            return invalid("extension must not be empty".into());
        }
        if self.extension.contains('.') || has_separator(&self.extension) {
            return invalid(format!(
                "extension '{}' must be a bare extension such as 'png'",
                self.extension
            ));
        }
        if has_separator(&self.variant_marker) {
            return invalid(format!(
                "variant_marker '{}' must not contain path separators",
                self.variant_marker
            ));
        }
        if self.max_count == 0 {
            return invalid("max_count must be at least 1".into());
        }

        let staging = Path::new(&self.staging_dir_name);
        let mut components = staging.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => {
                return invalid(format!(
                    "staging_dir '{}' must be a single directory name",
                    self.staging_dir_name
                ));
            }
        }
        if staging
            .extension()
            .is_some_and(|e| e == std::ffi::OsStr::new(&self.extension))
        {
            return invalid(format!(
                "staging_dir '{}' must not end in .{}",
                self.staging_dir_name, self.extension
            ));
        }

        info!(
            "Config validated: directory='{}' extension='{}' marker='{}' max_count={} log_file='{}'",
            self.directory.display(),
            self.extension,
            self.variant_marker,
            self.max_count,
            self.log_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<none>".into())
        );
        Ok(())
    }
}

fn has_separator(s: &str) -> bool {
    s.contains('/') || s.contains('\\')
}
