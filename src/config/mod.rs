//! Config module.
//! Provides configuration types, default paths, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{create_template_config, load_config, load_config_from_xml_path};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "RENUMBER_CONFIG";

/// Defaults shared across submodules.
pub const DIRECTORY_DEFAULT: &str = "./protardios/protardios";
pub const EXTENSION_DEFAULT: &str = "png";
pub const VARIANT_MARKER_DEFAULT: &str = "_b2";
pub const MAX_COUNT_DEFAULT: usize = 2000;
pub const STAGING_DIR_DEFAULT: &str = "temp_rename";
