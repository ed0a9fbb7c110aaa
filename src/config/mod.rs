//! Config module.
//! Provides configuration types, config file location, XML loading, and root validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{ConfigSource, CONFIG_ENV, default_config_path, locate_config};
pub use types::{Config, LogLevel};
pub use validate::validate_root;
pub use xml::{load_config, load_config_from_xml_path};
