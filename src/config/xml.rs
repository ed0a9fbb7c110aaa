//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - A missing default file means "no config"; a missing explicit file is an error.
//!
//! Notes:
//! - Unknown XML fields are rejected to surface misconfigurations early.
//! - Values are whitespace-trimmed; an empty `<root>` counts as unset.

use anyhow::{Context, Result, anyhow, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::{ConfigSource, locate_config};
use super::types::{Config, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "root")]
    root: Option<String>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "max_suffix_attempts", default, deserialize_with = "de_u64_trimmed_opt")]
    max_suffix_attempts: Option<u64>,
}

// Trims surrounding whitespace; a blank element is treated as absent.
fn de_u64_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<u64>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("max_suffix_attempts '{s}': {e}"))),
    }
}

// Map XmlConfig -> Config
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = parsed.root.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.root = Some(PathBuf::from(trimmed));
        }
    }

    if let Some(s) = parsed.log_level.as_deref() {
        cfg.log_level = s.trim().parse::<LogLevel>().map_err(|e| anyhow!(e))?;
    }

    if let Some(n) = parsed.max_suffix_attempts {
        if n == 0 {
            bail!("max_suffix_attempts must be at least 1");
        }
        cfg.max_suffix_attempts = n;
    }

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid config xml '{}'", path.display()))
}

/// Locate and load the config file.
///
/// Returns `Ok(None)` when only the default location was consulted and no
/// file exists there. Explicit locations (`--config`, `$FIX_FILENAMES_CONFIG`)
/// must exist.
pub fn load_config(flag: Option<&Path>) -> Result<Option<(ConfigSource, Config)>> {
    let Some(source) = locate_config(flag) else {
        return Ok(None);
    };

    if !source.path().exists() {
        if source.is_explicit() {
            bail!("config file not found: {}", source.path().display());
        }
        debug!(path = %source.path().display(), "no config file at default location");
        return Ok(None);
    }

    let cfg = load_config_from_xml_path(source.path())?;
    Ok(Some((source, cfg)))
}
