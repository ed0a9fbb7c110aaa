//! Config file location.
//! An explicit `--config` wins, then `$FIX_FILENAMES_CONFIG`, then the
//! OS-appropriate default under the user's config dir.

use dirs::config_dir;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FIX_FILENAMES_CONFIG";

/// Where the config file came from. Explicit sources must exist; the default may not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Flag(PathBuf),
    Env(PathBuf),
    Default(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Flag(p) | ConfigSource::Env(p) | ConfigSource::Default(p) => p,
        }
    }

    pub fn is_explicit(&self) -> bool {
        !matches!(self, ConfigSource::Default(_))
    }
}

/// OS-appropriate default config path (ignores the env override).
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(mut base) = config_dir() {
        base.push("fix_filenames");
        base.push("config.xml");
        Some(base)
    } else {
        env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("fix_filenames")
                .join("config.xml")
        })
    }
}

/// Pick the config file to read, honoring flag > env > default.
pub fn locate_config(flag: Option<&Path>) -> Option<ConfigSource> {
    if let Some(p) = flag {
        return Some(ConfigSource::Flag(p.to_path_buf()));
    }
    match env::var_os(CONFIG_ENV) {
        Some(p) if !p.is_empty() => Some(ConfigSource::Env(PathBuf::from(p))),
        _ => default_config_path().map(ConfigSource::Default),
    }
}
