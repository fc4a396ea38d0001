//! Runtime configuration loaded from `ninepatch.toml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "NINEPATCH_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "ninepatch.toml";

/// Rendering and output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NinePatchConfig {
    /// Directory receiving rendered PNG (and CSS) files.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Color prefixed to the grid-mode `background` declaration.
    #[serde(default)]
    pub background_color: String,
    /// Content width used when no size is requested.
    #[serde(default = "default_width")]
    pub default_width: u32,
    /// Content height used when no size is requested.
    #[serde(default = "default_height")]
    pub default_height: u32,
    /// Write a `.css` declaration file next to each render.
    #[serde(default)]
    pub emit_css: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}
fn default_width() -> u32 {
    128
}
fn default_height() -> u32 {
    64
}

impl Default for NinePatchConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            background_color: String::new(),
            default_width: default_width(),
            default_height: default_height(),
            emit_css: false,
        }
    }
}

impl NinePatchConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Load from `$NINEPATCH_CONFIG`, then `./ninepatch.toml`, else defaults.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            log::debug!("Loading config from ${CONFIG_ENV}: {path}");
            return Self::from_file(Path::new(&path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            log::debug!("Loading config from {}", local.display());
            return Self::from_file(local);
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg = NinePatchConfig::from_toml("").unwrap();
        assert_eq!(cfg, NinePatchConfig::default());
        assert_eq!(cfg.output_dir, PathBuf::from("out"));
        assert_eq!((cfg.default_width, cfg.default_height), (128, 64));
        assert!(!cfg.emit_css);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg = NinePatchConfig::from_toml(
            r##"
            background_color = "#336699"
            emit_css = true
            "##,
        )
        .unwrap();
        assert_eq!(cfg.background_color, "#336699");
        assert!(cfg.emit_css);
        assert_eq!(cfg.default_width, 128);
    }

    #[test]
    fn malformed_toml_fails() {
        assert!(NinePatchConfig::from_toml("default_width = \"wide\"").is_err());
        assert!(NinePatchConfig::from_toml("[[[").is_err());
    }

    #[test]
    fn from_file_reads_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ninepatch.toml");
        std::fs::write(&path, "output_dir = \"renders\"\ndefault_height = 32\n").unwrap();
        let cfg = NinePatchConfig::from_file(&path).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("renders"));
        assert_eq!(cfg.default_height, 32);
    }

    #[test]
    fn from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = NinePatchConfig::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(format!("{err}").contains("I/O error"));
    }
}
