//! `EditorConfig`: width/height overrides, whether highlighting is
//! applied, and the indent width `insert_new_line` uses.
//!
//! Parsed with `serde`/`toml`, the way `oxidized`'s `core-config` parses
//! `oxidized.toml`. Absent a config file, the defaults reproduce the
//! editing core's literal behavior: two spaces per indent level, terminal
//! width/height read from the host, highlighting on.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub color_enabled: bool,
    pub indent_width: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            color_enabled: true,
            indent_width: 2,
        }
    }
}

impl EditorConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parse editor config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_core_literal_behavior() {
        let c = EditorConfig::default();
        assert_eq!(c.indent_width, 2);
        assert!(c.color_enabled);
        assert_eq!(c.width, None);
        assert_eq!(c.height, None);
    }

    #[test]
    fn parses_partial_overrides() {
        let c = EditorConfig::from_toml_str("width = 80\ncolor_enabled = false\n").unwrap();
        assert_eq!(c.width, Some(80));
        assert!(!c.color_enabled);
        assert_eq!(c.indent_width, 2);
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("editor.toml");
        std::fs::write(&path, "indent_width = 4\n").unwrap();
        let c = EditorConfig::load(&path).unwrap();
        assert_eq!(c.indent_width, 4);
    }
}
