//! Palette schema types.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Color slots of a terminal theme.
///
/// Every slot holds an unresolved color specification: a hex code, a supported
/// terminal name, or a web color name. Missing slots take the default palette's
/// value when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub foreground: String,
    pub light_blue: String,
    pub accent_blue: String,
    pub accent_purple: String,
    pub accent_cyan: String,
    pub accent_green: String,
    pub accent_yellow: String,
    pub accent_red: String,
    pub comment: String,
    pub gray: String,
    pub diff_added: String,
    pub diff_removed: String,
    pub gradient: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#1e1e2e".into(),
            foreground: "#cdd6f4".into(),
            light_blue: "#89dceb".into(),
            accent_blue: "#89b4fa".into(),
            accent_purple: "#cba6f7".into(),
            accent_cyan: "#89dceb".into(),
            accent_green: "#a6e3a1".into(),
            accent_yellow: "#f9e2af".into(),
            accent_red: "#f38ba8".into(),
            comment: "#6c7086".into(),
            gray: "gray".into(),
            diff_added: "#28350b".into(),
            diff_removed: "#430000".into(),
            gradient: vec!["#4796e4".into(), "#847ace".into(), "#c3677f".into()],
        }
    }
}

impl Palette {
    /// Named single-color slots, in declaration order. Excludes `gradient`.
    pub fn slots(&self) -> [(&'static str, &str); 13] {
        [
            ("background", self.background.as_str()),
            ("foreground", self.foreground.as_str()),
            ("light_blue", self.light_blue.as_str()),
            ("accent_blue", self.accent_blue.as_str()),
            ("accent_purple", self.accent_purple.as_str()),
            ("accent_cyan", self.accent_cyan.as_str()),
            ("accent_green", self.accent_green.as_str()),
            ("accent_yellow", self.accent_yellow.as_str()),
            ("accent_red", self.accent_red.as_str()),
            ("comment", self.comment.as_str()),
            ("gray", self.gray.as_str()),
            ("diff_added", self.diff_added.as_str()),
            ("diff_removed", self.diff_removed.as_str()),
        ]
    }
}

/// A palette after resolution: every slot holds a renderer-compatible color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPalette {
    pub background: String,
    pub foreground: String,
    pub light_blue: String,
    pub accent_blue: String,
    pub accent_purple: String,
    pub accent_cyan: String,
    pub accent_green: String,
    pub accent_yellow: String,
    pub accent_red: String,
    pub comment: String,
    pub gray: String,
    pub diff_added: String,
    pub diff_removed: String,
    pub gradient: Vec<String>,
}

/// Document format of a palette file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteFormat {
    Toml,
    Yaml,
}

impl PaletteFormat {
    /// `.yaml` and `.yml` are YAML; everything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Toml,
        }
    }
}
