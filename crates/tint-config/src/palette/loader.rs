//! Palette document parsing.

use std::path::Path;

use tint_common::ConfigError;
use tracing::info;

use super::types::{Palette, PaletteFormat};

/// Parse a palette from TOML or YAML text.
///
/// Only syntax and types are checked here; run
/// [`validate_palette`](super::validate_palette) for the colors themselves.
pub fn parse_palette(content: &str, format: PaletteFormat) -> Result<Palette, ConfigError> {
    match format {
        PaletteFormat::Toml => toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}"))),
        PaletteFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse YAML: {e}"))),
    }
}

/// Read a palette file, picking the format from its extension.
pub fn read_palette(path: &Path) -> Result<Palette, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let palette = parse_palette(&content, PaletteFormat::from_path(path))?;
    info!("read palette from {}", path.display());
    Ok(palette)
}
