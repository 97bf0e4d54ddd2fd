//! Palette resolution with per-slot fallback.

use tracing::warn;

use super::types::{Palette, ResolvedPalette};
use crate::colors::resolve_color;

/// Resolve every slot of `palette`.
///
/// A slot that does not resolve takes the matching slot of `fallback`. If that
/// fails too, the built-in default palette supplies the value. Gradient
/// entries that do not resolve are dropped; an empty result falls back the
/// same way as a whole.
pub fn resolve_palette(palette: &Palette, fallback: &Palette) -> ResolvedPalette {
    let defaults = Palette::default();
    let pick = |value: &str, fallback: &str, default: &str| -> String {
        resolve_color(value)
            .or_else(|| resolve_color(fallback))
            .unwrap_or_else(|| default.to_owned())
    };

    let mut gradient: Vec<String> = palette
        .gradient
        .iter()
        .filter_map(|c| resolve_color(c))
        .collect();
    if gradient.is_empty() {
        gradient = fallback.gradient.iter().filter_map(|c| resolve_color(c)).collect();
    }
    if gradient.is_empty() {
        warn!("palette gradient has no usable colors, using default gradient");
        gradient = defaults.gradient.clone();
    }

    ResolvedPalette {
        background: pick(&palette.background, &fallback.background, &defaults.background),
        foreground: pick(&palette.foreground, &fallback.foreground, &defaults.foreground),
        light_blue: pick(&palette.light_blue, &fallback.light_blue, &defaults.light_blue),
        accent_blue: pick(&palette.accent_blue, &fallback.accent_blue, &defaults.accent_blue),
        accent_purple: pick(
            &palette.accent_purple,
            &fallback.accent_purple,
            &defaults.accent_purple,
        ),
        accent_cyan: pick(&palette.accent_cyan, &fallback.accent_cyan, &defaults.accent_cyan),
        accent_green: pick(
            &palette.accent_green,
            &fallback.accent_green,
            &defaults.accent_green,
        ),
        accent_yellow: pick(
            &palette.accent_yellow,
            &fallback.accent_yellow,
            &defaults.accent_yellow,
        ),
        accent_red: pick(&palette.accent_red, &fallback.accent_red, &defaults.accent_red),
        comment: pick(&palette.comment, &fallback.comment, &defaults.comment),
        gray: pick(&palette.gray, &fallback.gray, &defaults.gray),
        diff_added: pick(&palette.diff_added, &fallback.diff_added, &defaults.diff_added),
        diff_removed: pick(
            &palette.diff_removed,
            &fallback.diff_removed,
            &defaults.diff_removed,
        ),
        gradient,
    }
}
