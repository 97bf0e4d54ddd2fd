//! Color resolution and validation.
//!
//! Accepts three kinds of color specification, checked in this order:
//! - hex codes, `#RGB` or `#RRGGBB` in any case
//! - names the terminal renderer supports natively (`red`, `cyanbright`, `grey`, ...)
//! - standard web color names (`darkkhaki`, `rebeccapurple`, ...), translated to hex
//!
//! Resolution produces the canonical form the renderer consumes: lowercase hex
//! or a lowercase supported name.

mod names;
mod parse;


use std::fmt;

use tracing::{debug, warn};

pub use names::{css_name_to_hex, is_supported_name, CSS_NAME_TO_HEX, SUPPORTED_NAMES};

use parse::classify;

/// Outcome of a successful color classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedColor {
    /// A hex code, lowercased.
    Hex(String),
    /// A name the renderer accepts directly.
    Supported(&'static str),
    /// A web color name translated through [`CSS_NAME_TO_HEX`].
    Mapped {
        name: &'static str,
        hex: &'static str,
    },
}

impl ResolvedColor {
    /// The canonical string handed to the renderer.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hex(hex) => hex,
            Self::Supported(name) => name,
            Self::Mapped { hex, .. } => hex,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Hex(hex) => hex,
            other => other.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ResolvedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a color string without emitting any diagnostics.
pub fn classify_color(color: &str) -> Option<ResolvedColor> {
    classify(color)
}

/// Check whether a string is a color the renderer can display.
///
/// Silent on failure; use [`resolve_color`] when the caller wants the
/// unresolved input reported.
pub fn is_valid_color(color: &str) -> bool {
    classify(color).is_some()
}

/// Resolve a color string into its renderer-compatible form.
///
/// Returns `None` and logs a warning when the input is not a valid color.
/// Callers pick their own fallback.
pub fn resolve_color(color_value: &str) -> Option<String> {
    match classify(color_value) {
        Some(resolved) => {
            debug!(input = color_value, resolved = %resolved, "resolved color");
            Some(resolved.into_string())
        }
        None => {
            warn!("could not resolve color \"{color_value}\" to a terminal-compatible format");
            None
        }
    }
}
