//! Internal classification helpers.
//!
//! Every public entry point funnels through [`classify`], which is what keeps
//! validation and resolution in agreement. Not part of the public API.

use regex::Regex;
use std::sync::LazyLock;

use super::names::{css_entry, supported_name};
use super::ResolvedColor;

/// Regex for hex color: #RGB or #RRGGBB.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Classify a raw color string.
///
/// A leading `#` commits the input to the hex branch: `#red` never reaches the
/// name tables.
pub(super) fn classify(input: &str) -> Option<ResolvedColor> {
    let lower = input.to_lowercase();

    if lower.starts_with('#') {
        return HEX_RE
            .is_match(input)
            .then_some(ResolvedColor::Hex(lower));
    }

    if let Some(name) = supported_name(&lower) {
        return Some(ResolvedColor::Supported(name));
    }

    css_entry(&lower).map(|(name, hex)| ResolvedColor::Mapped { name, hex })
}
