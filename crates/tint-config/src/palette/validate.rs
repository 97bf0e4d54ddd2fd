//! Palette color validation.

use tint_common::ConfigError;

use super::types::Palette;
use crate::colors::is_valid_color;

/// Check every slot of a palette, collecting all failures into one error.
pub fn validate_palette(palette: &Palette) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    for (name, value) in palette.slots() {
        check_color(&mut errors, name, value);
    }
    for (idx, value) in palette.gradient.iter().enumerate() {
        check_color(&mut errors, &format!("gradient[{idx}]"), value);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn check_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if !is_valid_color(value) {
        errors.push(format!("{name} = \"{value}\" is not a valid color"));
    }
}
