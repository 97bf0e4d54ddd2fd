//! Terminal color resolution.
//!
//! Turns user-supplied color specifications into the form a terminal renderer
//! consumes, and validates theme palettes built from them.
//!
//! # Quick Start
//!
//! ```rust
//! use tint_config::{is_valid_color, resolve_color};
//!
//! assert!(is_valid_color("DarkKhaki"));
//! assert_eq!(resolve_color("darkkhaki").as_deref(), Some("#bdb76b"));
//! assert_eq!(resolve_color("red").as_deref(), Some("red"));
//! assert_eq!(resolve_color("#12345"), None);
//! ```

pub mod colors;
pub mod palette;

// Re-export core API for convenience
pub use colors::{classify_color, is_valid_color, resolve_color, ResolvedColor};
pub use palette::{
    parse_palette, read_palette, resolve_palette, validate_palette, Palette, PaletteFormat,
    ResolvedPalette,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reexports_match_module_api() {
        assert_eq!(resolve_color("Navy"), colors::resolve_color("navy"));
        assert_eq!(is_valid_color("#fff"), colors::is_valid_color("#FFF"));
    }

    #[test]
    fn resolver_is_shareable_across_threads() {
        let handles: Vec<_> = ["red", "#ABC", "rebeccapurple", "nope"]
            .into_iter()
            .map(|c| std::thread::spawn(move || (is_valid_color(c), resolve_color(c))))
            .collect();
        for handle in handles {
            let (valid, resolved) = handle.join().unwrap();
            assert_eq!(valid, resolved.is_some());
        }
    }
}
