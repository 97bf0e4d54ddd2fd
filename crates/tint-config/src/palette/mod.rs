//! Theme palettes.
//!
//! A palette names the color slots a terminal theme fills in. Slots hold raw
//! color specifications; [`validate_palette`] reports every bad slot at once and
//! [`resolve_palette`] turns the palette into renderer-ready values.

mod loader;
mod resolve;
mod types;
mod validate;


pub use loader::{parse_palette, read_palette};
pub use resolve::resolve_palette;
pub use types::{Palette, PaletteFormat, ResolvedPalette};
pub use validate::validate_palette;
