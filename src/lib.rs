#![cfg_attr(not(test), no_std)]

//! Lightweight bitmap fonts for embedded displays.
//!
//! Font tables are plain `static` data, normally emitted by a generator tool.
//! This crate looks glyphs up by character code and measures text so a display
//! routine can place them:
//!
//! 1. Call [`Font::lookup_glyph`] to get the [`GlyphDefinition`].
//! 2. Add `offset_x` and `offset_y` to the draw cursor.
//! 3. Draw pixel by pixel from the pixmap, bounded by `width` and `height`.
//! 4. Advance the cursor by [`GlyphDefinition::advance_width`].
//!
//! A new line moves the cursor down by [`Font::line_height`].

mod font;
mod glyph;

#[cfg(feature = "embedded-graphics")]
mod graphics;

pub use font::{Font, TextMetrics};
pub use glyph::{CharacterEntry, GlyphDefinition, GlyphPixels};
