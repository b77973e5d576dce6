//! Font tables and text measurement.

use log::trace;

use crate::glyph::{CharacterEntry, GlyphDefinition};

/// One typeface at one size and style.
///
/// Entries need not be sorted. Lookup scans them in order, so a duplicated
/// code resolves to its first entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Font {
    /// Font family literal, e.g. `"Arial"`.
    pub family: &'static str,
    /// Font size in pixels.
    pub size: u8,
    /// Line height in pixels.
    pub line_height: u8,
    /// Font style literal, e.g. `"Regular"`.
    pub style: &'static str,
    /// Character set.
    pub entries: &'static [CharacterEntry],
    /// Pixmap colors are inverted: ink is a cleared bit.
    pub inverted: bool,
}

/// Size of a possibly multi-line block of text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TextMetrics {
    /// Widest line, in pixels.
    pub width: u16,
    /// `lines * line_height`, in pixels.
    pub height: u16,
    pub lines: u16,
}

impl Font {
    pub const fn new(
        family: &'static str,
        size: u8,
        line_height: u8,
        style: &'static str,
        entries: &'static [CharacterEntry],
        inverted: bool,
    ) -> Self {
        Self {
            family,
            size,
            line_height,
            style,
            entries,
            inverted,
        }
    }

    /// Number of characters in the font.
    pub const fn char_count(&self) -> usize {
        self.entries.len()
    }

    /// Looks up the glyph for `code`.
    ///
    /// Returns `None` if the font has no such character.
    pub fn lookup_glyph(&self, code: char) -> Option<&'static GlyphDefinition> {
        let entries: &'static [CharacterEntry] = self.entries;
        entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| &entry.glyph)
    }

    pub fn contains(&self, code: char) -> bool {
        self.lookup_glyph(code).is_some()
    }

    /// Cursor advance for `code`. Missing characters take no space.
    pub fn glyph_advance_width(&self, code: char) -> u16 {
        match self.lookup_glyph(code) {
            Some(glyph) => glyph.advance_width(),
            None => {
                trace!(
                    "font {} {}: no glyph for U+{:04X}",
                    self.family,
                    self.style,
                    code as u32
                );
                0
            }
        }
    }

    /// Width of the first line of `text`.
    ///
    /// Measurement stops before the first `'\r'`, `'\n'` or `'\0'`. The sum
    /// saturates at `u16::MAX`.
    pub fn line_width(&self, text: &str) -> u16 {
        text.chars()
            .take_while(|&c| !is_line_end(c))
            .fold(0u16, |width, c| {
                width.saturating_add(self.glyph_advance_width(c))
            })
    }

    /// Measures every line of `text`.
    ///
    /// `"\r\n"` counts as a single break. Measurement ends at `'\0'`.
    pub fn measure(&self, text: &str) -> TextMetrics {
        let text = text.split('\0').next().unwrap_or("");
        if text.is_empty() {
            return TextMetrics::default();
        }

        let mut metrics = TextMetrics::default();
        let mut rest = text;

        loop {
            metrics.width = metrics.width.max(self.line_width(rest));
            metrics.lines = metrics.lines.saturating_add(1);

            let Some(pos) = rest.find(['\r', '\n']) else {
                break;
            };
            let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
            rest = &rest[pos + skip..];
        }

        metrics.height = metrics.lines.saturating_mul(self.line_height as u16);
        metrics
    }

    /// Whether a raw pixmap bit is painted with the foreground color.
    pub const fn is_ink(&self, bit: bool) -> bool {
        bit != self.inverted
    }
}

fn is_line_end(c: char) -> bool {
    matches!(c, '\r' | '\n' | '\0')
}
