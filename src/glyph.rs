//! Per-character bitmap definitions.

/// One rendered character: bitmap bounds, drawing offsets and pixel data.
///
/// Pixmap bit mapping: pixel `i = y * width + x` lives in byte `i / 8`,
/// bit `i % 8` (LSB first). Rows are not padded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GlyphDefinition {
    /// Pixmap width.
    pub width: u8,
    /// Pixmap height.
    pub height: u8,
    /// Horizontal drawing offset (left-side bearing).
    pub offset_x: i8,
    /// Vertical drawing offset.
    pub offset_y: i8,
    /// Packed pixmap data.
    pub pixmap: &'static [u8],
}

impl GlyphDefinition {
    pub const fn new(
        width: u8,
        height: u8,
        offset_x: i8,
        offset_y: i8,
        pixmap: &'static [u8],
    ) -> Self {
        Self {
            width,
            height,
            offset_x,
            offset_y,
            pixmap,
        }
    }

    /// Horizontal cursor advance: `width + offset_x`, clamped at zero.
    pub const fn advance_width(&self) -> u16 {
        let advance = self.width as i16 + self.offset_x as i16;
        if advance < 0 { 0 } else { advance as u16 }
    }

    /// Reads the raw pixmap bit at (`x`, `y`).
    ///
    /// Returns `None` outside the glyph rectangle or past the end of the pixmap.
    pub fn pixel(&self, x: u8, y: u8) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = y as usize * self.width as usize + x as usize;
        let byte = self.pixmap.get(index / 8)?;
        Some(byte & (1u8 << (index % 8)) != 0)
    }

    /// Iterates every pixel of the glyph rectangle in row-major order.
    pub fn pixels(&self) -> GlyphPixels {
        GlyphPixels {
            glyph: *self,
            x: 0,
            y: 0,
        }
    }
}

/// Row-major iterator over a glyph's pixels, yielding `(x, y, bit)`.
///
/// Pixels the pixmap is too short to hold read as cleared.
#[derive(Clone, Debug)]
pub struct GlyphPixels {
    glyph: GlyphDefinition,
    x: u8,
    y: u8,
}

impl Iterator for GlyphPixels {
    type Item = (u8, u8, bool);

    fn next(&mut self) -> Option<Self::Item> {
        if self.glyph.width == 0 || self.y >= self.glyph.height {
            return None;
        }

        let (x, y) = (self.x, self.y);
        self.x += 1;
        if self.x >= self.glyph.width {
            self.x = 0;
            self.y += 1;
        }

        Some((x, y, self.glyph.pixel(x, y).unwrap_or(false)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = self.glyph.width as usize * self.glyph.height as usize;
        let done = self.y as usize * self.glyph.width as usize + self.x as usize;
        let left = total.saturating_sub(done);
        (left, Some(left))
    }
}

impl ExactSizeIterator for GlyphPixels {}

/// Character code paired with its glyph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CharacterEntry {
    pub code: char,
    pub glyph: GlyphDefinition,
}

impl CharacterEntry {
    pub const fn new(code: char, glyph: GlyphDefinition) -> Self {
        Self { code, glyph }
    }
}
