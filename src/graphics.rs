use embedded_graphics_core::{Pixel, geometry::Point, pixelcolor::BinaryColor};

use crate::{Font, GlyphDefinition};

impl Font {
    /// Positions the pixels of `code` at the draw `cursor`.
    ///
    /// The glyph's offsets are applied and ink pixels (after inversion) come out
    /// as [`BinaryColor::On`]. Returns `None` if the font has no such character.
    pub fn glyph_pixels(
        &self,
        code: char,
        cursor: Point,
    ) -> Option<impl Iterator<Item = Pixel<BinaryColor>> + use<>> {
        let glyph = self.lookup_glyph(code)?;
        Some(positioned_pixels(glyph, cursor, self.inverted))
    }
}

fn positioned_pixels(
    glyph: &GlyphDefinition,
    cursor: Point,
    inverted: bool,
) -> impl Iterator<Item = Pixel<BinaryColor>> + use<> {
    let origin = cursor + Point::new(glyph.offset_x.into(), glyph.offset_y.into());

    glyph.pixels().map(move |(x, y, bit)| {
        let color = if bit != inverted {
            BinaryColor::On
        } else {
            BinaryColor::Off
        };
        Pixel(origin + Point::new(x.into(), y.into()), color)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CharacterEntry;

    // 2x2: top-left and bottom-right set.
    static ENTRIES: [CharacterEntry; 1] = [CharacterEntry::new(
        '\\',
        GlyphDefinition::new(2, 2, -1, 3, &[0b0000_1001]),
    )];

    #[test]
    fn pixels_are_offset_from_cursor() {
        let font = Font::new("Test", 2, 3, "Regular", &ENTRIES, false);
        let pixels: Vec<_> = font
            .glyph_pixels('\\', Point::new(10, 20))
            .into_iter()
            .flatten()
            .collect();

        assert_eq!(
            pixels,
            [
                Pixel(Point::new(9, 23), BinaryColor::On),
                Pixel(Point::new(10, 23), BinaryColor::Off),
                Pixel(Point::new(9, 24), BinaryColor::Off),
                Pixel(Point::new(10, 24), BinaryColor::On),
            ]
        );
    }

    #[test]
    fn inverted_font_flips_colors() {
        let font = Font::new("Test", 2, 3, "Regular", &ENTRIES, true);
        let on = font
            .glyph_pixels('\\', Point::zero())
            .into_iter()
            .flatten()
            .filter(|Pixel(_, color)| color.is_on())
            .count();

        assert_eq!(on, 2);
    }

    #[test]
    fn missing_glyph_has_no_pixels() {
        let font = Font::new("Test", 2, 3, "Regular", &ENTRIES, false);

        assert!(font.glyph_pixels('a', Point::zero()).is_none());
    }
}
