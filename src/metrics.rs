use crate::{CardError, GlyphPath, Px};

/// Everything the text layout needs to know about a font.
///
/// Implementations must be pure: for a fixed font, the same inputs always
/// produce the same widths and outlines. [`Font`](crate::Font) is the real
/// implementation; tests substitute fixed-advance fakes.
pub trait FontMetrics {
    /// The size of the em square, in font units
    fn units_per_em(&self) -> u16;

    /// Distance from the baseline to the top of the font, in font units
    fn ascender(&self) -> i16;

    /// Distance from the baseline to the bottom of the font, in font units. Usually negative
    fn descender(&self) -> i16;

    /// The horizontal distance `text` occupies when set at `size`
    fn advance_width(&self, text: &str, size: Px) -> Result<Px, CardError>;

    /// The outline of `text` set at `size`, with the baseline of the first glyph at `origin`
    fn outline(&self, text: &str, origin: (Px, Px), size: Px) -> Result<GlyphPath, CardError>;

    /// Vertical distance between successive baselines at `size`
    fn row_height(&self, size: Px) -> Result<Px, CardError> {
        let units_per_em = self.units_per_em();
        if units_per_em == 0 {
            return Err(CardError::FontProvider(
                "font reports 0 units per em".to_string(),
            ));
        }
        let scaling = *size / units_per_em as f32;
        Ok(Px((self.ascender() as f32 - self.descender() as f32) * scaling))
    }
}
