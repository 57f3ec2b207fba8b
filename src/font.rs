use crate::{path::PathSink, CardError, FontMetrics, GlyphPath, Px};
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use std::path::Path;

/// A parsed font object. Fonts can be TTF or OTF fonts. A font is loaded once
/// and is immutable afterwards, so it can be shared between threads behind an
/// [Arc](std::sync::Arc) and used by any number of layouts at once.
pub struct Font {
    pub face: OwnedFace,
}

/// A glyph placed by the shaper, in font units relative to the start of the run
#[derive(Debug, Clone, Copy, PartialEq)]
struct ShapedGlyph {
    id: GlyphId,
    x: f32,
    y: f32,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, CardError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        if face.as_face_ref().units_per_em() == 0 {
            return Err(CardError::FontProvider(
                "font reports 0 units per em".to_string(),
            ));
        }

        Ok(Font { face })
    }

    /// Read and parse a font file
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Font, CardError> {
        let bytes = std::fs::read(path)?;
        Self::load(bytes)
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    /// Obtain the family name of the font, if the font carries one
    pub fn family(&self) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: Px) -> f32 {
        *size / self.face().units_per_em() as f32
    }

    /// Shape `text` as a single run with the font's default features, so GPOS
    /// kerning (or the `kern` table when there is no GPOS), ligatures and mark
    /// placement all apply. Characters the font doesn't cover come back as
    /// glyph 0, the `.notdef` glyph, and still take up space.
    ///
    /// Returns the placed glyphs and the total advance of the run, in font units.
    fn shape(&self, text: &str) -> Result<(Vec<ShapedGlyph>, f32), CardError> {
        let shaper = rustybuzz::Face::from_slice(self.face.as_slice(), 0)
            .ok_or_else(|| CardError::FontProvider("font can't be used for shaping".to_string()))?;

        let mut buffer = rustybuzz::UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.guess_segment_properties();
        let output = rustybuzz::shape(&shaper, &[], buffer);

        let mut glyphs = Vec::new();
        let mut pen = 0.0;
        for (info, position) in output.glyph_infos().iter().zip(output.glyph_positions()) {
            glyphs.push(ShapedGlyph {
                id: GlyphId(info.glyph_id as u16),
                x: pen + position.x_offset as f32,
                y: position.y_offset as f32,
            });
            pen += position.x_advance as f32;
        }
        Ok((glyphs, pen))
    }
}

impl FontMetrics for Font {
    fn units_per_em(&self) -> u16 {
        self.face().units_per_em()
    }

    fn ascender(&self) -> i16 {
        self.face().ascender()
    }

    fn descender(&self) -> i16 {
        self.face().descender()
    }

    fn advance_width(&self, text: &str, size: Px) -> Result<Px, CardError> {
        let (_, units) = self.shape(text)?;
        Ok(Px(units * self.scaling(size)))
    }

    fn outline(&self, text: &str, origin: (Px, Px), size: Px) -> Result<GlyphPath, CardError> {
        let scaling = self.scaling(size);
        let (glyphs, _) = self.shape(text)?;

        let mut path = GlyphPath::new();
        {
            let mut sink = PathSink::new(&mut path, origin, scaling);
            for glyph in glyphs {
                // shaper offsets point up, canvas y points down
                sink.set_origin((
                    origin.0 + Px(glyph.x * scaling),
                    origin.1 - Px(glyph.y * scaling),
                ));
                // glyphs without outlines (spaces) just advance the pen
                let _ = self.face().outline_glyph(glyph.id, &mut sink);
            }
        }
        Ok(path)
    }
}
