use crate::error::FitError;
use crate::measure::MeasureText;
use crate::units::Emu;
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::Path;

/// A parsed font face. Fonts can be TTF or OTF fonts; the face is parsed
/// once at load time and all metric queries afterward are in-memory lookups.
///
/// `Font` is the production [MeasureText] implementation: widths are the sum
/// of horizontal glyph advances at the requested size, heights span the
/// face's ascender to its descender. Characters with no glyph in the face
/// are measured as the replacement glyph when the face carries one, and
/// contribute no width otherwise.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error
    /// if the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, FitError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Read and parse the font file at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Font, FitError> {
        let bytes = std::fs::read(path)?;
        Font::load(bytes)
    }

    fn scale(&self, point_size: u32) -> f32 {
        point_size as f32 / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the
    /// font) in points for the given point size
    pub fn ascent(&self, point_size: u32) -> f32 {
        self.scale(point_size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of
    /// the font) in points for the given point size. Note: this is usually
    /// negative
    pub fn descent(&self, point_size: u32) -> f32 {
        self.scale(point_size) * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the leading (extra space between lines) in points for the
    /// given point size
    pub fn leading(&self, point_size: u32) -> f32 {
        self.scale(point_size) * self.face.as_face_ref().line_gap() as f32
    }

    /// Calculate the default line height in points for the given point
    /// size: how much to vertically offset a second row of text below a
    /// first row of text
    pub fn line_height(&self, point_size: u32) -> f32 {
        self.leading(point_size) + self.ascent(point_size) - self.descent(point_size)
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0)
    }

    /// Calculate the width of a given string of text in points at the given
    /// point size, as the sum of horizontal glyph advances
    pub fn width_of_text(&self, text: &str, point_size: u32) -> f32 {
        let scaling = self.scale(point_size);
        text.chars()
            .filter_map(|ch| self.glyph_id(ch).or_else(|| self.replacement_glyph_id()))
            .map(|gid| {
                scaling
                    * self
                        .face
                        .as_face_ref()
                        .glyph_hor_advance(GlyphId(gid))
                        .unwrap_or_default() as f32
            })
            .sum()
    }
}

impl MeasureText for Font {
    fn rendered_size(&self, text: &str, point_size: u32) -> Result<(Emu, Emu), FitError> {
        let width = self.width_of_text(text, point_size);
        let height = self.ascent(point_size) - self.descent(point_size);
        Ok((Emu::from_pt(width), Emu::from_pt(height)))
    }
}
