use crate::error::FitError;
use crate::font::Font;
use id_arena::{Arena, Id};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Owns every font in use, keyed by stable ids. Loading by path is
/// memoized: fitting many runs of text against the same font file parses
/// the face once and hands back the same id on every subsequent call.
///
/// Note that fonts are stored "globally" within the library, such that any
/// caller can refer to one by its id for as long as the library lives.
#[derive(Default)]
pub struct FontLibrary {
    pub fonts: Arena<Font>,
    by_path: HashMap<PathBuf, Id<Font>>,
}

impl FontLibrary {
    pub fn new() -> FontLibrary {
        FontLibrary::default()
    }

    /// Add an already-parsed font to the library, returning its id
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Load the font file at `path`, reusing the previously parsed face if
    /// this path has been loaded before
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<Id<Font>, FitError> {
        let path = path.as_ref();
        if let Some(&id) = self.by_path.get(path) {
            return Ok(id);
        }
        let id = self.fonts.alloc(Font::open(path)?);
        self.by_path.insert(path.to_path_buf(), id);
        Ok(id)
    }

    /// Get a font given its id. Returns [None] for ids minted by another
    /// library
    pub fn get(&self, id: Id<Font>) -> Option<&Font> {
        self.fonts.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_propagates_missing_file_errors() {
        let mut library = FontLibrary::new();
        assert!(matches!(
            library.load("/definitely/not/a/font.ttf"),
            Err(FitError::Io(_))
        ));
        assert_eq!(library.fonts.len(), 0);
    }
}
