use crate::units::Emu;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum FitError {
    #[error(transparent)]
    /// An I/O error occurred, most likely while reading a font file
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    /// Extents were constructed with a negative component
    #[error("extents must be non-negative, got {width} x {height} EMU")]
    NegativeExtents { width: Emu, height: Emu },
}
