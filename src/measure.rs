use crate::error::FitError;
use crate::units::Emu;

/// The measurement oracle the fitting engine depends on. Implementations
/// report the rendered width and height of a run of text at a whole-number
/// point size, in EMU, and must be deterministic for fixed inputs.
///
/// The font identity lives in the implementing value: [`Font`](crate::Font)
/// measures against a parsed face, while tests conform with lightweight
/// stubs whose sizes are simple functions of the input.
pub trait MeasureText {
    /// Rendered (width, height) of `text` at `point_size`
    fn rendered_size(&self, text: &str, point_size: u32) -> Result<(Emu, Emu), FitError>;
}
