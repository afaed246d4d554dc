use super::source::LineSource;
use crate::error::FitError;
use crate::extents::Extents;
use crate::measure::MeasureText;
use crate::search::SearchTree;
use crate::units::Emu;

/// Reference text measured once per candidate size to stand in for the
/// height of every wrapped line: 'T' reaches the ascender, 'y' the
/// descender, so together they span the vertical extent of a typical line.
pub const LINE_HEIGHT_REFERENCE: &str = "Ty";

/// Break the longest renderable line off the front of `source`, returning
/// the line and a source holding everything after it.
///
/// Words are accepted greedily: each next word is appended to a trial line
/// (single space joined) and the trial measured at `point_size`; the first
/// word whose trial overflows `width` is left unconsumed to open the next
/// line. The exception is a word that overflows while the line is still
/// empty; it is placed alone on the line regardless, since words are never
/// split or hyphenated. An exhausted source yields an empty line.
pub fn break_line<'a, M: MeasureText>(
    source: LineSource<'a>,
    point_size: u32,
    width: Emu,
    metrics: &M,
) -> Result<(String, LineSource<'a>), FitError> {
    let mut line = String::new();
    let mut rest = source;

    while let Some((word, after_word)) = rest.next_word() {
        let trial = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        let (trial_width, _) = metrics.rendered_size(&trial, point_size)?;

        if trial_width > width {
            if line.is_empty() {
                // an over-wide first word still gets the line to itself
                return Ok((trial, after_word));
            }
            return Ok((line, rest));
        }

        line = trial;
        rest = after_word;
    }

    Ok((line, rest))
}

/// Value object that knows how to fit text into given rectangular extents
/// by searching whole-number point sizes.
///
/// The search relies on fit being monotonic in point size: if text fits at
/// some size it also fits at every smaller size. That holds for any
/// [MeasureText] implementation whose measurements grow with point size.
pub struct TextFitter<'a, M> {
    source: LineSource<'a>,
    extents: Extents,
    metrics: &'a M,
}

impl<'a, M: MeasureText> TextFitter<'a, M> {
    pub fn new(text: &'a str, extents: Extents, metrics: &'a M) -> TextFitter<'a, M> {
        TextFitter {
            source: LineSource::new(text),
            extents,
            metrics,
        }
    }

    /// Return the largest whole-number point size in `1..=max_size` that
    /// allows `text` to fit completely within `extents` when wrapped and
    /// measured by `metrics`.
    ///
    /// Returns `Ok(None)` when no size in range fits, including when
    /// `max_size` is zero, which leaves no candidates at all. Callers pick
    /// their own fallback for that case (clamping to 1 is common).
    /// Measurement failures are returned unchanged.
    pub fn best_fit_font_size(
        text: &'a str,
        extents: Extents,
        max_size: u32,
        metrics: &'a M,
    ) -> Result<Option<u32>, FitError> {
        TextFitter::new(text, extents, metrics).best_fit(max_size)
    }

    fn best_fit(&self, max_size: u32) -> Result<Option<u32>, FitError> {
        let sizes = match SearchTree::from_ordered_sequence(1..=max_size) {
            Some(sizes) => sizes,
            None => return Ok(None),
        };
        let best = sizes.try_find_max(|&size| self.fits_inside(size))?;
        Ok(best.copied())
    }

    /// Wrap the whole text at `point_size`, one [break_line] call per line,
    /// returning the lines in order. Empty and whitespace-only text wraps
    /// to no lines at all.
    pub fn wrap_lines(&self, point_size: u32) -> Result<Vec<String>, FitError> {
        let mut lines = Vec::new();
        let mut source = self.source;
        while !source.is_exhausted() {
            let (line, remainder) =
                break_line(source, point_size, self.extents.width(), self.metrics)?;
            lines.push(line);
            source = remainder;
        }
        Ok(lines)
    }

    /// Whether the text, wrapped at `point_size`, stays within the extents.
    ///
    /// Width conformance is enforced while wrapping: [break_line] only
    /// keeps words whose trial measurement fits, with the lone exception of
    /// a single over-wide word forced onto its own line. Height is checked
    /// after the fact as line count times the measured height of
    /// [LINE_HEIGHT_REFERENCE], an estimate rather than the tallest actual
    /// line.
    /// Callers depend on this exact threshold, so the asymmetry stays.
    fn fits_inside(&self, point_size: u32) -> Result<bool, FitError> {
        let lines = self.wrap_lines(point_size)?;
        let (_, line_height) = self
            .metrics
            .rendered_size(LINE_HEIGHT_REFERENCE, point_size)?;
        let total_height = line_height * lines.len() as i64;
        Ok(total_height <= self.extents.height())
    }
}
