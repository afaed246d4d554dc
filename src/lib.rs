//! Find the largest whole-number font size at which a block of text,
//! greedily word-wrapped, still fits inside fixed rectangular extents.
//!
//! Wrapping and searching are pure computation over a narrow measurement
//! trait ([MeasureText]); [Font] provides the production implementation on
//! top of parsed TTF/OTF metrics, and anything else that can report a
//! rendered size conforms just as well:
//!
//! ```
//! use text_fit::layout::TextFitter;
//! use text_fit::{Emu, Extents, FitError, MeasureText};
//!
//! // a fixed-advance stub; real callers measure with `text_fit::Font`
//! struct FixedAdvance;
//!
//! impl MeasureText for FixedAdvance {
//!     fn rendered_size(&self, text: &str, point_size: u32) -> Result<(Emu, Emu), FitError> {
//!         let size = point_size as i64;
//!         Ok((Emu(600 * size) * text.chars().count() as i64, Emu(1_200 * size)))
//!     }
//! }
//!
//! let extents = Extents::new(Emu::from_inches(1.0), Emu::from_inches(1.0))?;
//! let best = TextFitter::best_fit_font_size("the quick brown fox", extents, 72, &FixedAdvance)?;
//! assert!(best.is_some());
//! # Ok::<(), text_fit::FitError>(())
//! ```

mod error;
pub use error::*;

mod extents;
pub use extents::*;

mod font;
pub use font::*;

/// Utility functions and structures to wrap text and search for its
/// best-fit font size
pub mod layout;

mod library;
pub use library::*;

mod measure;
pub use measure::*;

mod search;
pub use search::*;

mod units;
pub use units::*;

/// Re-export ttf-parser functionality, mostly for callers working directly
/// with the parsed [Font] face
pub use owned_ttf_parser;
