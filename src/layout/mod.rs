//! Text wrapping and best-fit font size search.
//!
//! [`break_line`](crate::layout::break_line) peels one renderable line at a
//! time off a [`LineSource`](crate::layout::LineSource), and
//! [`TextFitter`](crate::layout::TextFitter) drives that wrapping inside a
//! search over candidate point sizes to find the largest whole-number size
//! at which the full text stays within fixed extents. Measurement is
//! delegated entirely to a [`MeasureText`](crate::MeasureText)
//! implementation, usually a [`Font`](crate::Font).

mod source;
mod text;

pub use source::*;
pub use text::*;
