use derive_more::{Add, AddAssign, Display, From, Into, Sub, Sum};

/// Number of EMU in one inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// Number of EMU in one printer's point (1/72 inch).
pub const EMU_PER_PT: i64 = 12_700;

/// A length in English Metric Units, the integer length unit used throughout
/// packaged presentation formats. There are 914 400 EMU per inch and 12 700
/// EMU per point, so lengths in both metric and imperial units are exactly
/// representable.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Add,
    AddAssign,
    Sub,
    Sum,
    From,
    Into,
    Display,
)]
pub struct Emu(pub i64);

impl Emu {
    /// Convert a length in printer's points into EMU, truncating any
    /// fractional EMU remainder
    pub fn from_pt(pt: f32) -> Emu {
        Emu((pt * EMU_PER_PT as f32) as i64)
    }

    /// Convert a length in inches into EMU, truncating any fractional EMU
    /// remainder
    pub fn from_inches(inches: f32) -> Emu {
        Emu((inches * EMU_PER_INCH as f32) as i64)
    }
}

impl std::ops::Mul<i64> for Emu {
    type Output = Emu;

    fn mul(self, rhs: i64) -> Emu {
        Emu(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_points_and_inches() {
        assert_eq!(Emu::from_pt(1.0), Emu(12_700));
        assert_eq!(Emu::from_pt(18.0), Emu(228_600));
        assert_eq!(Emu::from_inches(1.0), Emu(914_400));
        assert_eq!(Emu::from_inches(0.5), Emu(457_200));
    }

    #[test]
    fn supports_basic_arithmetic() {
        assert_eq!(Emu(100) + Emu(50), Emu(150));
        assert_eq!(Emu(100) - Emu(50), Emu(50));
        assert_eq!(Emu(100) * 3, Emu(300));
        assert!(Emu(100) < Emu(101));
    }
}
