//! Segment bit layout
//!
//! One byte per digit, most significant bit first:
//!
//! ```text
//!  bit:  7   6   5   4   3   2   1   0
//!       DP   g   f   e   d   c   b   a
//!
//!        ─a─
//!       f   b
//!        ─g─
//!       e   c
//!        ─d─  .DP
//! ```

/// All segments off
pub const BLANK: u8 = 0b0000_0000;

/// Decimal point bit
pub const DECIMAL_POINT: u8 = 0b1000_0000;

/// The seven glyph segments (a through g), excluding the decimal point
pub const SEGMENTS_MASK: u8 = 0b0111_1111;

/// A single display segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Segment {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    DecimalPoint = 7,
}

impl Segment {
    /// Every segment, in bit order
    pub const ALL: [Segment; 8] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
        Segment::DecimalPoint,
    ];

    /// Bit mask for this segment in a pattern byte
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

/// Check whether `segment` is lit in `pattern`
pub const fn is_lit(pattern: u8, segment: Segment) -> bool {
    pattern & segment.mask() != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_cover_the_byte() {
        let mut all = 0u8;
        for segment in Segment::ALL {
            assert_eq!(all & segment.mask(), 0, "{:?} overlaps", segment);
            all |= segment.mask();
        }
        assert_eq!(all, 0xFF);
    }

    #[test]
    fn test_layout_constants() {
        assert_eq!(Segment::DecimalPoint.mask(), DECIMAL_POINT);
        assert_eq!(SEGMENTS_MASK & DECIMAL_POINT, 0);
        assert_eq!(SEGMENTS_MASK | DECIMAL_POINT, 0xFF);
        assert_eq!(Segment::A.mask(), 0b0000_0001);
        assert_eq!(Segment::G.mask(), 0b0100_0000);
    }

    #[test]
    fn test_is_lit() {
        // "1" lights b and c only
        let one = 0b0000_0110;
        assert!(is_lit(one, Segment::B));
        assert!(is_lit(one, Segment::C));
        assert!(!is_lit(one, Segment::A));
        assert!(!is_lit(one, Segment::DecimalPoint));
        assert!(!is_lit(BLANK, Segment::G));
        assert!(is_lit(0xFF, Segment::DecimalPoint));
    }
}
