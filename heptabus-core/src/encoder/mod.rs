//! Segment encoder
//!
//! Turns a character (or its numeric code) plus a decimal-point flag into
//! the one-byte segment pattern the subordinate latches onto a digit.
//!
//! Encoding is total: anything outside the known character classes
//! renders blank rather than failing, so a display shows an empty digit
//! for an unsupported glyph instead of stopping.

pub mod tables;

use heptabus_protocol::{BLANK, DECIMAL_POINT, SEGMENTS_MASK};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use self::tables::{DIGITS, LOWERCASE, SPECIAL, UPPERCASE};

/// How lowercase letters are rendered
///
/// Some subordinate builds ship with lowercase glyphs disabled, showing
/// every lowercase letter as a blank digit. `Distinct` uses the full
/// lowercase table and is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LowercaseStyle {
    /// Dedicated lowercase shapes
    #[default]
    Distinct,
    /// Lowercase letters render as all segments off
    Blank,
}

/// Character to segment pattern encoder
///
/// Holds no state beyond the lowercase rendering choice; the glyph tables
/// are `const` data in [`tables`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentEncoder {
    lowercase: LowercaseStyle,
}

impl SegmentEncoder {
    /// Create an encoder with full lowercase support
    pub const fn new() -> Self {
        Self {
            lowercase: LowercaseStyle::Distinct,
        }
    }

    /// Create an encoder with the given lowercase rendering
    pub const fn with_lowercase(lowercase: LowercaseStyle) -> Self {
        Self { lowercase }
    }

    /// Lowercase rendering in use
    pub const fn lowercase(&self) -> LowercaseStyle {
        self.lowercase
    }

    /// Pattern for `character`, decimal point off
    ///
    /// Returns [`BLANK`] for anything that is not an ASCII letter, an ASCII
    /// digit, or one of `= - _ ' "` and space.
    pub const fn encode_char(&self, character: char) -> u8 {
        match character {
            'A'..='Z' => UPPERCASE[(character as u8 - b'A') as usize],
            'a'..='z' => match self.lowercase {
                LowercaseStyle::Distinct => LOWERCASE[(character as u8 - b'a') as usize],
                LowercaseStyle::Blank => BLANK,
            },
            '0'..='9' => DIGITS[(character as u8 - b'0') as usize],
            _ => special(character),
        }
    }

    /// Pattern for `character` with the decimal point set as requested
    pub const fn encode_char_with_dp(&self, character: char, decimal_point: bool) -> u8 {
        let glyph = self.encode_char(character) & SEGMENTS_MASK;
        if decimal_point {
            glyph | DECIMAL_POINT
        } else {
            glyph
        }
    }

    /// Pattern for a numeric character code, decimal point off
    ///
    /// Only the low byte of `code` is used (`65` and `0x141` both show
    /// `A`); see [`narrow_code_point`].
    pub const fn encode_code_point(&self, code: u32) -> u8 {
        self.encode_char(narrow_code_point(code))
    }

    /// Pattern for a numeric character code with the decimal point set as
    /// requested
    pub const fn encode_code_point_with_dp(&self, code: u32, decimal_point: bool) -> u8 {
        self.encode_char_with_dp(narrow_code_point(code), decimal_point)
    }
}

/// Reinterpret a character code as a single-byte character
///
/// Codes above `0xFF` keep only their low eight bits, the same narrowing a
/// cast to a byte-wide character type performs. The result is read as
/// Latin-1, so every input maps to some `char`.
pub const fn narrow_code_point(code: u32) -> char {
    code as u8 as char
}

const fn special(character: char) -> u8 {
    match character {
        '=' => SPECIAL[0],
        '-' => SPECIAL[1],
        '_' => SPECIAL[2],
        '\'' => SPECIAL[3],
        '"' => SPECIAL[4],
        ' ' => SPECIAL[5],
        _ => BLANK,
    }
}
