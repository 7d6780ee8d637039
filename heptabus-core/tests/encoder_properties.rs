//! Algebraic properties of the segment encoder

use heptabus_core::{LowercaseStyle, SegmentEncoder};
use proptest::prelude::*;

const ENCODER: SegmentEncoder = SegmentEncoder::new();

fn is_known(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '=' | '-' | '_' | '\'' | '"' | ' ')
}

proptest! {
    #[test]
    fn test_decimal_point_only_touches_bit_seven(c in any::<char>()) {
        let plain = ENCODER.encode_char(c);
        prop_assert_eq!(plain & 0x80, 0);
        prop_assert_eq!(ENCODER.encode_char_with_dp(c, false), plain);
        prop_assert_eq!(ENCODER.encode_char_with_dp(c, true), plain | 0x80);
    }

    #[test]
    fn test_unknown_characters_are_blank(c in any::<char>().prop_filter("known glyph", |c| !is_known(*c))) {
        prop_assert_eq!(ENCODER.encode_char(c), 0x00);
    }

    #[test]
    fn test_code_point_matches_character(code in 0u32..=0xFF, dp in any::<bool>()) {
        let c = char::from(code as u8);
        prop_assert_eq!(ENCODER.encode_code_point(code), ENCODER.encode_char(c));
        prop_assert_eq!(
            ENCODER.encode_code_point_with_dp(code, dp),
            ENCODER.encode_char_with_dp(c, dp)
        );
    }

    #[test]
    fn test_code_point_uses_low_byte(code in any::<u32>()) {
        prop_assert_eq!(ENCODER.encode_code_point(code), ENCODER.encode_code_point(code & 0xFF));
    }

    #[test]
    fn test_blank_lowercase_only_changes_lowercase(c in any::<char>()) {
        let blank = SegmentEncoder::with_lowercase(LowercaseStyle::Blank);
        if c.is_ascii_lowercase() {
            prop_assert_eq!(blank.encode_char(c), 0x00);
        } else {
            prop_assert_eq!(blank.encode_char(c), ENCODER.encode_char(c));
        }
    }
}

#[test]
fn test_every_known_glyph_lights_something_except_space() {
    for c in ('A'..='Z').chain('a'..='z').chain('0'..='9').chain("=-_'\"".chars()) {
        assert_ne!(ENCODER.encode_char(c), 0, "{c:?} renders blank");
    }
    assert_eq!(ENCODER.encode_char(' '), 0);
}
