//! Character glyph tables
//!
//! Each entry is a pattern in `DPgfedcba` order with the decimal point
//! bit clear. The decimal point is applied by the encoder, never stored
//! here.
//!
//! The uppercase, digit and punctuation patterns are the ones the deployed
//! subordinate firmware expects, including its non-standard shapes: `5`
//! and `S` light `a c f g`, `7` lights `a f g`, and `C` is drawn like `E`.
//! Where a letter cannot be told apart from a digit it shares the digit's
//! pattern (B/8, O/0, Z/2).

/// Uppercase letters, indexed by `c - 'A'`
pub const UPPERCASE: [u8; 26] = [
    0b0111_0111, // A
    0b0111_1111, // B, same as 8
    0b0111_1001, // C
    0b0001_1111, // D
    0b0111_1001, // E
    0b0111_0001, // F
    0b0011_1101, // G
    0b0111_0110, // H
    0b0011_0000, // I
    0b0000_1110, // J
    0b0111_0101, // K
    0b0011_1000, // L
    0b0010_1011, // M
    0b0011_0111, // N
    0b0011_1111, // O, same as 0
    0b0111_0011, // P
    0b0101_1011, // Q
    0b0111_1011, // R
    0b0110_0101, // S, same as 5
    0b0011_0001, // T
    0b0011_1110, // U
    0b0010_1110, // V
    0b0001_1101, // W
    0b0100_1001, // X
    0b0110_1010, // Y
    0b0101_1011, // Z, same as 2
];

/// Lowercase letters, indexed by `c - 'a'`
pub const LOWERCASE: [u8; 26] = [
    0b0101_1111, // a
    0b0111_1100, // b
    0b0101_1000, // c
    0b0101_1110, // d
    0b0111_1011, // e
    0b0111_0001, // f, same as F
    0b0110_1111, // g, same as 9
    0b0111_0100, // h
    0b0001_0000, // i
    0b0000_1100, // j
    0b0111_0101, // k, same as K
    0b0011_0000, // l
    0b0101_0101, // m
    0b0101_0100, // n
    0b0101_1100, // o
    0b0111_0011, // p, same as P
    0b0110_0111, // q
    0b0101_0000, // r
    0b0110_1101, // s
    0b0111_1000, // t
    0b0001_1100, // u
    0b0001_1100, // v, same as u
    0b0010_1010, // w
    0b0111_0110, // x, same as H
    0b0110_1110, // y
    0b0101_1011, // z, same as 2
];

/// Decimal digits, indexed by `c - '0'`
pub const DIGITS: [u8; 10] = [
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_0101, // 5
    0b0111_1101, // 6
    0b0110_0001, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
];

/// Punctuation, in the order `=`, `-`, `_`, `'`, `"`, space
pub const SPECIAL: [u8; 6] = [
    0b0100_1000, // =
    0b0100_0000, // -
    0b0000_1000, // _
    0b0010_0000, // '
    0b0010_0010, // "
    0b0000_0000, // space
];
