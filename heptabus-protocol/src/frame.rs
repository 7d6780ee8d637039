//! Digit frame encoding and decoding.
//!
//! Frame format:
//! - DIGIT (1 byte): 0-based digit position on the subordinate's display
//! - SEGMENTS (1 byte): segment pattern, see [`crate::segment`]

/// Length of a digit frame on the wire
pub const FRAME_LEN: usize = 2;

/// Errors that can occur during frame encoding or decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Frame is incomplete (need more bytes)
    Incomplete,
    /// Trailing bytes after the frame
    InvalidFrame,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// A single digit update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitFrame {
    /// Target digit position
    pub digit: u8,
    /// Segment pattern (DPgfedcba)
    pub segments: u8,
}

impl DigitFrame {
    /// Create a frame for the given digit and segment pattern
    pub const fn new(digit: u8, segments: u8) -> Self {
        Self { digit, segments }
    }

    /// Wire representation
    pub const fn to_bytes(self) -> [u8; FRAME_LEN] {
        [self.digit, self.segments]
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        if buffer.len() < FRAME_LEN {
            return Err(FrameError::BufferTooSmall);
        }

        buffer[..FRAME_LEN].copy_from_slice(&self.to_bytes());
        Ok(FRAME_LEN)
    }

    /// Decode a frame as received by the subordinate
    ///
    /// The bus delivers one frame per transaction, so the input must be
    /// exactly [`FRAME_LEN`] bytes.
    pub fn decode(data: &[u8]) -> Result<Self, FrameError> {
        match data {
            [digit, segments] => Ok(Self::new(*digit, *segments)),
            _ if data.len() < FRAME_LEN => Err(FrameError::Incomplete),
            _ => Err(FrameError::InvalidFrame),
        }
    }
}

impl From<DigitFrame> for [u8; FRAME_LEN] {
    fn from(frame: DigitFrame) -> Self {
        frame.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout() {
        let frame = DigitFrame::new(3, 0b0111_0111);
        assert_eq!(frame.to_bytes(), [3, 0b0111_0111]);

        let bytes: [u8; FRAME_LEN] = frame.into();
        assert_eq!(bytes[0], 3); // digit
        assert_eq!(bytes[1], 0b0111_0111); // segments
    }

    #[test]
    fn test_frame_encode() {
        let frame = DigitFrame::new(0, 0xFF);
        let mut buffer = [0xAAu8; 4];
        let len = frame.encode(&mut buffer).unwrap();

        assert_eq!(len, FRAME_LEN);
        assert_eq!(buffer, [0, 0xFF, 0xAA, 0xAA]);
    }

    #[test]
    fn test_frame_encode_buffer_too_small() {
        let frame = DigitFrame::new(1, 0x06);
        let mut buffer = [0u8; 1];
        assert_eq!(frame.encode(&mut buffer), Err(FrameError::BufferTooSmall));
    }

    #[test]
    fn test_decode() {
        assert_eq!(DigitFrame::decode(&[7, 0x3F]), Ok(DigitFrame::new(7, 0x3F)));
    }

    #[test]
    fn test_decode_wrong_length() {
        assert_eq!(DigitFrame::decode(&[]), Err(FrameError::Incomplete));
        assert_eq!(DigitFrame::decode(&[1]), Err(FrameError::Incomplete));
        assert_eq!(DigitFrame::decode(&[1, 2, 3]), Err(FrameError::InvalidFrame));
    }

    #[test]
    fn test_digit_index_is_not_range_checked() {
        // Out-of-range digits are rejected by the subordinate, not here
        let frame = DigitFrame::new(u8::MAX, 0x00);
        assert_eq!(DigitFrame::decode(&frame.to_bytes()), Ok(frame));
    }
}
