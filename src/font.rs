//! Segment patterns for the 128 ASCII characters.
//!
//! Each entry packs the seven segments and the decimal point as
//! `DP G F E D C B A` from MSB to LSB (DP, middle, top left, bottom
//! left, bottom, bottom right, top right, top). Third-party display
//! modules depend on this exact mapping, so the table must not change.

/// One segment mask per ASCII code 0..=127.
pub const SEGMENTS: [u8; 128] = [
    0x7E, 0x30, 0x6D, 0x79, 0x33, 0x5B, 0x5F, 0x72, // 0x00..0x07
    0x7E, 0x7B, 0x7D, 0x1F, 0x0D, 0x3D, 0x6F, 0x47, // 0x08..0x0F
    0x7E, 0x06, 0x6D, 0x4F, 0x17, 0x5B, 0x7B, 0x1E, // 0x10..0x17
    0x7F, 0x5F, 0x6F, 0x73, 0x61, 0x67, 0x7D, 0x39, // 0x18..0x1F
    0x00, 0x30, 0x22, 0x41, 0x49, 0x25, 0x31, 0x02, // ' '..'\''
    0x4A, 0x68, 0x42, 0x07, 0x04, 0x01, 0x00, 0x25, // '('..'/'
    0x7E, 0x30, 0x6D, 0x79, 0x33, 0x5B, 0x5F, 0x72, // '0'..'7'
    0x7F, 0x7B, 0x48, 0x58, 0x43, 0x09, 0x61, 0x65, // '8'..'?'
    0x7D, 0x77, 0x7F, 0x4E, 0x3D, 0x4F, 0x47, 0x5E, // '@'..'G'
    0x37, 0x06, 0x3C, 0x57, 0x0E, 0x54, 0x76, 0x7E, // 'H'..'O'
    0x67, 0x6B, 0x66, 0x5B, 0x0F, 0x3E, 0x3E, 0x2A, // 'P'..'W'
    0x37, 0x3B, 0x6D, 0x1E, 0x13, 0x36, 0x62, 0x08, // 'X'..'_'
    0x20, 0x7D, 0x1F, 0x0D, 0x3D, 0x6F, 0x47, 0x7B, // '`'..'g'
    0x17, 0x04, 0x18, 0x57, 0x06, 0x14, 0x15, 0x1D, // 'h'..'o'
    0x67, 0x73, 0x05, 0x5B, 0x0F, 0x1C, 0x1C, 0x14, // 'p'..'w'
    0x37, 0x3B, 0x6D, 0x4B, 0x55, 0x63, 0x40, 0x00, // 'x'..0x7F
];

/// Returns the segment mask for an ASCII code. Codes above 0x7F render
/// blank rather than indexing out of the table.
pub fn lookup(code: u8) -> u8 {
    SEGMENTS.get(code as usize).copied().unwrap_or(0x00)
}
