//! Byte-order conversion helpers
//!
//! Standalone utility with no interface to the buffer core.

/// Reverse the byte order of a 32-bit value
///
/// `0x01020304` becomes `0x04030201`.
pub fn reverse_bytes(value: u32) -> u32 {
    value.swap_bytes()
}

/// Reinterpret a big-endian 32-bit value as little-endian
pub fn to_little_endian(value: u32) -> u32 {
    u32::from_le_bytes(value.to_be_bytes())
}

/// Reinterpret a little-endian 32-bit value as big-endian
pub fn to_big_endian(value: u32) -> u32 {
    u32::from_be_bytes(value.to_le_bytes())
}
