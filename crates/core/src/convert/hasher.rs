//! Content fingerprinting for cache keys.
//!
//! Uses CRC-32 (IEEE 802.3, reflected) with a precomputed lookup table.
//! Non-cryptographic: two documents with identical bytes get identical
//! fingerprints, which is the only correctness requirement. A collision at
//! this width would cause a false cache hit; accepted as an approximation
//! for non-adversarial input.

/// CRC-32 polynomial (IEEE 802.3, reflected form).
const CRC32_POLY: u32 = 0xEDB8_8320;

/// Precomputed CRC-32 lookup table (256 entries).
const CRC32_TABLE: [u32; 256] = {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut j = 0;
        while j < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ CRC32_POLY;
            } else {
                crc >>= 1;
            }
            j += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
};

/// Length of a fingerprint in hex characters (32 bits).
pub const FINGERPRINT_LEN: usize = 8;

/// Compute the content fingerprint of a byte slice.
///
/// Returns 8 lowercase hex characters: the CRC-32 of the content, rendered
/// in little-endian byte order. Deterministic across calls and process runs.
pub fn fingerprint(data: &[u8]) -> String {
    let mut crc: u32 = !0;
    for &byte in data {
        let idx = ((crc ^ u32::from(byte)) & 0xFF) as usize;
        crc = (crc >> 8) ^ CRC32_TABLE[idx];
    }
    let b = (!crc).to_le_bytes();
    format!("{:02x}{:02x}{:02x}{:02x}", b[0], b[1], b[2], b[3])
}
