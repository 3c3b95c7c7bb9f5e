//! CRC-32 checksum computation.
//!
//! ZIP archives store a CRC-32 of each entry's uncompressed data, computed
//! with the reflected polynomial `0xEDB88320`: the register starts at
//! all-ones, each input byte is folded into its low bits, and the final
//! value is the one's complement of the register. This is the same checksum
//! produced by `cksum -o 3`, zlib's `crc32()`, and every ZIP tool.

/// Reflected CRC-32 polynomial used by the ZIP format.
const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Byte-indexed lookup table of CRC values, built once at compile time.
const TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ POLYNOMIAL
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Compute the CRC-32 checksum of a byte slice.
///
/// Pure function of its input; the checksum of empty input is 0.
pub fn compute(data: &[u8]) -> u32 {
    let mut register = u32::MAX;
    for &byte in data {
        let index = (register ^ byte as u32) & 0xFF;
        register = (register >> 8) ^ TABLE[index as usize];
    }
    !register
}
