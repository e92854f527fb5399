//! Endianness utility functions

/// Convert a u64 from little-endian byte order to native byte order
pub fn u64_from_le_bytes(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Convert a u64 from native byte order to little-endian bytes
pub fn u64_to_le_bytes(value: u64) -> [u8; 8] {
    value.to_le_bytes()
}

/// Load `W` little-endian 64-bit words from `bytes`.
///
/// `bytes` must hold exactly `8 * W` bytes; word `i` is taken from
/// `bytes[8 * i..8 * i + 8]`.
pub fn words_from_le_bytes<const W: usize>(bytes: &[u8]) -> [u64; W] {
    assert_eq!(bytes.len(), 8 * W);
    let mut words = [0u64; W];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        *word = u64_from_le_bytes(chunk);
    }
    words
}

/// Store `W` words as little-endian bytes into `out`.
pub fn words_to_le_bytes<const W: usize>(words: &[u64; W], out: &mut [u8]) {
    assert_eq!(out.len(), 8 * W);
    for (chunk, word) in out.chunks_exact_mut(8).zip(words.iter()) {
        chunk.copy_from_slice(&u64_to_le_bytes(*word));
    }
}
