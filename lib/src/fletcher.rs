//! Fletcher-16 over 8-bit words, both running sums reduced modulo 255.

const MODULUS: u16 = 255;

/// Checksum of the first `count` bytes of `data`.
///
/// `count` must not exceed `data.len()`.
pub fn fletcher16(data: &[u8], count: usize) -> u16 {
    let mut a = 0u16;
    let mut b = 0u16;

    for &byte in &data[..count] {
        a = (a + byte as u16) % MODULUS;
        b = (b + a) % MODULUS;
    }

    (b << 8) | a
}

pub fn checksum(msg: &[u8]) -> u16 {
    fletcher16(msg, msg.len())
}
