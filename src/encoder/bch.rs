//! BCH codes protecting format and version information

/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
pub const FORMAT_GENERATOR: u32 = 0b101_0011_0111;
/// XOR mask keeping the format codeword from ever being all-zero
pub const FORMAT_MASK: u16 = 0b101_0100_0001_0010;
/// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
pub const VERSION_GENERATOR: u32 = 0x1F25;

fn degree(value: u32) -> u32 {
    31 - value.leading_zeros()
}

/// Remainder of GF(2) polynomial division
fn poly_remainder(mut dividend: u32, generator: u32) -> u32 {
    let gen_degree = degree(generator);
    while dividend != 0 && degree(dividend) >= gen_degree {
        dividend ^= generator << (degree(dividend) - gen_degree);
    }
    dividend
}

/// 15-bit masked format codeword for five data bits (level bits << 3 | mask)
pub fn encode_format(data: u8) -> u16 {
    let data = (data & 0x1F) as u32;
    let shifted = data << 10;
    (shifted | poly_remainder(shifted, FORMAT_GENERATOR)) as u16 ^ FORMAT_MASK
}

/// 18-bit version codeword (versions 7-40)
pub fn encode_version(version: u8) -> u32 {
    let shifted = ((version & 0x3F) as u32) << 12;
    shifted | poly_remainder(shifted, VERSION_GENERATOR)
}
