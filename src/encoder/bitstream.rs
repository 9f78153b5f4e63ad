//! Data codeword construction (byte mode)
use crate::encoder::tables::CapacityEntry;
use crate::error::{EncodeError, Result};
use crate::models::Version;

/// Mode indicator 0100
pub const BYTE_MODE: u32 = 0b0100;
const MODE_BITS: usize = 4;
const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Append-only bit sequence, most significant bit first
#[derive(Debug, Default, Clone)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    /// Empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `count` bits of `value`, high bit first
    pub fn append_bits(&mut self, value: u32, count: usize) {
        debug_assert!(count <= 32);
        for i in (0..count).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
    }

    /// Number of bits appended so far
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether no bits have been appended
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Pack into bytes; a partial last byte is zero-filled
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |byte, (i, &bit)| byte | ((bit as u8) << (7 - i)))
            })
            .collect()
    }
}

/// Bits of `bytes` in transmission order (MSB of the first byte first)
pub fn codeword_bits<'a, I>(bytes: I) -> impl Iterator<Item = bool> + 'a
where
    I: IntoIterator<Item = &'a u8>,
    I::IntoIter: 'a,
{
    bytes
        .into_iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
}

/// Mode indicator plus character count, rounded up to whole bytes
pub fn overhead_bytes(version: Version) -> usize {
    (MODE_BITS + version.char_count_bits()).div_ceil(8)
}

/// Builds the data codewords of one symbol
pub struct BitStreamBuilder;

impl BitStreamBuilder {
    /// Exactly `capacity.data_bytes` bytes: mode, count, payload, terminator,
    /// byte alignment, then alternating 0xEC/0x11 padding.
    pub fn build(text: &[u8], capacity: &CapacityEntry) -> Result<Vec<u8>> {
        let count_bits = capacity.version.char_count_bits();
        let capacity_bits = capacity.data_bytes * 8;
        let max_payload = capacity.data_bytes.saturating_sub(overhead_bytes(capacity.version));
        if text.len() >= (1usize << count_bits) || text.len() > max_payload {
            return Err(EncodeError::CapacityExceeded {
                length: text.len(),
                max: max_payload,
            });
        }

        let mut bb = BitBuffer::new();
        bb.append_bits(BYTE_MODE, MODE_BITS);
        bb.append_bits(text.len() as u32, count_bits);
        for &byte in text {
            bb.append_bits(byte as u32, 8);
        }

        // Terminator, then pad to a byte boundary
        let terminator = (capacity_bits - bb.len()).min(4);
        bb.append_bits(0, terminator);
        let alignment = bb.len().wrapping_neg() & 7;
        bb.append_bits(0, alignment);
        debug_assert_eq!(bb.len() % 8, 0);

        let mut bytes = bb.to_bytes();
        let fill = capacity.data_bytes - bytes.len();
        bytes.extend(PAD_BYTES.iter().cycle().take(fill));
        Ok(bytes)
    }
}
