//! Format information (EC level + mask, BCH(15,5) protected)
use crate::encoder::bch::encode_format;
use crate::models::{BitMatrix, ECLevel, MaskPattern, ModuleMatrix};

/// Format info is 15 bits (5 data + 10 ECC), stored twice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Error correction level bits
    pub ec_level: ECLevel,
    /// Mask applied to the data modules
    pub mask: MaskPattern,
}

impl FormatInfo {
    /// Format info for a level and mask
    pub fn new(ec_level: ECLevel, mask: MaskPattern) -> Self {
        Self { ec_level, mask }
    }

    /// Masked 15-bit codeword
    pub fn codeword(&self) -> u16 {
        encode_format((self.ec_level.format_bits() << 3) | self.mask.index())
    }

    /// Color both format strips. The cells were reserved during structural
    /// placement; only their color changes here.
    pub fn write(&self, matrix: &mut ModuleMatrix) {
        let bits = self.codeword();
        let (primary, secondary) = strip_positions(matrix.size());
        for i in 0..15 {
            let dark = (bits >> i) & 1 == 1;
            let (x, y) = primary[i];
            matrix.set(x, y, dark);
            let (x, y) = secondary[i];
            matrix.set(x, y, dark);
        }
    }

    /// Read the copy around the top-left finder and decode it, tolerating up
    /// to three flipped bits. Falls back to the split copy.
    pub fn read(modules: &BitMatrix) -> Option<Self> {
        let (primary, secondary) = strip_positions(modules.width());
        let gather = |positions: &[(usize, usize); 15]| {
            positions
                .iter()
                .enumerate()
                .fold(0u16, |bits, (i, &(x, y))| bits | ((modules.get(x, y) as u16) << i))
        };
        Self::decode(gather(&primary)).or_else(|| Self::decode(gather(&secondary)))
    }

    /// Nearest valid codeword within Hamming distance 3
    pub fn decode(codeword: u16) -> Option<Self> {
        (0..32u8)
            .map(|data| (data, (encode_format(data) ^ codeword).count_ones()))
            .filter(|&(_, distance)| distance <= 3)
            .min_by_key(|&(_, distance)| distance)
            .map(|(data, _)| {
                Self::new(
                    ECLevel::from_format_bits(data >> 3),
                    MaskPattern::from_bits(data),
                )
            })
    }
}

/// (x, y) of codeword bit i in each copy, bit 0 first
fn strip_positions(size: usize) -> ([(usize, usize); 15], [(usize, usize); 15]) {
    let mut primary = [(0, 0); 15];
    let mut secondary = [(0, 0); 15];
    for i in 0..15 {
        primary[i] = match i {
            0..=5 => (8, i),
            6 => (8, 7),
            7 => (8, 8),
            8 => (7, 8),
            _ => (14 - i, 8),
        };
        secondary[i] = if i < 8 {
            (size - 1 - i, 8)
        } else {
            (8, size - 15 + i)
        };
    }
    (primary, secondary)
}
