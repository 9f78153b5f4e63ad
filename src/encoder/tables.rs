use crate::models::{ECLevel, Version};

/// The one error correction level this encoder produces
pub const ECC_LEVEL: ECLevel = ECLevel::M;

// Level M rows of the QR Code Model 2 block tables. Index: version.
const ECC_CODEWORDS_PER_BLOCK_M: [u8; 41] = [
    0, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28, 28,
    28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
];

const NUM_ERROR_CORRECTION_BLOCKS_M: [u8; 41] = [
    0, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21, 23, 25,
    26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
];

const fn last_single_block_version() -> u8 {
    let mut v = 1;
    while v < 40 && NUM_ERROR_CORRECTION_BLOCKS_M[v + 1] == 1 {
        v += 1;
    }
    v as u8
}

/// Largest version whose level-M codewords form a single block.
/// Block interleaving is not implemented, so nothing above this is encoded.
pub const MAX_VERSION: u8 = last_single_block_version();

/// Data/ECC split of one version at [`ECC_LEVEL`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityEntry {
    /// Version this entry describes
    pub version: Version,
    /// Data codewords, including mode/count overhead and padding
    pub data_bytes: usize,
    /// Error correction codewords
    pub ec_bytes: usize,
}

impl CapacityEntry {
    /// Total codewords in the symbol
    pub fn total_bytes(&self) -> usize {
        self.data_bytes + self.ec_bytes
    }
}

/// Modules available for codewords and remainder bits once every function
/// pattern (including format and version areas) is excluded.
pub fn raw_data_modules(version: Version) -> usize {
    let v = version.number() as usize;
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            result -= 36;
        }
    }
    result
}

/// Capacity of `version` at level M; `None` when the version needs more
/// than one error correction block.
pub fn capacity(version: Version) -> Option<CapacityEntry> {
    let v = version.number() as usize;
    if NUM_ERROR_CORRECTION_BLOCKS_M[v] != 1 {
        return None;
    }
    let ec_bytes = ECC_CODEWORDS_PER_BLOCK_M[v] as usize;
    Some(CapacityEntry {
        version,
        data_bytes: raw_data_modules(version) / 8 - ec_bytes,
        ec_bytes,
    })
}

/// Every supported entry, smallest version first
pub fn capacity_table() -> Vec<CapacityEntry> {
    (1..=MAX_VERSION)
        .filter_map(Version::new)
        .filter_map(capacity)
        .collect()
}
