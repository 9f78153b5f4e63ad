//! Version selection and version information (versions 7-40)
use crate::encoder::bch::encode_version;
use crate::encoder::bitstream::overhead_bytes;
use crate::encoder::tables::{CapacityEntry, MAX_VERSION, capacity};
use crate::error::{EncodeError, Result};
use crate::models::{ModuleMatrix, Version};

/// Picks the smallest version whose data capacity holds a payload
pub struct VersionSelector {
    max_version: Version,
}

impl VersionSelector {
    /// Selector over versions `1..=max_version`, capped at [`MAX_VERSION`]
    pub fn new(max_version: Version) -> Self {
        let cap = Version::new(MAX_VERSION).unwrap_or(Version::MIN);
        Self {
            max_version: max_version.min(cap),
        }
    }

    /// Largest version this selector considers
    pub fn max_version(&self) -> Version {
        self.max_version
    }

    /// Linear scan upward from version 1
    pub fn select(&self, payload_len: usize) -> Result<CapacityEntry> {
        self.entries()
            .find(|entry| entry.data_bytes >= payload_len + overhead_bytes(entry.version))
            .ok_or_else(|| EncodeError::CapacityExceeded {
                length: payload_len,
                max: self.max_payload_len(),
            })
    }

    /// Largest payload any allowed version accepts
    pub fn max_payload_len(&self) -> usize {
        self.entries()
            .map(|entry| entry.data_bytes.saturating_sub(overhead_bytes(entry.version)))
            .max()
            .unwrap_or(0)
    }

    fn entries(&self) -> impl Iterator<Item = CapacityEntry> + '_ {
        (1..=self.max_version.number())
            .filter_map(Version::new)
            .filter_map(capacity)
    }
}

/// Version info is 18 bits (6 data + 12 ECC) for versions 7-40
pub struct VersionInfo;

impl VersionInfo {
    /// 18-bit codeword, `None` below version 7
    pub fn codeword(version: Version) -> Option<u32> {
        (version.number() >= 7).then(|| encode_version(version.number()))
    }

    /// Write and reserve both 6x3 blocks: above the bottom-left finder and
    /// left of the top-right finder. No-op below version 7.
    pub fn write(matrix: &mut ModuleMatrix) {
        let Some(bits) = Self::codeword(matrix.version()) else {
            return;
        };
        let size = matrix.size();
        for i in 0..18 {
            let dark = (bits >> i) & 1 == 1;
            let a = size - 11 + i % 3;
            let b = i / 3;
            matrix.reserve(a, b, dark);
            matrix.reserve(b, a, dark);
        }
    }
}
