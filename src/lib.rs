//! QR Forge - byte-mode QR code symbol encoder
//!
//! Turns an arbitrary byte string into the module matrix of a QR symbol
//! (level M, versions 1-3). Rendering the matrix is left to the caller.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod debug;
/// QR code encoding modules (error correction, placement, masking, format info)
pub mod encoder;
/// Encoder error type
pub mod error;
/// Core data structures (QrSymbol, BitMatrix, ModuleMatrix, Version, etc.)
pub mod models;

pub use encoder::config::EncoderConfig;
pub use encoder::mask::PenaltyRules;
pub use error::{EncodeError, Result};
pub use models::{BitMatrix, ECLevel, MaskPattern, QrSymbol, Version};

use encoder::config::env_config;
use encoder::qr_encoder::QrEncoder;

/// Encode `text` into a QR symbol
///
/// # Arguments
/// * `text` - Payload bytes, placed verbatim in byte mode
///
/// # Returns
/// The finished symbol, or `CapacityExceeded` when the payload does not fit
/// the largest allowed version
///
/// Settings come from the environment (`QR_MAX_VERSION`, `QR_MASK_RULES`,
/// `QR_PARALLEL_MASKS`), read once per process.
pub fn generate(text: &[u8]) -> Result<QrSymbol> {
    generate_with(text, env_config())
}

/// Encode `text` with explicit settings
pub fn generate_with(text: &[u8], config: &EncoderConfig) -> Result<QrSymbol> {
    QrEncoder::encode(text, config)
}

/// Encode the UTF-8 bytes of `text` as-is
pub fn generate_str(text: &str) -> Result<QrSymbol> {
    generate(text.as_bytes())
}

/// Encoder with a fixed configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Create an encoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with the given settings
    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Settings used by this encoder
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode a byte payload
    pub fn encode(&self, text: &[u8]) -> Result<QrSymbol> {
        generate_with(text, &self.config)
    }

    /// Encode the UTF-8 bytes of a string
    pub fn encode_str(&self, text: &str) -> Result<QrSymbol> {
        self.encode(text.as_bytes())
    }
}
