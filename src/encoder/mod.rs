//! QR code encoding modules
//!
//! Everything between a byte payload and the finished module matrix:
//! - GF(256) arithmetic and Reed-Solomon error correction
//! - Version selection and data codeword construction
//! - Function patterns, zigzag data placement, masking, format information

/// BCH codes for format and version info
pub mod bch;
/// Data codeword construction (byte mode)
pub mod bitstream;
/// Encoder settings and environment overrides
pub mod config;
/// Format information encoding (mask pattern, EC level)
pub mod format;
/// Finder, separator, timing, alignment and reserved areas
pub mod function_patterns;
/// GF(256) log/antilog tables
pub mod gf256;
/// Mask application and penalty scoring
pub mod mask;
/// Zigzag placement of codeword bits
pub mod placement;
/// Main QR encoder that orchestrates the encoding pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction codewords
pub mod reed_solomon;
/// Capacity tables (ECC codewords/blocks at level M)
pub mod tables;
/// Version selection and version information (versions 7-40)
pub mod version;
