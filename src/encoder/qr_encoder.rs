//! Main QR code encoder - wires everything together
use crate::debug::debug_log;
use crate::encoder::bitstream::{BitStreamBuilder, codeword_bits};
use crate::encoder::config::EncoderConfig;
use crate::encoder::format::FormatInfo;
use crate::encoder::gf256::FieldTables;
use crate::encoder::mask::{MaskEvaluator, apply_mask};
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::tables::ECC_LEVEL;
use crate::encoder::version::VersionSelector;
use crate::error::Result;
use crate::models::{ModuleMatrix, QrSymbol};

/// Main QR encoder: payload bytes in, finished symbol out
pub struct QrEncoder;

impl QrEncoder {
    /// Run the whole pipeline for `text` under `config`.
    ///
    /// Fails only with `CapacityExceeded` when no allowed version fits.
    pub fn encode(text: &[u8], config: &EncoderConfig) -> Result<QrSymbol> {
        // Step 1: Smallest version that fits
        let capacity = VersionSelector::new(config.max_version()).select(text.len())?;
        debug_log!(
            "payload {} bytes -> version {} ({} data + {} ecc codewords)",
            text.len(),
            capacity.version.number(),
            capacity.data_bytes,
            capacity.ec_bytes
        );

        // Step 2: Data codewords
        let data = BitStreamBuilder::build(text, &capacity)?;

        // Step 3: Error correction codewords
        let rs = ReedSolomonEncoder::new(FieldTables::global(), capacity.ec_bytes);
        let ecc = rs.encode(&data);
        debug_log!("data {:02X?}", data);
        debug_log!("ecc  {:02X?}", ecc);

        // Step 4: Function patterns
        let mut matrix = ModuleMatrix::new(capacity.version);
        matrix.place_structural_patterns();

        // Step 5: Zigzag data placement
        let consumed = matrix.map_data(codeword_bits(data.iter().chain(ecc.iter())));
        debug_assert_eq!(consumed, capacity.total_bytes() * 8);

        // Step 6: Mask trials, then apply the winner
        let evaluator = MaskEvaluator::new(config.penalty(), config.parallel_masks());
        let best = evaluator.select_best_mask(&matrix);
        debug_log!(
            "mask {} wins with score {} ({:?} rules)",
            best.mask.index(),
            best.score,
            config.penalty()
        );
        apply_mask(&mut matrix, best.mask);

        // Step 7: Format information
        FormatInfo::new(ECC_LEVEL, best.mask).write(&mut matrix);

        Ok(matrix.into_symbol(best.mask))
    }
}
