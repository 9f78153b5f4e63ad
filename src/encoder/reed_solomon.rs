//! Reed-Solomon error correction codewords for QR symbols
//! Generator polynomial roots are alpha^0 .. alpha^(n-1)
use crate::encoder::gf256::FieldTables;

/// Generator polynomial of degree `ec_len`, highest degree first.
///
/// The leading coefficient is always 1, so the result has `ec_len + 1` terms.
pub fn build_generator(field: &FieldTables, ec_len: usize) -> Vec<u8> {
    let mut poly = Vec::with_capacity(ec_len + 1);
    poly.push(1u8);
    for i in 0..ec_len {
        let root = field.exp(i);
        // Multiply by (x - root) = (x + root) in GF(256)
        poly.push(0);
        for j in (1..poly.len()).rev() {
            poly[j] ^= field.multiply(poly[j - 1], root);
        }
    }
    poly
}

/// Reed-Solomon encoder for a single data block
pub struct ReedSolomonEncoder<'a> {
    field: &'a FieldTables,
    generator: Vec<u8>,
}

impl<'a> ReedSolomonEncoder<'a> {
    /// Encoder producing `ec_len` ECC bytes per block
    pub fn new(field: &'a FieldTables, ec_len: usize) -> Self {
        Self {
            field,
            generator: build_generator(field, ec_len),
        }
    }

    /// Number of ECC bytes produced per block
    pub fn ec_len(&self) -> usize {
        self.generator.len() - 1
    }

    /// Generator coefficients, highest degree first
    pub fn generator(&self) -> &[u8] {
        &self.generator
    }

    /// Remainder of `data * x^n` divided by the generator, `n = ec_len()`.
    ///
    /// The remainder register never changes length; `head` marks its
    /// logical first slot so a shift is a single index step.
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let n = self.ec_len();
        if n == 0 {
            return Vec::new();
        }
        let divisor = &self.generator[1..];

        let mut register = vec![0u8; n];
        let mut head = 0usize;
        for &byte in data {
            let factor = byte ^ register[head];
            // Old leading slot becomes the zeroed tail
            register[head] = 0;
            head = (head + 1) % n;
            if factor != 0 {
                for (i, &coef) in divisor.iter().enumerate() {
                    register[(head + i) % n] ^= self.field.multiply(coef, factor);
                }
            }
        }

        (0..n).map(|i| register[(head + i) % n]).collect()
    }
}
