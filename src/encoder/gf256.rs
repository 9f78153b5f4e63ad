//! GF(256) arithmetic for QR error correction
//! Primitive polynomial x^8 + x^4 + x^3 + x^2 + 1, generator alpha = 2
use std::sync::OnceLock;

/// Reduction polynomial including the x^8 term
pub const PRIMITIVE_POLY: u16 = 0x11D;

/// Log/antilog tables, built once and only ever read afterwards.
///
/// `exp` is doubled to 510 entries so a sum of two logarithms (at most 508)
/// indexes it directly.
#[derive(Debug, Clone)]
pub struct FieldTables {
    exp: [u8; 510],
    log: [u8; 256],
}

static GLOBAL_TABLES: OnceLock<FieldTables> = OnceLock::new();

impl FieldTables {
    /// Build the tables by repeated doubling modulo the primitive polynomial
    pub fn new() -> Self {
        let mut exp = [0u8; 510];
        let mut log = [0u8; 256];

        let mut x: u16 = 1;
        for (i, slot) in exp.iter_mut().take(255).enumerate() {
            *slot = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIMITIVE_POLY;
            }
        }
        exp.copy_within(0..255, 255);

        Self { exp, log }
    }

    /// Shared process-wide tables
    pub fn global() -> &'static FieldTables {
        GLOBAL_TABLES.get_or_init(FieldTables::new)
    }

    /// alpha^i for i < 510
    pub fn exp(&self, i: usize) -> u8 {
        self.exp[i % 510]
    }

    /// Discrete logarithm; `None` for zero
    pub fn log(&self, a: u8) -> Option<u8> {
        (a != 0).then(|| self.log[a as usize])
    }

    /// Product in GF(256); zero if either factor is zero
    pub fn multiply(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }

    /// a^n, with a^0 = 1 for every a
    pub fn power(&self, a: u8, n: usize) -> u8 {
        if n == 0 {
            return 1;
        }
        if a == 0 {
            return 0;
        }
        let log_a = self.log[a as usize] as usize;
        self.exp[(log_a * (n % 255)) % 255]
    }

    /// Multiplicative inverse; zero has none
    pub fn inverse(&self, a: u8) -> Option<u8> {
        if a == 0 {
            return None;
        }
        Some(self.exp[255 - self.log[a as usize] as usize])
    }

    /// a / b; `None` when b is zero
    pub fn divide(&self, a: u8, b: u8) -> Option<u8> {
        let inv = self.inverse(b)?;
        Some(self.multiply(a, inv))
    }
}

impl Default for FieldTables {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gf256_basic() {
        let gf = FieldTables::new();
        // 0 * anything = 0
        assert_eq!(gf.multiply(0, 5), 0);
        assert_eq!(gf.multiply(5, 0), 0);
        assert_eq!(gf.multiply(1, 87), 87);

        // Known values of alpha^i
        assert_eq!(gf.exp(0), 1);
        assert_eq!(gf.exp(8), 29);
        assert_eq!(gf.exp(25), 3);
        assert_eq!(gf.exp(255), 1);
        assert_eq!(gf.log(3), Some(25));
        assert_eq!(gf.log(0), None);
    }

    #[test]
    fn test_inverse_of_zero() {
        let gf = FieldTables::new();
        assert_eq!(gf.inverse(0), None);
        assert_eq!(gf.divide(7, 0), None);
        assert_eq!(gf.divide(0, 7), Some(0));
    }

    #[test]
    fn test_field_axioms_exhaustive() {
        let gf = FieldTables::new();
        for x in 1..=255u8 {
            assert_eq!(gf.multiply(x, gf.inverse(x).unwrap()), 1, "x = {}", x);
            assert_eq!(gf.exp(gf.log(x).unwrap() as usize), x);
        }
    }

    #[test]
    fn test_exp_generates_every_nonzero_element() {
        let gf = FieldTables::new();
        let mut seen = [false; 256];
        for i in 0..255 {
            seen[gf.exp(i) as usize] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn test_pow() {
        let gf = FieldTables::new();
        // alpha^255 = 1 (order of the multiplicative group)
        assert_eq!(gf.power(2, 255), 1);
        assert_eq!(gf.power(2, 256), 2);
        assert_eq!(gf.power(2, 260), gf.power(2, 5));
        assert_eq!(gf.power(0, 10), 0);
        assert_eq!(gf.power(0, 0), 1);
        assert_eq!(gf.power(2, 8), gf.exp(8));
    }

    #[test]
    fn test_global_is_shared() {
        let a = FieldTables::global() as *const FieldTables;
        let b = FieldTables::global() as *const FieldTables;
        assert_eq!(a, b);
    }

    fn carryless_mul(a: u8, b: u8) -> u8 {
        let mut product: u16 = 0;
        for i in 0..8 {
            if (b >> i) & 1 == 1 {
                product ^= (a as u16) << i;
            }
        }
        for i in (8..16).rev() {
            if (product >> i) & 1 == 1 {
                product ^= PRIMITIVE_POLY << (i - 8);
            }
        }
        product as u8
    }

    proptest! {
        #[test]
        fn prop_multiply_matches_polynomial_product(a in any::<u8>(), b in any::<u8>()) {
            let gf = FieldTables::global();
            prop_assert_eq!(gf.multiply(a, b), carryless_mul(a, b));
        }

        #[test]
        fn prop_multiply_commutes_and_distributes(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
            let gf = FieldTables::global();
            prop_assert_eq!(gf.multiply(a, b), gf.multiply(b, a));
            prop_assert_eq!(gf.multiply(a, b ^ c), gf.multiply(a, b) ^ gf.multiply(a, c));
        }

        #[test]
        fn prop_divide_undoes_multiply(a in any::<u8>(), b in 1..=255u8) {
            let gf = FieldTables::global();
            prop_assert_eq!(gf.divide(gf.multiply(a, b), b), Some(a));
        }
    }
}
