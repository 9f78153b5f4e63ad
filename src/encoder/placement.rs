//! Codeword placement into the module matrix following the zigzag pattern
use crate::models::ModuleMatrix;

impl ModuleMatrix {
    /// Write `bits` into the non-reserved modules in placement order.
    ///
    /// Column pairs are walked from the right edge leftward, skipping the
    /// vertical timing column; the scan direction flips after every pair,
    /// starting upward. Once `bits` runs dry the remaining cells are light.
    /// Returns the number of bits consumed.
    pub fn map_data<I>(&mut self, bits: I) -> usize
    where
        I: IntoIterator<Item = bool>,
    {
        let dimension = self.size();
        let mut bits = bits.into_iter();
        let mut consumed = 0usize;

        let mut upward = true;
        let mut col = dimension as i32 - 1;

        while col > 0 {
            if col == 6 {
                col -= 1;
                continue;
            }

            for step in 0..dimension {
                let row = if upward { dimension - 1 - step } else { step };
                for x in [col as usize, col as usize - 1] {
                    if self.is_reserved(x, row) {
                        continue;
                    }
                    let dark = match bits.next() {
                        Some(bit) => {
                            consumed += 1;
                            bit
                        }
                        None => false,
                    };
                    self.set(x, row, dark);
                }
            }

            upward = !upward;
            col -= 2;
        }

        consumed
    }
}

#[cfg(test)]
mod tests {
    use crate::encoder::tables::raw_data_modules;
    use crate::models::{ModuleMatrix, Version};

    fn placed(n: u8) -> ModuleMatrix {
        let mut matrix = ModuleMatrix::new(Version::new(n).unwrap());
        matrix.place_structural_patterns();
        matrix
    }

    #[test]
    fn test_first_bits_fill_bottom_right_pair() {
        let mut matrix = placed(1);
        // Up the rightmost pair: (20,20), (19,20), (20,19), (19,19), ...
        let consumed = matrix.map_data([true, false, false, true]);
        assert_eq!(consumed, 4);
        assert!(matrix.get(20, 20));
        assert!(!matrix.get(19, 20));
        assert!(!matrix.get(20, 19));
        assert!(matrix.get(19, 19));
        assert!(!matrix.get(20, 18));
    }

    #[test]
    fn test_direction_flips_per_pair() {
        let mut matrix = placed(1);
        // Rightmost pair has 12 data rows (9..=20) = 24 bits, then the next
        // pair starts at its top data row going down.
        let mut bits = vec![false; 24];
        bits.push(true);
        matrix.map_data(bits);
        assert!(matrix.get(18, 9));
        assert!(!matrix.get(18, 20));
    }

    #[test]
    fn test_consumes_exactly_the_data_modules() {
        for n in 1..=3u8 {
            let version = Version::new(n).unwrap();
            let mut matrix = placed(n);
            let available = raw_data_modules(version);
            let consumed = matrix.map_data(std::iter::repeat(true).take(available + 50));
            assert_eq!(consumed, available);
            assert_eq!(
                matrix.modules().count_ones(),
                available + placed(n).modules().count_ones()
            );
        }
    }

    #[test]
    fn test_short_stream_leaves_rest_light() {
        let mut matrix = placed(2);
        let before = matrix.modules().count_ones();
        let consumed = matrix.map_data([true; 8]);
        assert_eq!(consumed, 8);
        assert_eq!(matrix.modules().count_ones(), before + 8);
    }

    #[test]
    fn test_reserved_cells_untouched() {
        let reference = placed(3);
        let mut matrix = placed(3);
        matrix.map_data(std::iter::repeat(true));
        let size = matrix.size();
        for y in 0..size {
            for x in 0..size {
                if reference.is_reserved(x, y) {
                    assert_eq!(matrix.get(x, y), reference.get(x, y), "({}, {})", x, y);
                }
            }
        }
    }
}
