//! Function pattern placement (finder/separator/timing/alignment/format/version)
use crate::encoder::version::VersionInfo;
use crate::models::{ModuleMatrix, Version};

impl ModuleMatrix {
    /// Draw and reserve every function pattern for this matrix's version.
    ///
    /// Format strips are reserved but left light; [`FormatInfo::write`]
    /// colors them once the mask is known.
    ///
    /// [`FormatInfo::write`]: crate::encoder::format::FormatInfo::write
    pub fn place_structural_patterns(&mut self) {
        let size = self.size();

        // Finder patterns + separators
        self.place_finder(0, 0);
        self.place_finder(size - 7, 0);
        self.place_finder(0, size - 7);

        // Timing patterns (row 6 and column 6), between the separators
        for i in 8..size - 8 {
            self.reserve(i, 6, i % 2 == 0);
            self.reserve(6, i, i % 2 == 0);
        }

        for &cy in &alignment_pattern_positions(self.version()) {
            for &cx in &alignment_pattern_positions(self.version()) {
                // Skip the three finder corners
                let in_tl = cx <= 8 && cy <= 8;
                let in_tr = cx >= size - 9 && cy <= 8;
                let in_bl = cx <= 8 && cy >= size - 9;
                if in_tl || in_tr || in_bl {
                    continue;
                }
                self.place_alignment(cx, cy);
            }
        }

        self.reserve_format_area();

        // Dark module
        self.reserve(8, size - 8, true);

        VersionInfo::write(self);
    }

    /// 7x7 finder with its top-left corner at (x, y), plus the one-module
    /// light separator clipped to the symbol.
    fn place_finder(&mut self, x: usize, y: usize) {
        let size = self.size() as isize;
        for dy in -1..=7isize {
            for dx in -1..=7isize {
                let (xx, yy) = (x as isize + dx, y as isize + dy);
                if xx < 0 || yy < 0 || xx >= size || yy >= size {
                    continue;
                }
                // Chebyshev distance from the finder center
                let ring = (dx - 3).abs().max((dy - 3).abs());
                self.reserve(xx as usize, yy as usize, ring != 2 && ring != 4);
            }
        }
    }

    /// 5x5 alignment pattern centered on (cx, cy)
    fn place_alignment(&mut self, cx: usize, cy: usize) {
        for dy in 0..5usize {
            for dx in 0..5usize {
                let ring = dx.abs_diff(2).max(dy.abs_diff(2));
                self.reserve(cx + dx - 2, cy + dy - 2, ring != 1);
            }
        }
    }

    /// Both format strips: around the top-left finder, and split between
    /// the bottom-left and top-right finders.
    fn reserve_format_area(&mut self) {
        let size = self.size();
        for i in 0..9 {
            if i != 6 {
                self.mark_reserved(8, i);
                self.mark_reserved(i, 8);
            }
        }
        for i in 0..8 {
            self.mark_reserved(size - 1 - i, 8);
            self.mark_reserved(8, size - 1 - i);
        }
    }
}

/// Alignment pattern centers for a given version.
///
/// The first center is always 6 and the last is `size - 7`; the rest are
/// evenly spaced by an even step, which version 32 alone rounds differently.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let num_align = v / 7 + 2;
    let size = version.size();
    let step = if v == 32 {
        26
    } else {
        (v * 4 + num_align * 2 + 1) / (num_align * 2 - 2) * 2
    };

    let mut positions = vec![0usize; num_align];
    positions[0] = 6;
    let mut pos = size - 7;
    for i in (1..num_align).rev() {
        positions[i] = pos;
        pos = pos.saturating_sub(step);
    }
    positions
}
