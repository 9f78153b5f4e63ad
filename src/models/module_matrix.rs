use super::{BitMatrix, MaskPattern, QrSymbol, Version};

/// Module grid under construction: a color layer plus a reserved layer.
///
/// Reserved cells belong to function patterns (finders, separators, timing,
/// alignment, dark module, format and version areas). They are marked during
/// structural placement and are skipped by data mapping and masking.
#[derive(Debug, Clone)]
pub struct ModuleMatrix {
    version: Version,
    dark: BitMatrix,
    reserved: BitMatrix,
}

impl ModuleMatrix {
    /// Empty, all-light grid with nothing reserved
    pub fn new(version: Version) -> Self {
        let size = version.size();
        Self {
            version,
            dark: BitMatrix::square(size),
            reserved: BitMatrix::square(size),
        }
    }

    /// Symbol version this grid is laid out for
    pub fn version(&self) -> Version {
        self.version
    }

    /// Modules per side
    pub fn size(&self) -> usize {
        self.dark.width()
    }

    /// Module color at (x, y)
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.dark.get(x, y)
    }

    /// Set the color of a module; reservation is unchanged
    pub fn set(&mut self, x: usize, y: usize, dark: bool) {
        self.dark.set(x, y, dark);
    }

    /// Flip a module's color
    pub fn toggle(&mut self, x: usize, y: usize) {
        self.dark.toggle(x, y);
    }

    /// Whether (x, y) is a function module
    pub fn is_reserved(&self, x: usize, y: usize) -> bool {
        self.reserved.get(x, y)
    }

    /// Set a function module's color and reserve it
    pub fn reserve(&mut self, x: usize, y: usize, dark: bool) {
        self.dark.set(x, y, dark);
        self.reserved.set(x, y, true);
    }

    /// Reserve a cell without touching its color
    pub fn mark_reserved(&mut self, x: usize, y: usize) {
        self.reserved.set(x, y, true);
    }

    /// Number of function modules
    pub fn reserved_count(&self) -> usize {
        self.reserved.count_ones()
    }

    /// Color layer
    pub fn modules(&self) -> &BitMatrix {
        &self.dark
    }

    /// Reserved layer (true = function module)
    pub fn reserved(&self) -> &BitMatrix {
        &self.reserved
    }

    /// Finish construction, keeping only the color layer
    pub fn into_symbol(self, mask: MaskPattern) -> QrSymbol {
        QrSymbol {
            version: self.version,
            size: self.version.size(),
            mask,
            modules: self.dark,
        }
    }
}
