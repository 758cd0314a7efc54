/// Compact bit matrix, one bit per module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new bit matrix with all bits cleared
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get bit at (x, y); out-of-range reads are false
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set bit at (x, y); out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        if value {
            self.data[index / 8] |= 1 << (index % 8);
        } else {
            self.data[index / 8] &= !(1 << (index % 8));
        }
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Iterate (x, y) of every set bit in row-major order
    pub fn iter_ones(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.get(x, y))
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// State of a single module while the symbol is being built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    /// Not yet assigned
    #[default]
    Unset,
    /// Light (0)
    Light,
    /// Dark (1)
    Dark,
}

impl Module {
    fn from_bit(dark: bool) -> Self {
        if dark { Module::Dark } else { Module::Light }
    }
}

/// Square module grid under construction.
///
/// Each cell is unset, light or dark. A parallel reserved flag marks function
/// modules; once a module is reserved, [`ModuleMatrix::place`] refuses to touch it.
#[derive(Debug, Clone)]
pub struct ModuleMatrix {
    size: usize,
    modules: Vec<Module>,
    reserved: BitMatrix,
}

impl ModuleMatrix {
    /// Allocate a `size × size` grid with every module unset and unreserved
    pub fn new(size: usize) -> Self {
        Self {
            size,
            modules: vec![Module::Unset; size * size],
            reserved: BitMatrix::new(size, size),
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Module at (x, y); out-of-range reads are unset
    pub fn get(&self, x: usize, y: usize) -> Module {
        if x >= self.size || y >= self.size {
            return Module::Unset;
        }
        self.modules[y * self.size + x]
    }

    /// Whether (x, y) belongs to a function pattern
    pub fn is_reserved(&self, x: usize, y: usize) -> bool {
        self.reserved.get(x, y)
    }

    /// Write a function module and mark it reserved
    pub fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        if x >= self.size || y >= self.size {
            return;
        }
        self.modules[y * self.size + x] = Module::from_bit(dark);
        self.reserved.set(x, y, true);
    }

    /// Write a data module. Returns false, leaving the cell alone, when (x, y)
    /// is reserved or out of range.
    pub fn place(&mut self, x: usize, y: usize, dark: bool) -> bool {
        if x >= self.size || y >= self.size || self.reserved.get(x, y) {
            return false;
        }
        self.modules[y * self.size + x] = Module::from_bit(dark);
        true
    }

    /// Number of modules still unset
    pub fn unset_count(&self) -> usize {
        self.modules.iter().filter(|m| **m == Module::Unset).count()
    }

    /// Reserved flags for every module
    pub fn reserved(&self) -> &BitMatrix {
        &self.reserved
    }

    /// Collapse into a dark-module bit matrix. Returns the number of unset
    /// modules as the error when the grid is incomplete.
    pub fn into_bits(self) -> Result<(BitMatrix, BitMatrix), usize> {
        let unset = self.unset_count();
        if unset > 0 {
            return Err(unset);
        }
        let mut bits = BitMatrix::new(self.size, self.size);
        for (i, module) in self.modules.iter().enumerate() {
            if *module == Module::Dark {
                bits.set(i % self.size, i / self.size, true);
            }
        }
        Ok((bits, self.reserved))
    }
}
