/// Packed light/dark view of a finished grid (true = dark)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create an all-light matrix with given dimensions
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

    fn locate(&self, x: usize, y: usize) -> (usize, u8) {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) outside {}x{} matrix",
            self.width,
            self.height
        );
        let index = y * self.width + x;
        (index / 8, 1 << (index % 8))
    }

    /// Whether (x, y) is dark
    pub fn get(&self, x: usize, y: usize) -> bool {
        let (byte, bit) = self.locate(x, y);
        self.data[byte] & bit != 0
    }

    /// Set (x, y) dark or light
    pub fn set(&mut self, x: usize, y: usize, dark: bool) {
        let (byte, bit) = self.locate(x, y);
        if dark {
            self.data[byte] |= bit;
        } else {
            self.data[byte] &= !bit;
        }
    }

    /// Invert (x, y)
    pub fn toggle(&mut self, x: usize, y: usize) {
        let (byte, bit) = self.locate(x, y);
        self.data[byte] ^= bit;
    }

    /// Number of dark modules
    pub fn count_dark(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Raw packed rows, bit `i % 8` of byte `i / 8` for index `i = y * width + x`
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
