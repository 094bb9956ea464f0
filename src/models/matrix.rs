/// Square, bit-packed grid of QR modules indexed by `(row, col)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleGrid {
    size: usize,
    data: Vec<u8>,
}

impl ModuleGrid {
    /// Create an all-light grid with `size` modules per side
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size).div_ceil(8);
        Self {
            size,
            data: vec![0; bytes_needed],
        }
    }

    /// Modules per side
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the module at (row, col). Out-of-range reads are light.
    pub fn get(&self, row: usize, col: usize) -> bool {
        match self.bit_index(row, col) {
            Some((byte, bit)) => (self.data[byte] >> bit) & 1 == 1,
            None => false,
        }
    }

    /// Set the module at (row, col). Out-of-range writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, dark: bool) {
        if let Some((byte, bit)) = self.bit_index(row, col) {
            if dark {
                self.data[byte] |= 1 << bit;
            } else {
                self.data[byte] &= !(1 << bit);
            }
        }
    }

    /// Flip the module at (row, col)
    pub fn toggle(&mut self, row: usize, col: usize) {
        if let Some((byte, bit)) = self.bit_index(row, col) {
            self.data[byte] ^= 1 << bit;
        }
    }

    /// Number of dark modules in the grid
    pub fn dark_count(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Unpack into `size` rows of `size` booleans
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.size)
            .map(|row| (0..self.size).map(|col| self.get(row, col)).collect())
            .collect()
    }

    fn bit_index(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        if row >= self.size || col >= self.size {
            return None;
        }
        let index = row * self.size + col;
        Some((index / 8, index % 8))
    }
}

impl Default for ModuleGrid {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_toggle() {
        let mut grid = ModuleGrid::new(25);
        assert_eq!(grid.size(), 25);

        grid.set(3, 4, true);
        assert!(grid.get(3, 4));
        assert!(!grid.get(4, 3));

        grid.toggle(3, 4);
        assert!(!grid.get(3, 4));
        grid.toggle(24, 24);
        assert!(grid.get(24, 24));
        assert_eq!(grid.dark_count(), 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = ModuleGrid::new(21);
        grid.set(21, 0, true); // Should not panic
        grid.toggle(0, 30);
        assert!(!grid.get(21, 0));
        assert_eq!(grid.dark_count(), 0);
    }

    #[test]
    fn test_to_rows_is_row_major() {
        let mut grid = ModuleGrid::new(3);
        grid.set(0, 2, true);
        grid.set(2, 0, true);
        let rows = grid.to_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec![false, false, true]);
        assert_eq!(rows[2], vec![true, false, false]);
    }
}
