use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "index: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx % self.width as usize) as u32;
        let y = (idx / self.width as usize) as u32;
        (x, y)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Index of a probe target, `None` when it falls off the grid
    #[inline]
    pub fn checked_index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(self.index(x as u32, y as u32))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major() {
        let grid = Grid::new(7, 3);
        assert_eq!(grid.size(), 21);
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(6, 0), 6);
        assert_eq!(grid.index(0, 1), 7);
        assert_eq!(grid.coords(grid.index(4, 2)), (4, 2));
    }

    #[test]
    fn probes_off_the_grid_have_no_index() {
        let grid = Grid::new(4, 4);
        assert_eq!(grid.checked_index(-1, 0), None);
        assert_eq!(grid.checked_index(0, 4), None);
        assert_eq!(grid.checked_index(3, 3), Some(15));
    }
}
