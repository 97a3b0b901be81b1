use super::super::*;

impl Grid {
    // === Whole-cell access ===

    /// Cell at validated coordinates. Panics when out of bounds.
    #[inline]
    pub fn cell(&self, x: u32, y: u32) -> &Cell {
        assert!(
            x < self.width && y < self.height,
            "cell: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        &self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn cell_mut(&mut self, x: u32, y: u32) -> &mut Cell {
        assert!(
            x < self.width && y < self.height,
            "cell_mut: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        let idx = self.index(x, y);
        &mut self.cells[idx]
    }

    /// Guarded read for probes that may leave the grid
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.checked_index(x, y).map(|idx| &self.cells[idx])
    }

    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        let idx = self.checked_index(x, y)?;
        Some(&mut self.cells[idx])
    }

    // === Set / clear ===
    // New cells are NOT updated, so they may still act this frame
    pub fn set_cell(&mut self, x: u32, y: u32, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    pub fn clear_cell(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        self.cells[idx].clear();
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::*;
    use crate::domain::cell::NEUTRAL_COLOR;
    use crate::systems::vec2::Vec2;

    #[test]
    fn guarded_get_returns_none_off_grid() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.get(-1, 1).is_none());
        assert!(grid.get(1, 3).is_none());
        assert!(grid.get_mut(3, 0).is_none());
        assert!(grid.get(2, 2).is_some());
    }

    #[test]
    fn set_and_clear_cell() {
        let mut grid = Grid::new(3, 3);
        grid.set_cell(1, 2, Cell::new(Material::Stone, 1.0, Vec2::zero(), NEUTRAL_COLOR));
        assert_eq!(grid.cell(1, 2).material(), Material::Stone);
        assert_eq!(grid.non_empty_count(), 1);
        grid.clear_cell(1, 2);
        assert!(grid.cell(1, 2).is_empty());
        assert_eq!(grid.non_empty_count(), 0);
    }

    #[test]
    #[should_panic]
    fn cell_panics_out_of_bounds() {
        let grid = Grid::new(3, 3);
        let _ = grid.cell(3, 0);
    }
}
