//! Grid - contiguous row-major storage of cells
//!
//! Cells are stored as one `Vec<Cell>` and moved by index swaps, so no slot
//! ever aliases another. Coordinates are `u32` once validated and `i32` for
//! neighbor probes that may step off the grid.

use crate::domain::cell::Cell;
use crate::domain::materials::Material;

mod indexing;
mod accessors;
mod moves;

pub struct Grid {
    width: u32,
    height: u32,
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Empty grid. Callers validate dimensions first (see `EngineConfig::validate`).
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "grid dimensions must be positive");
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            cells: vec![Cell::empty(); size],
        }
    }

    /// Read-only view of every cell in row-major order
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells holding the given material
    pub fn count(&self, material: Material) -> usize {
        self.cells.iter().filter(|c| c.material() == material).count()
    }

    /// Number of cells holding any matter
    pub fn non_empty_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Reset every slot to empty
    pub fn clear(&mut self) {
        self.cells.fill(Cell::empty());
    }
}
