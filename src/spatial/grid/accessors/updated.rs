use super::super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Grid {
    // === Updated flag ===
    #[inline]
    pub fn is_updated(&self, x: u32, y: u32) -> bool {
        self.cells[self.index(x, y)].has_been_updated()
    }

    #[inline]
    pub fn set_updated(&mut self, x: u32, y: u32, u: bool) {
        let idx = self.index(x, y);
        self.cells[idx].set_updated(u);
    }

    /// Check-and-mark in one step: returns false when the cell was already
    /// processed this frame, otherwise marks it and returns true.
    #[inline]
    pub fn claim(&mut self, x: u32, y: u32) -> bool {
        let idx = self.index(x, y);
        let cell = &mut self.cells[idx];
        if cell.has_been_updated() {
            return false;
        }
        cell.set_updated(true);
        true
    }

    /// Reset the per-frame updated and moved flags for all cells
    #[inline]
    pub fn reset_updated(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.cells.par_iter_mut().for_each(|c| c.reset_frame_flags());
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.cells.iter_mut().for_each(|c| c.reset_frame_flags());
        }
    }
}
