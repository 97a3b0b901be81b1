use crate::domain::materials::Material;
use crate::systems::behaviors::RuleCounters;

use super::update::SweepState;
use super::SandEngine;

/// Outcome of one pass over the grid
pub(super) struct SweepReport {
    pub(super) counters: RuleCounters,
    pub(super) cells_processed: u32,
}

/// Column order for a row: left to right on even frames, right to left on
/// odd frames. Alternating keeps diagonal and sideways motion unbiased.
pub fn scan_columns(frame: u64, width: u32) -> ScanColumns {
    ScanColumns {
        forward: frame & 1 == 0,
        next: 0,
        width,
    }
}

pub struct ScanColumns {
    forward: bool,
    next: u32,
    width: u32,
}

impl Iterator for ScanColumns {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.next >= self.width {
            return None;
        }
        let step = self.next;
        self.next += 1;
        Some(if self.forward { step } else { self.width - 1 - step })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.width - self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for ScanColumns {}

/// Visit every row from the floor up, dispatching each non-empty cell to
/// its material rule
pub(super) fn sweep_rows(engine: &mut SandEngine, dt: f32, drift_due: bool) -> SweepReport {
    let SandEngine {
        grid,
        behaviors,
        rng,
        config,
        frame,
        scan_trace,
        ..
    } = engine;

    let mut counters = RuleCounters::default();
    let mut cells_processed = 0u32;
    let (width, height) = (grid.width(), grid.height());

    let mut state = SweepState {
        grid,
        behaviors,
        rng: &mut **rng,
        config,
        counters: &mut counters,
        dt,
        frame: *frame,
        drift_due,
    };

    for y in (0..height).rev() {
        for x in scan_columns(state.frame, width) {
            if state.grid.cell(x, y).material() == Material::Empty {
                continue;
            }
            if let Some(trace) = scan_trace.as_mut() {
                trace.push((x, y));
            }
            cells_processed += 1;
            state.update_cell(x, y);
        }
    }

    SweepReport { counters, cells_processed }
}
