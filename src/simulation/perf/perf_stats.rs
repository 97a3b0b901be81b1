use wasm_bindgen::prelude::*;

use crate::systems::behaviors::RuleCounters;

/// What happened during the last step
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepStats {
    pub(super) step_ms: f64,
    pub(super) sweep_ms: f64,
    pub(super) cells_processed: u32,
    pub(super) moved: u32,
    pub(super) ignitions: u32,
    pub(super) extinguished: u32,
    pub(super) expired: u32,
    pub(super) burned_out: u32,
    pub(super) smoke_emitted: u32,
    pub(super) smoke_skipped: u32,
    pub(super) drifted: u32,
    pub(super) drifted_off: u32,
    pub(super) drift_frame: bool,
    pub(super) rejected_inserts: u32,
    pub(super) particle_count: u32,
    pub(super) grid_size: u32,
}

impl StepStats {
    pub(crate) fn reset(&mut self) {
        *self = StepStats::default();
    }

    pub(crate) fn absorb(&mut self, counters: &RuleCounters) {
        self.moved = counters.moved;
        self.ignitions = counters.ignitions;
        self.extinguished = counters.extinguished;
        self.expired = counters.expired;
        self.burned_out = counters.burned_out;
        self.smoke_emitted = counters.smoke_emitted;
        self.smoke_skipped = counters.smoke_skipped;
        self.drifted = counters.drifted;
        self.drifted_off = counters.drifted_off;
    }
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn sweep_ms(&self) -> f64 { self.sweep_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_processed(&self) -> u32 { self.cells_processed }
    #[wasm_bindgen(getter)]
    pub fn moved(&self) -> u32 { self.moved }
    #[wasm_bindgen(getter)]
    pub fn ignitions(&self) -> u32 { self.ignitions }
    #[wasm_bindgen(getter)]
    pub fn extinguished(&self) -> u32 { self.extinguished }
    #[wasm_bindgen(getter)]
    pub fn expired(&self) -> u32 { self.expired }
    #[wasm_bindgen(getter)]
    pub fn burned_out(&self) -> u32 { self.burned_out }
    #[wasm_bindgen(getter)]
    pub fn smoke_emitted(&self) -> u32 { self.smoke_emitted }
    #[wasm_bindgen(getter)]
    pub fn smoke_skipped(&self) -> u32 { self.smoke_skipped }
    #[wasm_bindgen(getter)]
    pub fn drifted(&self) -> u32 { self.drifted }
    #[wasm_bindgen(getter)]
    pub fn drifted_off(&self) -> u32 { self.drifted_off }
    #[wasm_bindgen(getter)]
    pub fn drift_frame(&self) -> bool { self.drift_frame }
    #[wasm_bindgen(getter)]
    pub fn rejected_inserts(&self) -> u32 { self.rejected_inserts }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
}
