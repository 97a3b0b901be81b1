use crate::domain::config::EngineConfig;
use crate::spatial::grid::Grid;
use crate::systems::behaviors::{BehaviorRegistry, RuleCounters, UpdateContext};
use crate::systems::random::RandomSource;

/// Borrowed engine parts shared by every cell update in one sweep
pub(super) struct SweepState<'a> {
    pub(super) grid: &'a mut Grid,
    pub(super) behaviors: &'a BehaviorRegistry,
    pub(super) rng: &'a mut dyn RandomSource,
    pub(super) config: &'a EngineConfig,
    pub(super) counters: &'a mut RuleCounters,
    pub(super) dt: f32,
    pub(super) frame: u64,
    pub(super) drift_due: bool,
}

impl<'a> SweepState<'a> {
    /// Run the rule for whatever currently sits at (x, y)
    pub(super) fn update_cell(&mut self, x: u32, y: u32) {
        let material = self.grid.cell(x, y).material();
        let mut ctx = UpdateContext {
            grid: &mut *self.grid,
            rng: &mut *self.rng,
            config: self.config,
            counters: &mut *self.counters,
            x,
            y,
            dt: self.dt,
            drift_due: self.drift_due,
        };
        self.behaviors.update(material, &mut ctx);
    }
}
