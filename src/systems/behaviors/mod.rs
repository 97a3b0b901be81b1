//! Behaviors - per-material update rules
//!
//! Each rule runs on one cell at a time through an `UpdateContext` and
//! mutates the grid only by swapping, relabeling or clearing cells.
//! Every rule claims its cell (checks and sets the updated flag) before it
//! touches anything, which is what keeps a unit of matter from moving twice
//! in one frame.

mod common;
mod powder;
mod liquid;
mod combustion;
mod energy;
mod gas;
mod drift;

pub use common::{ORTHOGONAL, fall_distance};
pub use powder::PowderBehavior;
pub use liquid::LiquidBehavior;
pub use combustion::CombustionBehavior;
pub use energy::EnergyBehavior;
pub use gas::GasBehavior;
pub use drift::try_drift;

use crate::domain::cell::Cell;
use crate::domain::config::EngineConfig;
use crate::domain::materials::Material;
use crate::spatial::grid::Grid;
use crate::systems::random::RandomSource;

/// What the rules did during one sweep
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuleCounters {
    pub moved: u32,
    pub ignitions: u32,
    pub extinguished: u32,
    pub expired: u32,
    pub burned_out: u32,
    pub smoke_emitted: u32,
    pub smoke_skipped: u32,
    pub drifted: u32,
    pub drifted_off: u32,
}

/// Update context passed to behaviors
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub rng: &'a mut dyn RandomSource,
    pub config: &'a EngineConfig,
    pub counters: &'a mut RuleCounters,
    pub x: u32,
    pub y: u32,
    pub dt: f32,
    /// This frame is a drift frame (see `DriftConfig`)
    pub drift_due: bool,
}

impl<'a> UpdateContext<'a> {
    /// Check-and-mark the current cell. False means it already acted this frame.
    #[inline]
    pub fn claim(&mut self) -> bool {
        self.grid.claim(self.x, self.y)
    }

    #[inline]
    pub fn is_claimed(&self) -> bool {
        self.grid.is_updated(self.x, self.y)
    }

    #[inline]
    pub fn here(&self) -> &Cell {
        self.grid.cell(self.x, self.y)
    }

    #[inline]
    pub fn here_mut(&mut self) -> &mut Cell {
        self.grid.cell_mut(self.x, self.y)
    }

    #[inline]
    fn offset(&self, dx: i32, dy: i32) -> (i32, i32) {
        (self.x as i32 + dx, self.y as i32 + dy)
    }

    /// Material at an offset from the current cell, `None` off the grid
    #[inline]
    pub fn probe(&self, dx: i32, dy: i32) -> Option<Material> {
        let (tx, ty) = self.offset(dx, dy);
        self.grid.material(tx, ty)
    }

    /// True when the neighbor was already swapped this frame. Off the grid
    /// counts as moved.
    #[inline]
    pub fn neighbor_moved(&self, dx: i32, dy: i32) -> bool {
        let (tx, ty) = self.offset(dx, dy);
        self.grid.get(tx, ty).map_or(true, |c| c.has_moved())
    }

    #[inline]
    pub fn neighbor_mut(&mut self, dx: i32, dy: i32) -> Option<&mut Cell> {
        let (tx, ty) = self.offset(dx, dy);
        self.grid.get_mut(tx, ty)
    }

    /// Swap the current cell with the one at the offset. The current cell
    /// position is stale afterwards; rules return right after moving.
    #[inline]
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        let (tx, ty) = self.offset(dx, dy);
        debug_assert!(self.grid.in_bounds(tx, ty), "move_by off the grid");
        self.grid.swap(self.x, self.y, tx as u32, ty as u32);
        self.grid.cell_mut(tx as u32, ty as u32).set_moved(true);
        self.grid.cell_mut(self.x, self.y).set_moved(true);
        self.counters.moved += 1;
    }

    /// Put out whatever burns at the offset
    #[inline]
    pub fn extinguish(&mut self, dx: i32, dy: i32) {
        if let Some(cell) = self.neighbor_mut(dx, dy) {
            cell.clear();
            self.counters.extinguished += 1;
        }
    }

    /// Set a flammable neighbor alight. Returns true when it was unlit before.
    pub fn ignite(&mut self, dx: i32, dy: i32) -> bool {
        let relabel = self.config.relabel_burning_wood;
        let lit = match self.neighbor_mut(dx, dy) {
            Some(cell) => cell.ignite(relabel),
            None => false,
        };
        if lit {
            self.counters.ignitions += 1;
        }
        lit
    }
}

/// Behavior trait - each material family implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}

/// Behavior registry - dispatch by material
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    liquid: LiquidBehavior,
    combustion: CombustionBehavior,
    energy: EnergyBehavior,
    gas: GasBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
            liquid: LiquidBehavior::new(),
            combustion: CombustionBehavior::new(),
            energy: EnergyBehavior::new(),
            gas: GasBehavior::new(),
        }
    }

    /// Dispatch update to the rule for `material`
    pub fn update(&self, material: Material, ctx: &mut UpdateContext) {
        match material {
            Material::Sand => self.powder.update(ctx),
            Material::Water => self.liquid.update(ctx),
            Material::Wood | Material::BurningWood | Material::Oil => self.combustion.update(ctx),
            Material::Fire => self.energy.update(ctx),
            Material::Smoke => self.gas.update(ctx),
            Material::Empty | Material::Stone => {} // Inert
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
