//! SandEngine - the falling-sand world
//!
//! Owns the grid, the rule registry and the random source, and drives the
//! per-frame sweep. The engine only orchestrates: every material rule lives
//! in `systems::behaviors`.

use crate::domain::cell::Cell;
use crate::domain::config::EngineConfig;
use crate::domain::materials::Material;
use crate::spatial::grid::Grid;
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::random::RandomSource;
use crate::systems::vec2::Vec2;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "step/sweep.rs"]
mod sweep;
#[path = "step/update.rs"]
mod update;
#[path = "commands/commands.rs"]
mod commands;
#[path = "commands/query.rs"]
mod query;
#[path = "render/palette.rs"]
mod palette;
#[path = "render/render.rs"]
mod render;
mod facade;

pub use facade::World;
pub use perf_stats::StepStats;
pub use query::{CellSnapshot, Snapshot};
pub use render::{Quad, QuadBuffer, RenderSurface, BACKGROUND_COLOR};
pub use sweep::{scan_columns, ScanColumns};

use perf_timer::PerfTimer;

/// The simulation world
pub struct SandEngine {
    config: EngineConfig,
    grid: Grid,
    behaviors: BehaviorRegistry,
    rng: Box<dyn RandomSource>,

    // State
    frame: u64,
    drift_timer: f32,
    rejected_inserts: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: StepStats,

    /// Positions dispatched during the last step, in visit order
    scan_trace: Option<Vec<(u32, u32)>>,
}

impl SandEngine {
    /// Create an engine from a validated config, seeding the default generator
    pub fn new(config: EngineConfig) -> Result<Self, String> {
        init::create_engine(config)
    }

    /// Create an engine driven by a caller-supplied random source
    pub fn with_random(config: EngineConfig, rng: Box<dyn RandomSource>) -> Result<Self, String> {
        init::create_engine_with_random(config, rng)
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        init::create_engine_from_json(json)
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn cell_scale(&self) -> u32 { self.config.cell_scale }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn drift_timer(&self) -> f32 { self.drift_timer }

    /// Insertions that landed off the grid since construction
    pub fn rejected_inserts(&self) -> u32 { self.rejected_inserts }

    pub fn grid(&self) -> &Grid { &self.grid }

    // === SETTINGS ===

    pub fn set_drift_enabled(&mut self, enabled: bool) {
        settings::set_drift_enabled(self, enabled);
    }

    pub fn set_drift_interval(&mut self, interval: f32) -> Result<(), String> {
        settings::set_drift_interval(self, interval)
    }

    pub fn set_relabel_burning_wood(&mut self, relabel: bool) {
        settings::set_relabel_burning_wood(self, relabel);
    }

    pub fn set_dispersity_rate(&mut self, rate: u8) -> Result<(), String> {
        settings::set_dispersity_rate(self, rate)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> StepStats {
        settings::perf_stats(self)
    }

    /// Record the order in which cells are visited (tests and debugging)
    pub fn enable_scan_trace(&mut self, enabled: bool) {
        settings::enable_scan_trace(self, enabled);
    }

    pub fn scan_trace(&self) -> Option<&[(u32, u32)]> {
        self.scan_trace.as_deref()
    }

    // === COMMANDS ===

    /// Place a fresh cell at a world position. Off-grid positions are
    /// dropped with a diagnostic; returns whether a cell was written.
    pub fn insert(&mut self, position: Vec2, velocity: Vec2, material: Material) -> bool {
        commands::insert(self, position, velocity, material)
    }

    /// Place a fresh cell at grid coordinates
    pub fn insert_cell(&mut self, x: u32, y: u32, material: Material) -> bool {
        commands::insert_cell(self, x, y, material)
    }

    /// Disk brush in world units. Returns the number of cells written.
    pub fn insert_in_radius(&mut self, center: Vec2, radius: f32, velocity: Vec2, material: Material) -> u32 {
        commands::insert_in_radius(self, center, radius, velocity, material)
    }

    pub fn remove(&mut self, x: u32, y: u32) -> bool {
        commands::remove(self, x, y)
    }

    pub fn remove_in_radius(&mut self, center: Vec2, radius: f32) -> u32 {
        commands::remove_in_radius(self, center, radius)
    }

    /// Set flammable matter alight
    pub fn ignite(&mut self, x: u32, y: u32) -> bool {
        commands::ignite(self, x, y)
    }

    /// Give occupied matter a custom ABGR color
    pub fn tint(&mut self, x: u32, y: u32, color: u32) -> bool {
        commands::tint(self, x, y, color)
    }

    /// Empty the grid and rewind the frame counter and drift timer
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// `clear` plus reseeding the default generator from the config seed
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    // === STEP ===

    /// Advance the simulation by one frame of `dt` seconds
    pub fn update(&mut self, dt: f32) {
        step::step(self, dt);
    }

    // === QUERIES ===

    /// Cell at grid coordinates. Panics when out of bounds.
    pub fn query(&self, x: u32, y: u32) -> &Cell {
        query::query(self, x, y)
    }

    pub fn try_query(&self, x: i32, y: i32) -> Option<&Cell> {
        query::try_query(self, x, y)
    }

    /// Material at grid coordinates, Empty off the grid
    pub fn material_at(&self, x: i32, y: i32) -> Material {
        query::material_at(self, x, y)
    }

    /// Material under a world position, Empty off the grid
    pub fn material_at_world(&self, position: Vec2) -> Material {
        query::material_at_world(self, position)
    }

    /// The cell or one of its orthogonal neighbors holds `material`
    pub fn touches_material(&self, x: i32, y: i32, material: Material) -> bool {
        query::touches_material(self, x, y, material)
    }

    pub fn count(&self, material: Material) -> usize {
        query::count(self, material)
    }

    pub fn particle_count(&self) -> usize {
        query::particle_count(self)
    }

    pub fn snapshot(&self) -> Snapshot {
        query::snapshot(self)
    }

    pub fn snapshot_json(&self) -> String {
        query::snapshot_json(self)
    }

    pub fn cell_json(&self, x: i32, y: i32) -> Option<String> {
        query::cell_json(self, x, y)
    }

    // === RENDER ===

    /// Emit one quad per non-empty cell, bottom row first
    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        render::render(self, surface)
    }

    /// Rasterize the grid into `pixels` (one ABGR value per cell, row-major)
    pub fn render_pixels(&self, pixels: &mut [u32]) -> Result<(), String> {
        render::render_pixels(self, pixels)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
