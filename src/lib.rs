//! Sandfall Engine - falling-sand cellular automaton in WASM
//!
//! Architecture:
//! - core/       - Logging macro
//! - domain/     - Materials, cells, configuration
//! - spatial/    - Grid storage and neighbor access
//! - systems/    - Per-material rules, random source, vectors
//! - simulation/ - Engine orchestration and the wasm facade

// Utils with the logging macro (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("sandfall engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::cell::Cell;
pub use domain::config::{DriftConfig, EngineConfig};
pub use domain::materials::Material;
pub use simulation::{Quad, QuadBuffer, RenderSurface, SandEngine, StepStats, World};
pub use spatial::grid::Grid;
pub use systems::random::{RandomSource, SequenceRandom, Xorshift32};
pub use systems::vec2::Vec2;

// Export material ids for JS
#[wasm_bindgen]
pub fn mat_empty() -> u8 { Material::Empty.id() }
#[wasm_bindgen]
pub fn mat_sand() -> u8 { Material::Sand.id() }
#[wasm_bindgen]
pub fn mat_water() -> u8 { Material::Water.id() }
#[wasm_bindgen]
pub fn mat_wood() -> u8 { Material::Wood.id() }
#[wasm_bindgen]
pub fn mat_stone() -> u8 { Material::Stone.id() }
#[wasm_bindgen]
pub fn mat_oil() -> u8 { Material::Oil.id() }
#[wasm_bindgen]
pub fn mat_fire() -> u8 { Material::Fire.id() }
#[wasm_bindgen]
pub fn mat_burning_wood() -> u8 { Material::BurningWood.id() }
#[wasm_bindgen]
pub fn mat_smoke() -> u8 { Material::Smoke.id() }
