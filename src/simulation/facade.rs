use wasm_bindgen::prelude::*;

use crate::domain::config::EngineConfig;
use crate::domain::materials::Material;
use crate::systems::vec2::Vec2;

use super::perf_stats::StepStats;
use super::SandEngine;

fn material_from_id(id: u8) -> Result<Material, JsValue> {
    Material::from_id(id).ok_or_else(|| JsValue::from_str(&format!("unknown material id {}", id)))
}

#[wasm_bindgen]
pub struct World {
    core: SandEngine,
    /// Rasterized frame, refreshed by `render_pixels`
    pixels: Vec<u32>,
}

impl World {
    fn wrap(core: SandEngine) -> Self {
        let size = core.grid().size();
        Self {
            core,
            pixels: vec![super::BACKGROUND_COLOR; size],
        }
    }
}

#[wasm_bindgen]
impl World {
    /// Create a world with the given grid size and one world unit per cell
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<World, JsValue> {
        let core = SandEngine::new(EngineConfig::with_grid(width, height)).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::wrap(core))
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<World, JsValue> {
        let core = SandEngine::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::wrap(core))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn cell_scale(&self) -> u32 { self.core.cell_scale() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    // === SETTINGS ===

    pub fn set_drift_enabled(&mut self, enabled: bool) {
        self.core.set_drift_enabled(enabled);
    }

    pub fn set_drift_interval(&mut self, interval: f32) -> Result<(), JsValue> {
        self.core.set_drift_interval(interval).map_err(|e| JsValue::from_str(&e))
    }

    pub fn set_relabel_burning_wood(&mut self, relabel: bool) {
        self.core.set_relabel_burning_wood(relabel);
    }

    pub fn set_dispersity_rate(&mut self, rate: u8) -> Result<(), JsValue> {
        self.core.set_dispersity_rate(rate).map_err(|e| JsValue::from_str(&e))
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> StepStats {
        self.core.perf_stats()
    }

    // === COMMANDS ===

    /// Place a cell at a world position (off-grid positions are ignored)
    pub fn insert(&mut self, x: f32, y: f32, vx: f32, vy: f32, material: u8) -> Result<bool, JsValue> {
        let material = material_from_id(material)?;
        Ok(self.core.insert(Vec2::new(x, y), Vec2::new(vx, vy), material))
    }

    /// Disk brush in world units
    pub fn insert_in_radius(&mut self, x: f32, y: f32, radius: f32, material: u8) -> Result<u32, JsValue> {
        let material = material_from_id(material)?;
        Ok(self.core.insert_in_radius(Vec2::new(x, y), radius, Vec2::zero(), material))
    }

    pub fn remove(&mut self, x: u32, y: u32) -> bool {
        self.core.remove(x, y)
    }

    pub fn remove_in_radius(&mut self, x: f32, y: f32, radius: f32) -> u32 {
        self.core.remove_in_radius(Vec2::new(x, y), radius)
    }

    pub fn ignite(&mut self, x: u32, y: u32) -> bool {
        self.core.ignite(x, y)
    }

    pub fn tint(&mut self, x: u32, y: u32, color: u32) -> bool {
        self.core.tint(x, y, color)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.core.update(dt);
    }

    // === QUERIES ===

    /// Material id at grid coordinates (Empty off the grid)
    pub fn material_at(&self, x: i32, y: i32) -> u8 {
        self.core.material_at(x, y).id()
    }

    /// Material id under a world position (Empty off the grid)
    pub fn material_at_world(&self, x: f32, y: f32) -> u8 {
        self.core.material_at_world(Vec2::new(x, y)).id()
    }

    pub fn touches_material(&self, x: i32, y: i32, material: u8) -> Result<bool, JsValue> {
        let material = material_from_id(material)?;
        Ok(self.core.touches_material(x, y, material))
    }

    pub fn count(&self, material: u8) -> Result<u32, JsValue> {
        let material = material_from_id(material)?;
        Ok(self.core.count(material) as u32)
    }

    pub fn snapshot_json(&self) -> String {
        self.core.snapshot_json()
    }

    pub fn cell_json(&self, x: i32, y: i32) -> Option<String> {
        self.core.cell_json(x, y)
    }

    // === RENDER ===

    /// Rasterize the grid into the shared pixel buffer
    pub fn render_pixels(&mut self) -> Result<(), JsValue> {
        self.core
            .render_pixels(&mut self.pixels)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Get pointer to the pixel buffer (ABGR, row-major, one value per cell)
    pub fn pixels_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixels_len_bytes(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<u32>()
    }
}
