use crate::domain::cell::{Cell, NEUTRAL_COLOR};
use crate::domain::materials::Material;
use crate::systems::random::Xorshift32;
use crate::systems::vec2::Vec2;

use super::SandEngine;

fn fresh_cell(engine: &SandEngine, velocity: Vec2, material: Material) -> Cell {
    let mut cell = Cell::new(material, engine.config.insert_lifetime, velocity, NEUTRAL_COLOR);
    cell.set_dispersity_rate(engine.config.dispersity_rate);
    cell
}

fn grid_coords(engine: &SandEngine, gx: i64, gy: i64) -> Option<(u32, u32)> {
    if gx < 0 || gy < 0 || gx >= engine.grid.width() as i64 || gy >= engine.grid.height() as i64 {
        return None;
    }
    Some((gx as u32, gy as u32))
}

fn reject(engine: &mut SandEngine, material: Material, gx: i64, gy: i64) {
    engine.rejected_inserts = engine.rejected_inserts.saturating_add(1);
    engine_log!(
        "insert: {} at cell ({}, {}) is outside the {}x{} grid",
        material.name(),
        gx,
        gy,
        engine.grid.width(),
        engine.grid.height()
    );
}

/// Overwrites whatever occupies the target slot
pub(super) fn insert(engine: &mut SandEngine, position: Vec2, velocity: Vec2, material: Material) -> bool {
    if !position.is_finite() {
        engine.rejected_inserts = engine.rejected_inserts.saturating_add(1);
        engine_log!("insert: {} at non-finite position ({}, {})", material.name(), position.x, position.y);
        return false;
    }
    let (gx, gy) = position.to_grid(engine.config.cell_scale);
    let Some((x, y)) = grid_coords(engine, gx, gy) else {
        reject(engine, material, gx, gy);
        return false;
    };
    let cell = fresh_cell(engine, velocity, material);
    engine.grid.set_cell(x, y, cell);
    true
}

pub(super) fn insert_cell(engine: &mut SandEngine, x: u32, y: u32, material: Material) -> bool {
    if x >= engine.grid.width() || y >= engine.grid.height() {
        reject(engine, material, x as i64, y as i64);
        return false;
    }
    let cell = fresh_cell(engine, Vec2::zero(), material);
    engine.grid.set_cell(x, y, cell);
    true
}

/// Grid cells covered by a disk given in world units. Slots past the grid
/// edge are clipped; a non-finite center or radius covers nothing.
fn disk_cells(engine: &SandEngine, center: Vec2, radius: f32) -> Vec<(u32, u32)> {
    if !center.is_finite() || !radius.is_finite() {
        engine_log!("brush: ignoring disk at ({}, {}) with radius {}", center.x, center.y, radius);
        return Vec::new();
    }
    let scale = engine.config.cell_scale.max(1);
    let (cx, cy) = center.to_grid(scale);
    let (cx, cy) = (cx as i128, cy as i128);
    let r = (radius.max(0.0) / scale as f32) as i64 as i128;
    let r2 = r.saturating_mul(r);

    // Only walk the part of the bounding box that lies on the grid
    let (w, h) = (engine.grid.width() as i128, engine.grid.height() as i128);
    let (x0, x1) = ((cx - r).max(0), (cx + r).min(w - 1));
    let (y0, y1) = ((cy - r).max(0), (cy + r).min(h - 1));

    let mut cells = Vec::new();
    for y in y0..=y1 {
        for x in x0..=x1 {
            let (dx, dy) = (x - cx, y - cy);
            if dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy)) <= r2 {
                cells.push((x as u32, y as u32));
            }
        }
    }
    cells
}

pub(super) fn insert_in_radius(
    engine: &mut SandEngine,
    center: Vec2,
    radius: f32,
    velocity: Vec2,
    material: Material,
) -> u32 {
    let targets = disk_cells(engine, center, radius);
    let cell = fresh_cell(engine, velocity, material);
    for &(x, y) in &targets {
        engine.grid.set_cell(x, y, cell);
    }
    targets.len() as u32
}

pub(super) fn remove(engine: &mut SandEngine, x: u32, y: u32) -> bool {
    if x >= engine.grid.width() || y >= engine.grid.height() {
        return false;
    }
    if engine.grid.cell(x, y).is_empty() {
        return false;
    }
    engine.grid.clear_cell(x, y);
    true
}

pub(super) fn remove_in_radius(engine: &mut SandEngine, center: Vec2, radius: f32) -> u32 {
    let mut removed = 0;
    for (x, y) in disk_cells(engine, center, radius) {
        if remove(engine, x, y) {
            removed += 1;
        }
    }
    removed
}

pub(super) fn ignite(engine: &mut SandEngine, x: u32, y: u32) -> bool {
    let relabel = engine.config.relabel_burning_wood;
    match engine.grid.get_mut(x as i32, y as i32) {
        Some(cell) => cell.ignite(relabel),
        None => false,
    }
}

/// Recolor occupied matter; the tint replaces the palette color when drawn
pub(super) fn tint(engine: &mut SandEngine, x: u32, y: u32, color: u32) -> bool {
    match engine.grid.get_mut(x as i32, y as i32) {
        Some(cell) if !cell.is_empty() => {
            cell.set_color(color);
            true
        }
        _ => false,
    }
}

pub(super) fn clear(engine: &mut SandEngine) {
    engine.grid.clear();
    engine.frame = 0;
    engine.drift_timer = 0.0;
    if let Some(trace) = engine.scan_trace.as_mut() {
        trace.clear();
    }
}

/// Replaces any injected random source with the seeded default
pub(super) fn reset(engine: &mut SandEngine) {
    clear(engine);
    engine.rng = Box::new(Xorshift32::new(engine.config.seed));
    engine.rejected_inserts = 0;
    engine.perf_stats.reset();
}
