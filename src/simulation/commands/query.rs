use serde::Serialize;

use crate::domain::cell::Cell;
use crate::domain::materials::Material;
use crate::systems::behaviors::ORTHOGONAL;
use crate::systems::vec2::Vec2;

use super::SandEngine;

/// One occupied slot in a snapshot
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CellSnapshot {
    pub x: u32,
    pub y: u32,
    #[serde(flatten)]
    pub cell: Cell,
}

/// Debug view of the occupied part of the grid
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    pub frame: u64,
    pub cells: Vec<CellSnapshot>,
}

pub(super) fn query(engine: &SandEngine, x: u32, y: u32) -> &Cell {
    engine.grid.cell(x, y)
}

pub(super) fn try_query(engine: &SandEngine, x: i32, y: i32) -> Option<&Cell> {
    engine.grid.get(x, y)
}

pub(super) fn material_at(engine: &SandEngine, x: i32, y: i32) -> Material {
    engine.grid.material(x, y).unwrap_or(Material::Empty)
}

pub(super) fn material_at_world(engine: &SandEngine, position: Vec2) -> Material {
    let (gx, gy) = position.to_grid(engine.config.cell_scale);
    match (i32::try_from(gx), i32::try_from(gy)) {
        (Ok(x), Ok(y)) => material_at(engine, x, y),
        _ => Material::Empty,
    }
}

pub(super) fn touches_material(engine: &SandEngine, x: i32, y: i32, material: Material) -> bool {
    if engine.grid.material_is(x, y, material) {
        return true;
    }
    ORTHOGONAL
        .iter()
        .any(|&(dx, dy)| engine.grid.material_is(x + dx, y + dy, material))
}

pub(super) fn count(engine: &SandEngine, material: Material) -> usize {
    engine.grid.count(material)
}

pub(super) fn particle_count(engine: &SandEngine) -> usize {
    engine.grid.non_empty_count()
}

pub(super) fn snapshot(engine: &SandEngine) -> Snapshot {
    let grid = &engine.grid;
    let cells = grid
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| !cell.is_empty())
        .map(|(idx, cell)| {
            let (x, y) = grid.coords(idx);
            CellSnapshot { x, y, cell: *cell }
        })
        .collect();
    Snapshot {
        width: grid.width(),
        height: grid.height(),
        frame: engine.frame,
        cells,
    }
}

pub(super) fn snapshot_json(engine: &SandEngine) -> String {
    serde_json::to_string(&snapshot(engine)).unwrap_or_else(|e| {
        engine_log!("snapshot: serialization failed: {}", e);
        "{}".to_string()
    })
}

pub(super) fn cell_json(engine: &SandEngine, x: i32, y: i32) -> Option<String> {
    let cell = engine.grid.get(x, y)?;
    serde_json::to_string(cell).ok()
}
