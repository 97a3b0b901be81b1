use crate::domain::cell::{Cell, NEUTRAL_COLOR};
use crate::domain::materials::Material;

/// Pack an opaque color into the ABGR layout canvas `ImageData` expects
#[inline]
pub const fn abgr(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

pub const SAND: u32 = abgr(194, 178, 128);
pub const WATER: u32 = abgr(0, 105, 148);
pub const WOOD: u32 = abgr(70, 50, 30);
pub const STONE: u32 = abgr(128, 128, 128);
pub const OIL: u32 = abgr(60, 45, 20);
pub const FIRE_YELLOW: u32 = abgr(255, 255, 0);
pub const FIRE_RED: u32 = abgr(255, 0, 0);
pub const SMOKE: u32 = abgr(0, 0, 0);

/// Per-cell, per-frame coin for the fire flicker. Pure, so rendering
/// never touches the simulation's random source.
#[inline]
pub fn flicker(x: u32, y: u32, frame: u64) -> bool {
    let h = x.wrapping_mul(73856093) ^ y.wrapping_mul(19349663) ^ (frame as u32).wrapping_mul(83492791);
    (h >> 7) & 1 == 0
}

#[inline]
fn fire_color(x: u32, y: u32, frame: u64) -> u32 {
    if flicker(x, y, frame) { FIRE_YELLOW } else { FIRE_RED }
}

/// Display color of a cell. A non-neutral cell tint overrides the palette.
pub fn cell_color(cell: &Cell, x: u32, y: u32, frame: u64) -> Option<u32> {
    let material = cell.material();
    if material != Material::Empty && cell.color() != NEUTRAL_COLOR {
        return Some(cell.color());
    }
    let color = match material {
        Material::Empty => return None,
        Material::Sand => SAND,
        Material::Water => WATER,
        Material::Stone => STONE,
        Material::Smoke => SMOKE,
        Material::Wood | Material::Oil if cell.is_on_fire() => fire_color(x, y, frame),
        Material::Wood => WOOD,
        Material::Oil => OIL,
        Material::Fire | Material::BurningWood => fire_color(x, y, frame),
    };
    Some(color)
}
