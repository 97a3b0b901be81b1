//! Cell - the value stored in every grid slot
//!
//! Cells are plain `Copy` values. Matter moves by swapping whole cells
//! between slots, so every per-material timer or flag lives here.

use serde::Serialize;

use crate::domain::materials::{Material, DEFAULT_DISPERSITY_RATE, INSERT_LIFETIME};
use crate::systems::vec2::Vec2;

/// Neutral tint (opaque white, ABGR)
pub const NEUTRAL_COLOR: u32 = 0xFFFF_FFFF;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Cell {
    material: Material,
    lifetime: f32,
    velocity: Vec2,
    color: u32,
    #[serde(skip)]
    updated: bool,
    /// Swapped at least once this frame, by its own rule or as a displaced unit
    #[serde(skip)]
    moved: bool,
    on_fire: bool,
    /// Direction of the last sideways move (-1 left, 1 right, 0 none)
    side_moving: i8,
    dispersity_rate: u8,
    flammable: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::empty()
    }
}

impl Cell {
    pub fn new(material: Material, lifetime: f32, velocity: Vec2, color: u32) -> Self {
        Self {
            material,
            lifetime: material.default_lifetime().unwrap_or(lifetime),
            velocity,
            color,
            updated: false,
            moved: false,
            on_fire: material == Material::BurningWood,
            side_moving: 0,
            dispersity_rate: DEFAULT_DISPERSITY_RATE,
            flammable: material.is_flammable(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Material::Empty, INSERT_LIFETIME, Vec2::zero(), NEUTRAL_COLOR)
    }

    /// Advance the lifetime countdown. True once it has run out.
    #[inline]
    pub fn burn(&mut self, dt: f32) -> bool {
        self.lifetime -= dt;
        self.lifetime <= 0.0
    }

    // === Material ===
    #[inline]
    pub fn material(&self) -> Material { self.material }

    #[inline]
    pub fn is_empty(&self) -> bool { self.material == Material::Empty }

    /// Relabel the cell in place. Timers and flags are left untouched;
    /// `flammable` follows the new material.
    #[inline]
    pub fn set_material(&mut self, material: Material) {
        self.material = material;
        self.flammable = material.is_flammable();
    }

    /// Turn the slot back into empty space, dropping all matter state.
    /// The updated flag is kept so a cleared slot stays settled this frame.
    pub fn clear(&mut self) {
        let updated = self.updated;
        *self = Cell::empty();
        self.updated = updated;
    }

    // === Lifetime ===
    #[inline]
    pub fn lifetime(&self) -> f32 { self.lifetime }

    #[inline]
    pub fn set_lifetime(&mut self, lifetime: f32) { self.lifetime = lifetime; }

    // === Velocity ===
    #[inline]
    pub fn velocity(&self) -> Vec2 { self.velocity }

    #[inline]
    pub fn set_velocity(&mut self, velocity: Vec2) { self.velocity = velocity; }

    // === Color ===
    #[inline]
    pub fn color(&self) -> u32 { self.color }

    #[inline]
    pub fn set_color(&mut self, color: u32) { self.color = color; }

    // === Flags ===
    #[inline]
    pub fn has_been_updated(&self) -> bool { self.updated }

    #[inline]
    pub fn set_updated(&mut self, updated: bool) { self.updated = updated; }

    #[inline]
    pub fn has_moved(&self) -> bool { self.moved }

    #[inline]
    pub fn set_moved(&mut self, moved: bool) { self.moved = moved; }

    /// Forget everything recorded about the previous frame
    #[inline]
    pub fn reset_frame_flags(&mut self) {
        self.updated = false;
        self.moved = false;
    }

    #[inline]
    pub fn is_on_fire(&self) -> bool { self.on_fire }

    #[inline]
    pub fn set_on_fire(&mut self, on_fire: bool) { self.on_fire = on_fire; }

    #[inline]
    pub fn side_moving(&self) -> i8 { self.side_moving }

    #[inline]
    pub fn set_side_moving(&mut self, dir: i8) { self.side_moving = dir; }

    #[inline]
    pub fn dispersity_rate(&self) -> u8 { self.dispersity_rate }

    #[inline]
    pub fn set_dispersity_rate(&mut self, rate: u8) { self.dispersity_rate = rate; }

    #[inline]
    pub fn is_flammable(&self) -> bool { self.flammable }

    /// Set flammable matter alight, optionally relabeling wood as
    /// `BurningWood`. True when the cell was unlit before.
    pub fn ignite(&mut self, relabel_wood: bool) -> bool {
        if !self.flammable {
            return false;
        }
        let was_lit = self.on_fire;
        self.on_fire = true;
        if relabel_wood && self.material == Material::Wood {
            self.set_material(Material::BurningWood);
        }
        !was_lit
    }
}
