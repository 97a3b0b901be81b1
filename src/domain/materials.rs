//! Material registry - the closed set of substances a cell can hold
//!
//! Ids are stable `u8` values so hosts (and the wasm facade) can pass
//! materials around as plain numbers.

use serde::{Deserialize, Serialize};

pub type MaterialId = u8;

/// Burn time of lit wood before it collapses into fire (seconds)
pub const WOOD_LIFETIME: f32 = 0.3;
/// Lifetime of a fire cell (seconds)
pub const FIRE_LIFETIME: f32 = 0.1;
/// Lifetime of smoke emitted by burning wood (seconds)
pub const SMOKE_LIFETIME: f32 = 15.0;
/// Lifetime given to freshly inserted matter that has no canonical default
pub const INSERT_LIFETIME: f32 = 5.0;

pub const DEFAULT_DISPERSITY_RATE: u8 = 4;

pub const MATERIAL_COUNT: usize = 9;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    #[default]
    Empty = 0,
    Sand = 1,
    Water = 2,
    Wood = 3,
    Stone = 4,
    Oil = 5,
    Fire = 6,
    BurningWood = 7,
    Smoke = 8,
}

impl Material {
    pub const ALL: [Material; MATERIAL_COUNT] = [
        Material::Empty,
        Material::Sand,
        Material::Water,
        Material::Wood,
        Material::Stone,
        Material::Oil,
        Material::Fire,
        Material::BurningWood,
        Material::Smoke,
    ];

    #[inline]
    pub fn id(self) -> MaterialId {
        self as MaterialId
    }

    #[inline]
    pub fn from_id(id: MaterialId) -> Option<Material> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Material::Empty => "empty",
            Material::Sand => "sand",
            Material::Water => "water",
            Material::Wood => "wood",
            Material::Stone => "stone",
            Material::Oil => "oil",
            Material::Fire => "fire",
            Material::BurningWood => "burning_wood",
            Material::Smoke => "smoke",
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Material::Empty
    }

    /// Canonical lifetime forced at construction. Only wood, lit or not, and
    /// fire carry one.
    #[inline]
    pub fn default_lifetime(self) -> Option<f32> {
        match self {
            Material::Wood | Material::BurningWood => Some(WOOD_LIFETIME),
            Material::Fire => Some(FIRE_LIFETIME),
            _ => None,
        }
    }

    #[inline]
    pub fn is_flammable(self) -> bool {
        matches!(self, Material::Wood | Material::Oil)
    }
}

impl TryFrom<MaterialId> for Material {
    type Error = String;

    fn try_from(id: MaterialId) -> Result<Self, Self::Error> {
        Material::from_id(id).ok_or_else(|| format!("unknown material id {}", id))
    }
}
