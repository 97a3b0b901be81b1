//! CombustionBehavior - wood, burning wood and oil
//!
//! Unlit fuel does nothing. Lit fuel counts down its burn timer, may puff
//! smoke into the slot above, spreads to wooden neighbors at random and
//! finally collapses into fire.

use super::{Behavior, UpdateContext, ORTHOGONAL};
use crate::domain::cell::{Cell, NEUTRAL_COLOR};
use crate::domain::materials::{Material, FIRE_LIFETIME, SMOKE_LIFETIME};
use crate::systems::vec2::Vec2;

pub struct CombustionBehavior;

impl CombustionBehavior {
    pub fn new() -> Self {
        Self
    }

    fn emit_smoke(&self, ctx: &mut UpdateContext) {
        if ctx.probe(0, -1) != Some(Material::Empty) {
            return;
        }
        if !ctx.rng.one_in(ctx.config.wood_smoke_odds) {
            return;
        }
        if let Some(above) = ctx.neighbor_mut(0, -1) {
            *above = Cell::new(Material::Smoke, SMOKE_LIFETIME, Vec2::zero(), NEUTRAL_COLOR);
            ctx.counters.smoke_emitted += 1;
        }
    }
}

impl Behavior for CombustionBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if !ctx.claim() {
            return;
        }
        if !ctx.here().is_on_fire() {
            return;
        }

        self.emit_smoke(ctx);

        let dt = ctx.dt;
        if ctx.here_mut().burn(dt) {
            let cell = ctx.here_mut();
            cell.set_material(Material::Fire);
            cell.set_lifetime(FIRE_LIFETIME);
            cell.set_on_fire(false);
            ctx.counters.burned_out += 1;
            return;
        }

        let odds = ctx.config.wood_spread_odds;
        for (dx, dy) in ORTHOGONAL {
            if ctx.probe(dx, dy) == Some(Material::Wood) && ctx.rng.one_in(odds) {
                ctx.ignite(dx, dy);
            }
        }
    }
}
