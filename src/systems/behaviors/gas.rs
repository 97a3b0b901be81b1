//! GasBehavior - smoke
//!
//! Smoke rises into the first free slot among up, up-left, up-right, left
//! and right until its lifetime runs out. It randomly sits out frames so
//! plumes climb slower than sand falls.

use super::{Behavior, UpdateContext};
use crate::domain::materials::Material;

const RISE_TARGETS: [(i32, i32); 5] = [(0, -1), (-1, -1), (1, -1), (-1, 0), (1, 0)];

pub struct GasBehavior;

impl GasBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for GasBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if ctx.is_claimed() {
            return;
        }
        // A skipped frame leaves the cell unclaimed
        if ctx.rng.one_in(ctx.config.smoke_skip_odds) {
            ctx.counters.smoke_skipped += 1;
            return;
        }
        ctx.claim();

        let dt = ctx.dt;
        if ctx.here_mut().burn(dt) {
            ctx.here_mut().clear();
            ctx.counters.expired += 1;
            return;
        }

        for (dx, dy) in RISE_TARGETS {
            if ctx.probe(dx, dy) == Some(Material::Empty) {
                ctx.move_by(dx, dy);
                return;
            }
        }
    }
}
