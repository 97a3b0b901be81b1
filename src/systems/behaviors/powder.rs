//! PowderBehavior - sand
//!
//! Falls straight down as far as its velocity hint allows, sinks through
//! water, then rolls diagonally down-left before down-right.

use super::common::{fall, fall_distance};
use super::{Behavior, UpdateContext, try_drift};
use crate::domain::materials::Material;

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Powder can enter empty space and displace water that has not been
    /// swapped yet this frame
    #[inline]
    fn can_displace(ctx: &UpdateContext, dx: i32, dy: i32) -> bool {
        match ctx.probe(dx, dy) {
            Some(Material::Empty) => true,
            Some(Material::Water) => !ctx.neighbor_moved(dx, dy),
            _ => false,
        }
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if !ctx.claim() {
            return;
        }

        let distance = fall_distance(ctx);
        if distance > 0 {
            fall(ctx, distance);
            return;
        }

        // Sink: the water ends up where the sand was
        if ctx.probe(0, 1) == Some(Material::Water) && !ctx.neighbor_moved(0, 1) {
            ctx.move_by(0, 1);
            return;
        }

        for dx in [-1, 1] {
            if Self::can_displace(ctx, dx, 1) {
                ctx.move_by(dx, 1);
                return;
            }
        }

        try_drift(ctx);
    }
}
