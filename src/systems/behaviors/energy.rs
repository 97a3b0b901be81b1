//! EnergyBehavior - fire
//!
//! Fire burns out on its own, dies on contact with water, and consumes
//! itself when it manages to light a neighbor. Otherwise it drifts down
//! like a light particle.

use super::{Behavior, UpdateContext, ORTHOGONAL, try_drift};
use crate::domain::materials::Material;

/// Where unsupported fire tries to go, in order
const FALL_TARGETS: [(i32, i32); 3] = [(0, 1), (-1, 1), (1, 1)];

pub struct EnergyBehavior;

impl EnergyBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for EnergyBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if !ctx.claim() {
            return;
        }

        let dt = ctx.dt;
        if ctx.here_mut().burn(dt) {
            ctx.here_mut().clear();
            ctx.counters.expired += 1;
            return;
        }

        let mut has_spread = false;
        for (dx, dy) in ORTHOGONAL {
            match ctx.probe(dx, dy) {
                Some(Material::Water) => {
                    ctx.here_mut().clear();
                    ctx.counters.extinguished += 1;
                    return;
                }
                Some(Material::Wood) | Some(Material::Oil) => {
                    ctx.ignite(dx, dy);
                    has_spread = true;
                }
                _ => {}
            }
        }

        if has_spread {
            ctx.here_mut().clear();
            return;
        }

        for (dx, dy) in FALL_TARGETS {
            if ctx.probe(dx, dy) == Some(Material::Empty) {
                ctx.move_by(dx, dy);
                return;
            }
        }

        try_drift(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::EngineConfig;
    use crate::systems::behaviors::test_support::{grid_with, run};
    use crate::systems::random::SequenceRandom;

    const DT: f32 = 0.016;

    #[test]
    fn burns_out_into_empty() {
        let mut grid = grid_with(5, 5, &[(2, 2, Material::Fire)]);
        let mut rng = SequenceRandom::always();
        let counters = run(&EnergyBehavior, &mut grid, &mut rng, &EngineConfig::default(), 2, 2, 1.0);
        assert_eq!(grid.non_empty_count(), 0);
        assert_eq!(counters.expired, 1);
    }

    #[test]
    fn any_water_neighbor_puts_it_out() {
        for (wx, wy) in [(2, 3), (1, 2), (3, 2), (2, 1)] {
            let mut grid = grid_with(5, 5, &[(2, 2, Material::Fire), (wx, wy, Material::Water)]);
            let mut rng = SequenceRandom::always();
            run(&EnergyBehavior, &mut grid, &mut rng, &EngineConfig::default(), 2, 2, DT);
            assert!(grid.is_empty(2, 2), "water at ({}, {})", wx, wy);
            assert!(grid.material_is(wx as i32, wy as i32, Material::Water));
        }
    }

    #[test]
    fn lighting_a_neighbor_consumes_the_fire() {
        let mut grid = grid_with(5, 5, &[(2, 2, Material::Fire), (3, 2, Material::Wood), (2, 3, Material::Oil)]);
        let mut rng = SequenceRandom::always();
        let counters = run(&EnergyBehavior, &mut grid, &mut rng, &EngineConfig::default(), 2, 2, DT);
        assert!(grid.is_empty(2, 2));
        assert!(grid.material_is(3, 2, Material::BurningWood));
        assert!(grid.cell(3, 2).is_on_fire());
        assert!(grid.material_is(2, 3, Material::Oil));
        assert!(grid.cell(2, 3).is_on_fire());
        assert_eq!(counters.ignitions, 2);
    }

    #[test]
    fn falls_straight_then_diagonally() {
        let mut grid = grid_with(5, 5, &[(2, 2, Material::Fire)]);
        let mut rng = SequenceRandom::always();
        run(&EnergyBehavior, &mut grid, &mut rng, &EngineConfig::default(), 2, 2, DT);
        assert!(grid.material_is(2, 3, Material::Fire));

        let mut grid = grid_with(5, 5, &[(2, 2, Material::Fire), (2, 3, Material::Stone)]);
        run(&EnergyBehavior, &mut grid, &mut rng, &EngineConfig::default(), 2, 2, DT);
        assert!(grid.material_is(1, 3, Material::Fire));

        let mut grid = grid_with(
            5,
            5,
            &[(2, 2, Material::Fire), (2, 3, Material::Stone), (1, 3, Material::Sand)],
        );
        run(&EnergyBehavior, &mut grid, &mut rng, &EngineConfig::default(), 2, 2, DT);
        assert!(grid.material_is(3, 3, Material::Fire));
    }

    #[test]
    fn fire_on_the_floor_stays_put() {
        let mut grid = grid_with(3, 3, &[(1, 2, Material::Fire)]);
        let mut rng = SequenceRandom::always();
        let counters = run(&EnergyBehavior, &mut grid, &mut rng, &EngineConfig::default(), 1, 2, DT);
        assert!(grid.material_is(1, 2, Material::Fire));
        assert_eq!(counters.moved, 0);
    }
}
