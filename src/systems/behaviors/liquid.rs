//! LiquidBehavior - water
//!
//! Falls like sand, then tries both lower diagonals in random order, then
//! scans sideways up to the cell's dispersity rate and teleports into the
//! first free slot. Water puts out any fire it runs into instead of moving.

use super::common::{fall, fall_distance};
use super::{Behavior, UpdateContext, try_drift};
use crate::domain::materials::Material;

pub struct LiquidBehavior;

/// Outcome of the sideways scan
enum Dispersal {
    MoveTo(i32),
    Extinguish(i32),
    Blocked,
}

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Walk sideways in `dir` looking for room. The scan looks past other
    /// matter; only sand and the grid edge end it.
    fn scan_sideways(&self, ctx: &UpdateContext, dir: i32, range: i32) -> Dispersal {
        for i in 1..=range {
            let dx = dir * i;
            match ctx.probe(dx, 0) {
                Some(Material::Empty) => return Dispersal::MoveTo(dx),
                Some(Material::Fire) => return Dispersal::Extinguish(dx),
                Some(Material::Sand) | None => break,
                _ => continue,
            }
        }
        Dispersal::Blocked
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if !ctx.claim() {
            return;
        }

        // Dropping onto fire smothers it and takes its place
        if ctx.probe(0, 1) == Some(Material::Fire) {
            ctx.extinguish(0, 1);
            fall(ctx, 1);
            return;
        }

        let distance = fall_distance(ctx);
        if distance > 0 {
            fall(ctx, distance);
            return;
        }

        let diagonals = if ctx.rng.coin() { [-1, 1] } else { [1, -1] };
        for dx in diagonals {
            match ctx.probe(dx, 1) {
                Some(Material::Fire) => {
                    ctx.extinguish(dx, 1);
                    return;
                }
                Some(Material::Empty) => {
                    ctx.move_by(dx, 1);
                    return;
                }
                _ => {}
            }
        }

        let range = ctx.here().dispersity_rate() as i32;
        let dir = if ctx.rng.coin() { -1 } else { 1 };
        match self.scan_sideways(ctx, dir, range) {
            Dispersal::MoveTo(dx) => {
                ctx.here_mut().set_side_moving(dir as i8);
                ctx.move_by(dx, 0);
            }
            Dispersal::Extinguish(dx) => ctx.extinguish(dx, 0),
            Dispersal::Blocked => {
                try_drift(ctx);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::EngineConfig;
    use crate::systems::behaviors::test_support::{grid_with, run};
    use crate::systems::random::SequenceRandom;

    #[test]
    fn falls_onto_fire_and_puts_it_out() {
        let mut grid = grid_with(5, 5, &[(2, 1, Material::Water), (2, 2, Material::Fire)]);
        let mut rng = SequenceRandom::always();
        let counters = run(&LiquidBehavior, &mut grid, &mut rng, &EngineConfig::default(), 2, 1, 0.016);
        assert!(grid.material_is(2, 2, Material::Water));
        assert!(grid.is_empty(2, 1));
        assert_eq!(grid.count(Material::Fire), 0);
        assert_eq!(counters.extinguished, 1);
    }

    #[test]
    fn diagonal_order_follows_the_coin() {
        let cells = [(2, 2, Material::Water), (2, 3, Material::Stone)];

        let mut grid = grid_with(5, 5, &cells);
        let mut heads = SequenceRandom::always();
        run(&LiquidBehavior, &mut grid, &mut heads, &EngineConfig::default(), 2, 2, 0.016);
        assert!(grid.material_is(1, 3, Material::Water));

        let mut grid = grid_with(5, 5, &cells);
        let mut tails = SequenceRandom::never();
        run(&LiquidBehavior, &mut grid, &mut tails, &EngineConfig::default(), 2, 2, 0.016);
        assert!(grid.material_is(3, 3, Material::Water));
    }

    #[test]
    fn diagonal_fire_is_put_out_without_moving() {
        let mut grid = grid_with(
            5,
            5,
            &[(2, 2, Material::Water), (2, 3, Material::Stone), (1, 3, Material::Fire)],
        );
        let mut rng = SequenceRandom::always();
        run(&LiquidBehavior, &mut grid, &mut rng, &EngineConfig::default(), 2, 2, 0.016);
        assert!(grid.material_is(2, 2, Material::Water));
        assert!(grid.is_empty(1, 3));
    }

    #[test]
    fn disperses_across_water_to_the_first_gap() {
        // Floor of stone, a run of water to the left, a gap at x=1
        let mut cells = vec![(5, 3, Material::Water)];
        for x in 0..8 {
            cells.push((x, 4, Material::Stone));
        }
        cells.extend([(4, 3, Material::Water), (3, 3, Material::Water), (2, 3, Material::Water)]);
        let mut grid = grid_with(8, 5, &cells);
        let mut rng = SequenceRandom::always();
        let counters = run(&LiquidBehavior, &mut grid, &mut rng, &EngineConfig::default(), 5, 3, 0.016);
        assert!(grid.material_is(1, 3, Material::Water));
        assert!(grid.is_empty(5, 3));
        assert_eq!(grid.cell(1, 3).side_moving(), -1);
        assert_eq!(counters.moved, 1);
    }

    #[test]
    fn dispersal_looks_past_a_stone_wall() {
        let mut cells = vec![(6, 1, Material::Water), (5, 1, Material::Stone), (7, 1, Material::Stone)];
        for x in 0..12 {
            cells.push((x, 2, Material::Stone));
        }
        for (rng, target) in [(SequenceRandom::always(), 4), (SequenceRandom::never(), 8)] {
            let mut grid = grid_with(12, 3, &cells);
            let mut rng = rng;
            let counters = run(&LiquidBehavior, &mut grid, &mut rng, &EngineConfig::default(), 6, 1, 0.016);
            assert!(grid.material_is(target, 1, Material::Water), "expected water at x={}", target);
            assert!(grid.is_empty(6, 1));
            assert_eq!(counters.moved, 1);
        }
    }

    #[test]
    fn sand_stops_dispersal() {
        let mut cells = vec![(2, 2, Material::Water), (1, 2, Material::Sand)];
        for x in 0..5 {
            cells.push((x, 3, Material::Stone));
        }
        let mut grid = grid_with(5, 4, &cells);
        let mut rng = SequenceRandom::always();
        let counters = run(&LiquidBehavior, &mut grid, &mut rng, &EngineConfig::default(), 2, 2, 0.016);
        assert!(grid.material_is(2, 2, Material::Water));
        assert_eq!(counters.moved, 0);
    }

    #[test]
    fn dispersal_puts_out_fire_in_its_path() {
        let mut cells = vec![(3, 2, Material::Water), (2, 2, Material::Water), (1, 2, Material::Fire)];
        for x in 0..6 {
            cells.push((x, 3, Material::Stone));
        }
        let mut grid = grid_with(6, 4, &cells);
        let mut rng = SequenceRandom::always();
        run(&LiquidBehavior, &mut grid, &mut rng, &EngineConfig::default(), 3, 2, 0.016);
        assert!(grid.is_empty(1, 2));
        assert!(grid.material_is(3, 2, Material::Water));
    }
}
