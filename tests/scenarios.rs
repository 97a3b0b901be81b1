use sandfall_engine::{EngineConfig, Material, SandEngine, Vec2};

const DT: f32 = 0.016;

fn engine_10x10() -> SandEngine {
    SandEngine::new(EngineConfig::with_grid(10, 10)).unwrap()
}

#[test]
fn sand_falls_one_cell() {
    let mut engine = engine_10x10();
    assert!(engine.insert(Vec2::new(5.0, 0.0), Vec2::zero(), Material::Sand));
    engine.update(DT);
    assert_eq!(engine.query(5, 1).material(), Material::Sand);
    assert_eq!(engine.query(5, 0).material(), Material::Empty);
}

#[test]
fn water_below_fire_puts_it_out() {
    let mut engine = engine_10x10();
    engine.insert_cell(5, 5, Material::Fire);
    engine.insert_cell(5, 6, Material::Water);
    // Stone cup so the water cannot leave (5, 6) before the fire row runs
    for (x, y) in [(4, 6), (6, 6), (4, 7), (5, 7), (6, 7)] {
        engine.insert_cell(x, y, Material::Stone);
    }

    engine.update(DT);
    assert_eq!(engine.query(5, 5).material(), Material::Empty);
    assert_eq!(engine.query(5, 6).material(), Material::Water);
}

#[test]
fn water_on_sand_spreads_sideways() {
    let mut engine = engine_10x10();
    engine.insert_cell(5, 5, Material::Water);
    for x in 4..=6 {
        engine.insert_cell(x, 6, Material::Sand);
    }
    for x in 0..10 {
        engine.insert_cell(x, 7, Material::Stone);
    }

    engine.update(DT);
    assert_eq!(engine.query(5, 5).material(), Material::Empty);
    let moved_left = engine.query(4, 5).material() == Material::Water;
    let moved_right = engine.query(6, 5).material() == Material::Water;
    assert!(moved_left ^ moved_right);
    for x in 4..=6 {
        assert_eq!(engine.query(x, 6).material(), Material::Sand);
    }
}

#[test]
fn sand_column_settles_into_a_pile() {
    let mut engine = engine_10x10();
    for y in 0..6 {
        engine.insert_cell(5, y, Material::Sand);
    }
    for _ in 0..60 {
        engine.update(DT);
    }
    assert_eq!(engine.count(Material::Sand), 6);
    // Nothing floats: every grain rests on the floor or on other matter
    for y in 0..9 {
        for x in 0..10 {
            if engine.material_at(x, y) == Material::Sand {
                assert_ne!(engine.material_at(x, y + 1), Material::Empty, "grain at ({}, {})", x, y);
            }
        }
    }
    assert_eq!(engine.material_at(5, 9), Material::Sand);
}

#[test]
fn wood_fire_burns_down_to_nothing_but_smoke() {
    let mut engine = SandEngine::new(EngineConfig::with_grid(12, 12)).unwrap();
    for x in 3..9 {
        engine.insert_cell(x, 11, Material::Wood);
    }
    engine.insert_cell(3, 10, Material::Fire);

    for _ in 0..400 {
        engine.update(DT);
    }
    assert_eq!(engine.count(Material::Wood), 0);
    assert_eq!(engine.count(Material::BurningWood), 0);
    assert_eq!(engine.count(Material::Fire), 0);
}

#[test]
fn smoke_rises_to_the_ceiling() {
    let mut engine = engine_10x10();
    engine.insert_cell(5, 9, Material::Smoke);
    for _ in 0..80 {
        engine.update(DT);
    }
    let top_row_smoke = (0..10).filter(|&x| engine.material_at(x, 0) == Material::Smoke).count();
    assert_eq!(top_row_smoke, 1);
}
