use crate::domain::config::EngineConfig;
use crate::spatial::grid::Grid;
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::random::{RandomSource, Xorshift32};

use super::perf_stats::StepStats;
use super::SandEngine;

pub(super) fn create_engine(config: EngineConfig) -> Result<SandEngine, String> {
    let rng = Box::new(Xorshift32::new(config.seed));
    create_engine_with_random(config, rng)
}

pub(super) fn create_engine_with_random(
    config: EngineConfig,
    rng: Box<dyn RandomSource>,
) -> Result<SandEngine, String> {
    config.validate()?;

    let width = config.grid_width();
    let height = config.grid_height();
    engine_log!(
        "engine: {}x{} cells (scale {}), seed {}",
        width,
        height,
        config.cell_scale,
        config.seed
    );

    Ok(SandEngine {
        grid: Grid::new(width, height),
        behaviors: BehaviorRegistry::new(),
        rng,
        config,
        frame: 0,
        drift_timer: 0.0,
        rejected_inserts: 0,
        perf_enabled: false,
        perf_stats: StepStats::default(),
        scan_trace: None,
    })
}

pub(super) fn create_engine_from_json(json: &str) -> Result<SandEngine, String> {
    let config = EngineConfig::from_json(json).map_err(|e| {
        engine_log!("config rejected: {}", e);
        e
    })?;
    create_engine(config)
}
