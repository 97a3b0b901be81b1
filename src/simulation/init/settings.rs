use super::perf_stats::StepStats;
use super::SandEngine;

pub(super) fn set_drift_enabled(engine: &mut SandEngine, enabled: bool) {
    engine.config.drift.enabled = enabled;
    engine.drift_timer = 0.0;
}

pub(super) fn set_drift_interval(engine: &mut SandEngine, interval: f32) -> Result<(), String> {
    if interval.is_nan() || interval <= 0.0 {
        return Err(format!("drift interval must be positive, got {}", interval));
    }
    engine.config.drift.interval = interval;
    Ok(())
}

pub(super) fn set_relabel_burning_wood(engine: &mut SandEngine, relabel: bool) {
    engine.config.relabel_burning_wood = relabel;
}

/// Applies to cells inserted from now on; cells already on the grid keep theirs
pub(super) fn set_dispersity_rate(engine: &mut SandEngine, rate: u8) -> Result<(), String> {
    if rate == 0 {
        return Err("dispersity_rate must be positive".to_string());
    }
    engine.config.dispersity_rate = rate;
    Ok(())
}

pub(super) fn enable_perf_metrics(engine: &mut SandEngine, enabled: bool) {
    engine.perf_enabled = enabled;
    if !enabled {
        engine.perf_stats.reset();
    }
}

pub(super) fn perf_stats(engine: &SandEngine) -> StepStats {
    engine.perf_stats.clone()
}

pub(super) fn enable_scan_trace(engine: &mut SandEngine, enabled: bool) {
    engine.scan_trace = if enabled { Some(Vec::new()) } else { None };
}
