use super::sweep::sweep_rows;
use super::{PerfTimer, SandEngine};

pub(super) fn step(engine: &mut SandEngine, dt: f32) {
    let perf_on = engine.perf_enabled;
    if perf_on {
        engine.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // A unit of matter acts at most once per frame
    engine.grid.reset_updated();

    let drift_due = advance_drift_timer(engine, dt);

    if let Some(trace) = engine.scan_trace.as_mut() {
        trace.clear();
    }

    let sweep_start = if perf_on { Some(PerfTimer::start()) } else { None };
    let report = sweep_rows(engine, dt, drift_due);

    if perf_on {
        let stats = &mut engine.perf_stats;
        stats.absorb(&report.counters);
        stats.cells_processed = report.cells_processed;
        stats.drift_frame = drift_due;
        stats.rejected_inserts = engine.rejected_inserts;
        stats.particle_count = engine.grid.non_empty_count() as u32;
        stats.grid_size = engine.grid.size() as u32;
        if let Some(start) = sweep_start {
            stats.sweep_ms = start.elapsed_ms();
        }
        if let Some(start) = step_start {
            stats.step_ms = start.elapsed_ms();
        }
    }

    engine.frame += 1;
}

/// Accumulate `dt` and report whether this frame is a drift frame.
/// One interval is consumed per frame, so a long frame carries its
/// remainder into the next one.
pub(super) fn advance_drift_timer(engine: &mut SandEngine, dt: f32) -> bool {
    let drift = engine.config.drift;
    if !drift.enabled {
        return false;
    }
    engine.drift_timer += dt;
    if engine.drift_timer >= drift.interval {
        engine.drift_timer -= drift.interval;
        true
    } else {
        false
    }
}
