//! Periodic leftward drift ("wind")
//!
//! On drift frames, settled sand, water and fire shift one slot left.
//! Matter already in the leftmost column is blown off the grid.

use super::UpdateContext;
use crate::domain::materials::Material;

/// Try to drift the current cell. True when it moved or left the grid.
pub fn try_drift(ctx: &mut UpdateContext) -> bool {
    if !ctx.drift_due {
        return false;
    }
    if ctx.x == 0 {
        ctx.here_mut().clear();
        ctx.counters.drifted_off += 1;
        return true;
    }
    if ctx.probe(-1, 0) != Some(Material::Empty) {
        return false;
    }
    ctx.here_mut().set_side_moving(-1);
    ctx.move_by(-1, 0);
    ctx.counters.drifted += 1;
    true
}
