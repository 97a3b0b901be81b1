use super::UpdateContext;
use crate::domain::materials::Material;

/// Orthogonal neighbors in the order rules inspect them: below, left, right, above
pub const ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (-1, 0), (1, 0), (0, -1)];

/// How far the current cell can fall straight down this frame.
///
/// The velocity hint sets the reach (at least one cell); the probe stops at
/// the first non-empty slot or the grid floor. Zero means blocked.
pub fn fall_distance(ctx: &UpdateContext) -> i32 {
    let reach = (ctx.here().velocity().y as i32).max(1);
    let mut distance = 0;
    for i in 1..=reach {
        if ctx.probe(0, i) == Some(Material::Empty) {
            distance = i;
        } else {
            break;
        }
    }
    distance
}

/// Fall `distance` cells, dropping the velocity hint on the way.
#[inline]
pub fn fall(ctx: &mut UpdateContext, distance: i32) {
    let cell = ctx.here_mut();
    cell.set_velocity(Default::default());
    cell.set_side_moving(0);
    ctx.move_by(0, distance);
}
