//! Square play-field containment
//!
//! Walls are inelastic: a disc that would leave the field is pinned to the
//! wall and the offending velocity component is zeroed, never reflected.
//! Axes are handled independently so a diagonal wall hit keeps the sliding
//! component of the motion.

use crate::consts::FIELD_HALF_EXTENT;

use super::state::Disc;

/// Clamp `disc` to the closed square `[-1+radius, 1-radius]²`, zeroing each
/// velocity component whose axis is in contact. Runs after integration,
/// every tick, for every mobile disc.
pub fn confine_to_field(disc: &mut Disc) {
    let min = -FIELD_HALF_EXTENT + disc.radius;
    let max = FIELD_HALF_EXTENT - disc.radius;

    if disc.position.x < min {
        disc.position.x = min;
        disc.velocity.x = 0.0;
    } else if disc.position.x > max {
        disc.position.x = max;
        disc.velocity.x = 0.0;
    }
    if disc.position.y < min {
        disc.position.y = min;
        disc.velocity.y = 0.0;
    } else if disc.position.y > max {
        disc.position.y = max;
        disc.velocity.y = 0.0;
    }
}
