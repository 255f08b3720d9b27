//! Softened central-force gravity
//!
//! An inverse-square pull toward the origin with a hard floor on the
//! effective distance. Inside the floor the force law flattens: acceleration
//! stays continuous and bounded (magnitude at most `mu / floor²`), which is
//! what keeps close passes over the sun from blowing up the integrator. The
//! derivative is discontinuous at the floor - a deliberate trade against the
//! smoother Plummer-style softening, which would weaken gravity everywhere.

use glam::DVec2;

/// Acceleration at `position` toward a central mass at the origin with
/// gravitational parameter `mu`, softened so the effective distance never
/// drops below `floor_radius` (the sun's radius).
///
/// For `|position| > floor_radius` this is exactly `-mu / |p|³ * p`, an
/// inverse-square pull of magnitude `mu / |p|²`.
#[inline]
pub fn central_accel(position: DVec2, mu: f64, floor_radius: f64) -> DVec2 {
    let r2 = position.length_squared().max(floor_radius * floor_radius);
    let r = r2.sqrt();
    let strength = -mu / (r2 * r);
    position * strength
}
