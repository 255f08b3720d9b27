//! Orbit Dodge - an orbital-flight arcade physics core
//!
//! Core modules:
//! - `sim`: the state-evolution engine (gravity, RK2 integration, boundary
//!   containment, disc-overlap geometry, per-tick orchestration)
//!
//! Rendering, raw input capture, and frame scheduling are host concerns; the
//! host calls [`sim::tick`] once per frame with a bounded time delta and
//! reads body positions back out of the [`sim::World`].

pub mod sim;

pub use sim::{Disc, FrameClock, TickInput, World, WorldConfig};

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Half-extent of the square play field (positions live in [-1, 1]²)
    pub const FIELD_HALF_EXTENT: f64 = 1.0;
    /// Upper bound on a single tick's time delta (seconds). Larger frame
    /// gaps (tab stalls) are clamped here to keep the integrator stable.
    pub const MAX_TICK_DT: f64 = 1.0 / 30.0;

    /// Sun at the origin; its radius doubles as the gravity softening floor
    pub const SUN_RADIUS: f64 = 0.1;

    /// Disc defaults
    pub const PLAYER_RADIUS: f64 = 0.0125;
    pub const ENEMY_RADIUS: f64 = 0.015;

    /// Default gravitational parameter (GM of the sun)
    pub const DEFAULT_MU: f64 = 0.05;
    /// Default player thrust magnitude (field units / s²)
    pub const DEFAULT_ROCKET_ACCEL: f64 = 0.2;

    /// Minimum clearance when placing a spawned enemy
    pub const MIN_SPAWN_SEPARATION: f64 = 0.05;
    /// Rejection-sampling budget for enemy placement
    pub const MAX_SPAWN_ATTEMPTS: u32 = 128;
}

/// Velocity for a circular orbit at position `p` under gravitational
/// parameter `mu`: the 90° counterclockwise perpendicular of `p`, scaled to
/// magnitude `sqrt(mu / r)`.
///
/// Requires `|p| > 0`; a body seeded with this velocity traces a stable
/// circle absent thrust and wall contact.
#[inline]
pub fn orbital_velocity(mu: f64, p: DVec2) -> DVec2 {
    let r = p.length();
    debug_assert!(r > 0.0, "orbital_velocity at the origin");
    (mu / r).sqrt() / r * DVec2::new(-p.y, p.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbital_velocity_perpendicular() {
        let p = DVec2::new(0.5, 0.0);
        let v = orbital_velocity(0.05, p);
        // Perpendicular to position, CCW
        assert!(v.dot(p).abs() < 1e-12);
        assert!(p.perp_dot(v) > 0.0);
        // |v| = sqrt(mu / r)
        assert!((v.length() - (0.05f64 / 0.5).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_orbital_velocity_magnitude_off_axis() {
        let p = DVec2::new(0.3, -0.4); // r = 0.5
        let v = orbital_velocity(0.08, p);
        assert!((v.length() - (0.08f64 / 0.5).sqrt()).abs() < 1e-12);
    }
}
