//! World state and core simulation types
//!
//! Everything the host needs to reset, advance, and render a run lives here.

use glam::DVec2;
use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::disc_overlaps_any;
use crate::consts::*;
use crate::orbital_velocity;

/// RGB color triple, read by the renderer only - never consulted by physics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Default palette
pub const PLAYER_COLOR: Rgb = Rgb::new(0.8, 0.6, 0.0);
pub const SUN_COLOR: Rgb = Rgb::new(1.0, 1.0, 0.0);
pub const ENEMY_COLOR: Rgb = Rgb::new(0.9, 0.2, 0.2);

/// A circular body: the player, the sun, or an enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Disc {
    /// Disc radius, always > 0
    pub radius: f64,
    pub position: DVec2,
    pub velocity: DVec2,
    pub color: Rgb,
    /// Reserved for host-level lethal-collision handling. The physics core
    /// exposes the overlap predicates but never transitions this flag.
    #[serde(default)]
    pub dead: bool,
}

impl Disc {
    /// A stationary disc (the sun, or a body awaiting a seeded velocity)
    pub fn new(radius: f64, position: DVec2, color: Rgb) -> Self {
        assert!(radius > 0.0, "disc radius must be positive");
        Self {
            radius,
            position,
            velocity: DVec2::ZERO,
            color,
            dead: false,
        }
    }

    /// A disc seeded with the circular-orbit velocity for its position
    /// under gravitational parameter `mu`. Requires `|position| > 0`.
    pub fn orbiting(radius: f64, position: DVec2, color: Rgb, mu: f64) -> Self {
        let mut disc = Self::new(radius, position, color);
        disc.velocity = orbital_velocity(mu, position);
        disc
    }
}

/// Reset-time configuration for a [`World`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Gravitational parameter of the sun (GM), > 0
    pub mu: f64,
    /// Player thrust magnitude (field units / s²)
    pub rocket_acceleration: f64,
    /// Initial player position; must be nonzero so an orbit can be seeded
    pub player_position: DVec2,
    /// Initial enemy positions, each nonzero
    pub enemy_positions: Vec<DVec2>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            mu: DEFAULT_MU,
            rocket_acceleration: DEFAULT_ROCKET_ACCEL,
            player_position: DVec2::new(0.5, 0.0),
            enemy_positions: Vec::new(),
        }
    }
}

/// Complete simulation state: one sun, one player, any number of enemies.
///
/// Owned exclusively by the host loop and passed by reference into
/// [`super::tick`]; nothing here is shared or locked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Gravitational parameter, fixed for the lifetime of the world
    pub mu: f64,
    /// Player thrust magnitude
    pub rocket_acceleration: f64,
    /// Central mass; immobile, its radius is the gravity softening floor
    pub sun: Disc,
    pub player: Disc,
    /// Order is irrelevant to physics, stable for rendering
    pub enemies: Vec<Disc>,
}

impl World {
    /// Build a freshly seeded world: sun at the origin, player and enemies
    /// at their configured positions with orbit-consistent velocities.
    pub fn new(config: &WorldConfig) -> Self {
        assert!(config.mu > 0.0, "mu must be positive");
        assert!(
            config.rocket_acceleration >= 0.0,
            "rocket_acceleration must be non-negative"
        );

        let sun = Disc::new(SUN_RADIUS, DVec2::ZERO, SUN_COLOR);
        let player = Disc::orbiting(PLAYER_RADIUS, config.player_position, PLAYER_COLOR, config.mu);
        let enemies = config
            .enemy_positions
            .iter()
            .map(|&p| Disc::orbiting(ENEMY_RADIUS, p, ENEMY_COLOR, config.mu))
            .collect();

        debug!(
            "world reset: mu={} thrust={} enemies={}",
            config.mu,
            config.rocket_acceleration,
            config.enemy_positions.len()
        );

        Self {
            mu: config.mu,
            rocket_acceleration: config.rocket_acceleration,
            sun,
            player,
            enemies,
        }
    }

    /// Rebuild this world in place from `config` (wholesale replacement;
    /// bodies are never individually recycled mid-flight).
    pub fn reset(&mut self, config: &WorldConfig) {
        *self = Self::new(config);
    }

    /// Zero the player's velocity. The host calls this when resuming from
    /// pause so a stale velocity does not carry across the gap.
    pub fn halt_player(&mut self) {
        self.player.velocity = DVec2::ZERO;
    }

    /// Rejection-sample a spawn position for a new enemy that clears the
    /// sun, the player, and every existing enemy by
    /// [`MIN_SPAWN_SEPARATION`], then seed it with a circular-orbit
    /// velocity. Returns `false` without spawning if no clear position is
    /// found within [`MAX_SPAWN_ATTEMPTS`].
    pub fn spawn_enemy<R: Rng>(&mut self, rng: &mut R, radius: f64) -> bool {
        assert!(radius > 0.0, "enemy radius must be positive");
        let max = FIELD_HALF_EXTENT - radius;

        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let position = DVec2::new(rng.random_range(-max..=max), rng.random_range(-max..=max));
            // Inside the sun the orbit seed is meaningless; the overlap
            // test against the sun rejects those candidates too.
            let candidate = Disc::new(radius, position, ENEMY_COLOR);

            let blocked = disc_overlaps_any(
                &candidate,
                std::iter::once(&self.sun)
                    .chain(std::iter::once(&self.player))
                    .chain(self.enemies.iter()),
                MIN_SPAWN_SEPARATION,
            );

            if !blocked {
                let enemy = Disc::orbiting(radius, position, ENEMY_COLOR, self.mu);
                debug!("spawned enemy at ({:.4}, {:.4})", position.x, position.y);
                self.enemies.push(enemy);
                return true;
            }
        }

        warn!(
            "no clear spawn position after {} attempts ({} enemies in field)",
            MAX_SPAWN_ATTEMPTS,
            self.enemies.len()
        );
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_world_seeds_orbits() {
        let config = WorldConfig {
            enemy_positions: vec![DVec2::new(-0.7, 0.0)],
            ..WorldConfig::default()
        };
        let world = World::new(&config);

        // Player at (0.5, 0) with mu = 0.05: v = (0, sqrt(0.1))
        assert!(world.player.velocity.x.abs() < 1e-12);
        assert!((world.player.velocity.y - (0.05f64 / 0.5).sqrt()).abs() < 1e-12);

        // Enemy orbit is perpendicular to its position
        let e = &world.enemies[0];
        assert!(e.velocity.dot(e.position).abs() < 1e-12);

        assert!(world.sun.velocity == DVec2::ZERO);
        assert!(!world.player.dead);
    }

    #[test]
    fn test_spawn_enemy_respects_separation() {
        let mut world = World::new(&WorldConfig::default());
        let mut rng = Pcg32::seed_from_u64(7);

        for _ in 0..8 {
            assert!(world.spawn_enemy(&mut rng, ENEMY_RADIUS));
        }
        assert_eq!(world.enemies.len(), 8);

        // Every spawned pair keeps the configured clearance
        let all: Vec<&Disc> = std::iter::once(&world.sun)
            .chain(std::iter::once(&world.player))
            .chain(world.enemies.iter())
            .collect();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                let gap = (a.position - b.position).length() - a.radius - b.radius;
                assert!(gap >= MIN_SPAWN_SEPARATION - 1e-12);
            }
        }
    }

    #[test]
    fn test_spawn_is_deterministic_for_seed() {
        let mut a = World::new(&WorldConfig::default());
        let mut b = World::new(&WorldConfig::default());
        let mut rng_a = Pcg32::seed_from_u64(42);
        let mut rng_b = Pcg32::seed_from_u64(42);

        a.spawn_enemy(&mut rng_a, ENEMY_RADIUS);
        b.spawn_enemy(&mut rng_b, ENEMY_RADIUS);

        assert_eq!(a.enemies[0].position, b.enemies[0].position);
        assert_eq!(a.enemies[0].velocity, b.enemies[0].velocity);
    }

    #[test]
    fn test_halt_player() {
        let mut world = World::new(&WorldConfig::default());
        assert!(world.player.velocity != DVec2::ZERO);
        world.halt_player();
        assert_eq!(world.player.velocity, DVec2::ZERO);
    }
}
