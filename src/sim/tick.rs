//! Per-tick orchestration
//!
//! One tick advances every mobile disc by `dt` seconds: compose thrust and
//! gravity into a net acceleration, integrate, clamp to the play field.
//! Ticks are synchronous and strictly sequential; the host's frame
//! scheduler decides when to call [`tick`] and bounds `dt` (see
//! [`FrameClock`]).

use glam::DVec2;

use super::boundary::confine_to_field;
use super::gravity::central_accel;
use super::integrator::{integrate, Kinematics};
use super::state::{Disc, World};
use crate::consts::MAX_TICK_DT;

/// Direction tokens held down during a tick (deterministic input)
///
/// The host collapses raw key codes to these four half-axes; multi-key
/// aliases (WASD, arrows) map to the same token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// No directions held
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Combined joystick direction: half-axis contributions summed, then
    /// renormalized to unit length if the sum exceeds it. Diagonal input
    /// never grants more than unit magnitude.
    pub fn joystick(&self) -> DVec2 {
        let mut dir = DVec2::ZERO;
        if self.up {
            dir.y += 1.0;
        }
        if self.down {
            dir.y -= 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        if dir.length_squared() > 1.0 {
            dir = dir.normalize();
        }
        dir
    }
}

/// Advance all mobile bodies in `world` by `dt` seconds, in place.
///
/// The player gets gravity plus thrust scaled from `input`; enemies get
/// gravity only. The sun never moves. Enemy update order is irrelevant -
/// there is no inter-enemy interaction.
pub fn tick(world: &mut World, input: &TickInput, dt: f64) {
    let mu = world.mu;
    let floor = world.sun.radius;

    let thrust = input.joystick() * world.rocket_acceleration;
    step_disc(&mut world.player, mu, floor, thrust, dt);

    for enemy in &mut world.enemies {
        step_disc(enemy, mu, floor, DVec2::ZERO, dt);
    }
}

/// Integrate one disc under gravity + `thrust`, then clamp to the field.
fn step_disc(disc: &mut Disc, mu: f64, floor: f64, thrust: DVec2, dt: f64) {
    let state = Kinematics::of(disc);
    let next = integrate(
        state,
        |s| Kinematics {
            position: s.velocity,
            velocity: central_accel(s.position, mu, floor) + thrust,
        },
        dt,
    );

    // A NaN here would silently corrupt every following tick; the softened
    // gravity makes it unreachable, so treat it as an invariant violation.
    assert!(
        next.position.is_finite() && next.velocity.is_finite(),
        "non-finite state after integration: {next:?}"
    );

    next.write_back(disc);
    confine_to_field(disc);
}

/// Converts host frame timestamps into bounded tick deltas.
///
/// Mirrors the frame-scheduler contract: `dt` is 0 while paused and on the
/// first frame after a resume (so a long pause never becomes one huge
/// step), and is otherwise clamped to [`MAX_TICK_DT`]. Starts paused.
#[derive(Debug, Clone)]
pub struct FrameClock {
    paused: bool,
    t_last: Option<f64>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            paused: true,
            t_last: None,
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Stop producing nonzero deltas. Ticks are atomic, so pausing simply
    /// means the next deltas are 0 until [`resume`](Self::resume).
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume; the first frame afterward still gets `dt = 0`.
    pub fn resume(&mut self) {
        self.paused = false;
        self.t_last = None;
    }

    /// Delta for the frame at monotonic time `now` (seconds).
    pub fn frame_dt(&mut self, now: f64) -> f64 {
        let dt = match self.t_last {
            Some(t) if !self.paused => (now - t).clamp(0.0, MAX_TICK_DT),
            _ => 0.0,
        };
        self.t_last = Some(now);
        dt
    }
}
