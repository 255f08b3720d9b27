//! Fixed-step integration of a position/velocity pair
//!
//! Ralston's two-stage second-order Runge-Kutta method. Second-order
//! accuracy keeps orbits visibly smooth at frame-bounded step sizes
//! (dt ≤ 1/30 s) where plain Euler spirals outward.

use std::ops::{Add, Mul};

use glam::DVec2;

use super::state::Disc;

/// The subset of a [`Disc`] the integrator operates on. Constructed fresh
/// each tick, copied back into the disc afterward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub position: DVec2,
    pub velocity: DVec2,
}

impl Kinematics {
    pub fn of(disc: &Disc) -> Self {
        Self {
            position: disc.position,
            velocity: disc.velocity,
        }
    }

    pub fn write_back(self, disc: &mut Disc) {
        disc.position = self.position;
        disc.velocity = self.velocity;
    }
}

impl Add for Kinematics {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            position: self.position + rhs.position,
            velocity: self.velocity + rhs.velocity,
        }
    }
}

impl Mul<f64> for Kinematics {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        Self {
            position: self.position * s,
            velocity: self.velocity * s,
        }
    }
}

/// Advance `state` by `dt` seconds using Ralston's second-order method.
///
/// `deriv` maps a state to its time derivative: `position -> velocity`,
/// `velocity -> acceleration`. It is captured per body (gravitational
/// parameter plus that body's thrust), so one integrator serves every body
/// type.
///
/// ```text
/// k1 = deriv(state)
/// k2 = deriv(state + k1 * (2/3 dt))
/// state' = state + (k1 + 3 k2) * (dt/4)
/// ```
pub fn integrate<F>(state: Kinematics, deriv: F, dt: f64) -> Kinematics
where
    F: Fn(&Kinematics) -> Kinematics,
{
    let k1 = deriv(&state);
    let k2 = deriv(&(state + k1 * (2.0 / 3.0 * dt)));
    state + (k1 + k2 * 3.0) * (dt / 4.0)
}
