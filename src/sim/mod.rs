//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Synchronous, sequential ticks with a caller-bounded `dt`
//! - Seeded RNG only (spawn placement)
//! - No rendering or platform dependencies

pub mod boundary;
pub mod collision;
pub mod gravity;
pub mod integrator;
pub mod state;
pub mod tick;

pub use boundary::confine_to_field;
pub use collision::{disc_overlaps_any, discs_overlap};
pub use gravity::central_accel;
pub use integrator::{integrate, Kinematics};
pub use state::{Disc, Rgb, World, WorldConfig};
pub use tick::{tick, FrameClock, TickInput};
