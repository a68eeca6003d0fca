//! N-body gravitational physics core
//!
//! Maintains a set of sphere masses, accumulates pairwise gravity, integrates
//! with semi-implicit Euler in bounded sub-steps, resolves collisions, and
//! records a bounded trail per body. Rendering, windowing and input devices
//! live outside this crate; they read [`Body`] state and feed
//! [`FrameInput`] snapshots through [`Controls`].

pub mod body;
pub mod collision;
pub mod config;
pub mod controls;
pub mod forces;
pub mod physics;
pub mod render_data;
pub mod scenarios;
pub mod trail;
pub mod vector;

pub use body::{Body, BodyId};
pub use config::{Bounds, ConfigError, ForceClamp, SimConfig};
pub use controls::{Controls, FrameInput};
pub use physics::{BodyStats, Simulation};
pub use render_data::BodyInstance;
pub use scenarios::Scenario;
pub use trail::Trail;
pub use vector::Vector;
