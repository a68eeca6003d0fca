//! Point masses taking part in the simulation

use crate::config::ConfigError;
use crate::trail::Trail;
use crate::vector::Vector;

/// Stable identifier of a body within its scenario, assigned by position in
/// the initial body list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A body with mass, radius, and kinematic state
#[derive(Debug, Clone, PartialEq)]
pub struct Body<V> {
    pub id: BodyId,
    pub name: Option<String>,
    pub position: V,
    pub velocity: V,
    /// Accumulated acceleration of the current force pass
    pub acceleration: V,
    pub mass: f64,
    pub radius: f64,
    pub color: [f32; 4],
    /// Fixed bodies neither move nor feel forces
    pub fixed: bool,
    trail_length: Option<usize>,
    trail: Trail<V>,
}

impl<V: Vector> Body<V> {
    pub fn new(position: V, velocity: V, mass: f64, radius: f64) -> Self {
        Self {
            id: BodyId(0),
            name: None,
            position,
            velocity,
            acceleration: V::ZERO,
            mass,
            radius,
            color: [1.0, 1.0, 1.0, 1.0],
            fixed: false,
            trail_length: None,
            trail: Trail::with_capacity(0),
        }
    }

    /// A fixed body sitting at `position`, like a sun anchoring its planets.
    pub fn anchored(position: V, mass: f64, radius: f64) -> Self {
        Self::new(position, V::ZERO, mass, radius).fixed()
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Overrides the scenario-wide trail capacity for this body.
    pub fn with_trail_length(mut self, length: usize) -> Self {
        self.trail_length = Some(length);
        self
    }

    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    pub fn trail(&self) -> &Trail<V> {
        &self.trail
    }

    /// Trail as single precision points, oldest first, for line-strip drawing.
    pub fn trail_vertices(&self) -> Vec<[f32; 3]> {
        self.trail
            .iter()
            .map(|p| p.to_array3().map(|c| c as f32))
            .collect()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub(crate) fn record_trail(&mut self) {
        self.trail.push(self.position);
    }

    /// Assigns identity and trail storage once the body joins a scenario.
    pub(crate) fn prepare(&mut self, index: usize, default_trail_length: usize) {
        self.id = BodyId(index);
        self.acceleration = V::ZERO;
        self.trail = Trail::with_capacity(self.trail_length.unwrap_or(default_trail_length));
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), ConfigError> {
        if !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(ConfigError::NonPositiveMass {
                index,
                mass: self.mass,
            });
        }
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(ConfigError::NonPositiveRadius {
                index,
                radius: self.radius,
            });
        }
        if !self.position.is_finite() {
            return Err(ConfigError::NonFiniteState {
                index,
                field: "position",
            });
        }
        if !self.velocity.is_finite() {
            return Err(ConfigError::NonFiniteState {
                index,
                field: "velocity",
            });
        }
        Ok(())
    }
}
