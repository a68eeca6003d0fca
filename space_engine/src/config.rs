//! Simulation parameters and construction-time validation

use crate::vector::Vector;

/// How the separation is floored before dividing by it in the gravity law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForceClamp {
    /// Floor at a constant distance.
    Epsilon(f64),
    /// Floor at `factor * (r_a + r_b)`.
    RadiusSum { factor: f64 },
}

impl ForceClamp {
    pub fn min_distance(&self, radius_a: f64, radius_b: f64) -> f64 {
        match *self {
            ForceClamp::Epsilon(min) => min,
            ForceClamp::RadiusSum { factor } => factor * (radius_a + radius_b),
        }
    }
}

/// Axis-aligned box that bodies bounce off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<V> {
    pub min: V,
    pub max: V,
    /// Fraction of the normal velocity kept after hitting a wall.
    pub restitution: f64,
}

/// Global parameters of a scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig<V> {
    /// Gravitational constant in scenario units
    pub g: f64,
    /// Bounciness of body-body collisions, in [0, 1]
    pub restitution: f64,
    /// Velocity multiplier applied to both bodies after a collision impulse
    pub collision_damping: f64,
    pub max_trail_length: usize,
    /// Record trails every Nth sub-step
    pub trail_interval: u64,
    /// Largest allowed integration step
    pub max_timestep: f64,
    pub max_substeps: usize,
    pub force_clamp: ForceClamp,
    /// Bodies closer than their summed radii do not attract each other
    pub contact_cutoff: bool,
    /// Constant acceleration applied to every free body
    pub uniform_field: V,
    pub collisions: bool,
    pub bounds: Option<Bounds<V>>,
}

impl<V: Vector> Default for SimConfig<V> {
    fn default() -> Self {
        Self {
            g: 1.0,
            restitution: 0.8,
            collision_damping: 0.98,
            max_trail_length: 500,
            trail_interval: 1,
            max_timestep: 0.001,
            max_substeps: 10_000,
            force_clamp: ForceClamp::RadiusSum { factor: 1.0 },
            contact_cutoff: false,
            uniform_field: V::ZERO,
            collisions: true,
            bounds: None,
        }
    }
}

impl<V: Vector> SimConfig<V> {
    pub fn with_g(mut self, g: f64) -> Self {
        self.g = g;
        self
    }

    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_collision_damping(mut self, damping: f64) -> Self {
        self.collision_damping = damping;
        self
    }

    pub fn with_trails(mut self, max_length: usize, interval: u64) -> Self {
        self.max_trail_length = max_length;
        self.trail_interval = interval;
        self
    }

    pub fn with_max_timestep(mut self, max_timestep: f64) -> Self {
        self.max_timestep = max_timestep;
        self
    }

    pub fn with_force_clamp(mut self, clamp: ForceClamp) -> Self {
        self.force_clamp = clamp;
        self
    }

    pub fn with_contact_cutoff(mut self, enabled: bool) -> Self {
        self.contact_cutoff = enabled;
        self
    }

    pub fn with_uniform_field(mut self, field: V) -> Self {
        self.uniform_field = field;
        self
    }

    pub fn with_collisions(mut self, enabled: bool) -> Self {
        self.collisions = enabled;
        self
    }

    pub fn with_bounds(mut self, min: V, max: V, restitution: f64) -> Self {
        self.bounds = Some(Bounds {
            min,
            max,
            restitution,
        });
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.g.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "g",
                value: self.g,
            });
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::InvalidParameter {
                name: "restitution",
                value: self.restitution,
            });
        }
        if !(self.collision_damping > 0.0 && self.collision_damping <= 1.0) {
            return Err(ConfigError::InvalidParameter {
                name: "collision_damping",
                value: self.collision_damping,
            });
        }
        if !(self.max_timestep > 0.0 && self.max_timestep.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "max_timestep",
                value: self.max_timestep,
            });
        }
        if self.trail_interval == 0 {
            return Err(ConfigError::ZeroCount("trail_interval"));
        }
        if self.max_substeps == 0 {
            return Err(ConfigError::ZeroCount("max_substeps"));
        }
        let min_distance = match self.force_clamp {
            ForceClamp::Epsilon(min) => min,
            ForceClamp::RadiusSum { factor } => factor,
        };
        if !(min_distance > 0.0 && min_distance.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "force_clamp",
                value: min_distance,
            });
        }
        if !self.uniform_field.is_finite() {
            return Err(ConfigError::NonFiniteVector("uniform_field"));
        }
        if let Some(bounds) = &self.bounds {
            if !(0.0..=1.0).contains(&bounds.restitution) {
                return Err(ConfigError::InvalidParameter {
                    name: "bounds.restitution",
                    value: bounds.restitution,
                });
            }
            if (0..V::DIM).any(|axis| !(bounds.min[axis] < bounds.max[axis])) {
                return Err(ConfigError::InvertedBounds);
            }
        }
        Ok(())
    }
}

/// A scenario that must not be simulated.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("scenario has no bodies")]
    NoBodies,

    #[error("body {index} has non-positive mass {mass}")]
    NonPositiveMass { index: usize, mass: f64 },

    #[error("body {index} has non-positive radius {radius}")]
    NonPositiveRadius { index: usize, radius: f64 },

    #[error("body {index} has a non-finite {field}")]
    NonFiniteState { index: usize, field: &'static str },

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("{0} must be at least 1")]
    ZeroCount(&'static str),

    #[error("{0} must be finite")]
    NonFiniteVector(&'static str),

    #[error("bounds minimum must be below maximum on every axis")]
    InvertedBounds,
}
