//! N-body simulation state and time stepping

use log::{debug, info, warn};

use crate::body::{Body, BodyId};
use crate::collision::{self, Response};
use crate::config::{ConfigError, SimConfig};
use crate::forces;
use crate::scenarios::Scenario;
use crate::vector::Vector;

/// Snapshot of one body for console diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyStats {
    pub id: BodyId,
    pub speed: f64,
    /// Distance from the origin
    pub distance: f64,
}

/// The physics simulation state
#[derive(Debug, Clone)]
pub struct Simulation<V> {
    scenario: Scenario<V>,
    initial: Vec<Body<V>>,
    bodies: Vec<Body<V>>,
    substeps: u64,
    elapsed_time: f64,
    collisions: u64,
}

impl<V: Vector> Simulation<V> {
    /// Validates the scenario and builds its starting bodies.
    pub fn new(scenario: Scenario<V>) -> Result<Self, ConfigError> {
        let initial = prepare_bodies(&scenario)?;
        info!(
            "Loaded scenario '{}' with {} bodies",
            scenario.name,
            initial.len()
        );

        Ok(Self {
            bodies: initial.clone(),
            initial,
            scenario,
            substeps: 0,
            elapsed_time: 0.0,
            collisions: 0,
        })
    }

    /// Replaces the running scenario. On error the current state is kept.
    pub fn load(&mut self, scenario: Scenario<V>) -> Result<(), ConfigError> {
        *self = Self::new(scenario)?;
        Ok(())
    }

    /// Restores the canonical starting configuration of the active scenario.
    pub fn reset(&mut self) {
        self.bodies = self.initial.clone();
        self.substeps = 0;
        self.elapsed_time = 0.0;
        self.collisions = 0;
        info!("Simulation reset");
    }

    pub fn bodies(&self) -> &[Body<V>] {
        &self.bodies
    }

    pub fn config(&self) -> &SimConfig<V> {
        &self.scenario.config
    }

    pub fn scenario_name(&self) -> &str {
        self.scenario.name
    }

    /// Simulated time since construction or the last reset.
    pub fn elapsed(&self) -> f64 {
        self.elapsed_time
    }

    pub fn substep_count(&self) -> u64 {
        self.substeps
    }

    pub fn collision_count(&self) -> u64 {
        self.collisions
    }

    /// Advances the simulation by up to `dt`.
    ///
    /// `dt` is split into equal sub-steps no longer than the configured
    /// maximum timestep, each running a full force, integration, and
    /// collision cycle. Nothing changes while paused.
    pub fn step(&mut self, dt: f64, paused: bool) {
        if paused || !(dt > 0.0 && dt.is_finite()) || self.bodies.is_empty() {
            return;
        }

        let max_timestep = self.scenario.config.max_timestep;
        let max_substeps = self.scenario.config.max_substeps;
        let needed = (dt / max_timestep).ceil().max(1.0);

        let (count, sub_dt) = if needed > max_substeps as f64 {
            warn!(
                "Frame of {:.4}s needs {} sub-steps, capping at {}",
                dt, needed, max_substeps
            );
            (max_substeps, max_timestep)
        } else {
            let count = needed as usize;
            (count, dt / count as f64)
        };

        for _ in 0..count {
            self.substep(sub_dt);
        }
    }

    /// One accumulate, integrate, collide, record cycle.
    ///
    /// Walls are applied after body-body corrections, and trails sample the
    /// settled position.
    fn substep(&mut self, dt: f64) {
        let config = &self.scenario.config;

        forces::accumulate(&mut self.bodies, config);

        for body in self.bodies.iter_mut().filter(|body| !body.fixed) {
            body.velocity += body.acceleration * dt;
            body.position += body.velocity * dt;
        }

        if config.collisions {
            let response = Response {
                restitution: config.restitution,
                damping: config.collision_damping,
            };
            let n = self.bodies.len();
            for i in 0..n {
                for j in (i + 1)..n {
                    let (a, b) = collision::pair_mut(&mut self.bodies, i, j);
                    if collision::check_collision(a, b)
                        && collision::resolve_collision(a, b, response)
                    {
                        self.collisions += 1;
                        debug!("Collision detected between bodies {} and {}", a.id, b.id);
                    }
                }
            }
        }

        if let Some(bounds) = &config.bounds {
            for body in self.bodies.iter_mut() {
                collision::resolve_boundary(body, bounds);
            }
        }

        self.substeps += 1;
        if self.substeps % config.trail_interval == 0 {
            for body in self.bodies.iter_mut().filter(|body| !body.fixed) {
                body.record_trail();
            }
        }

        self.elapsed_time += dt;
    }

    pub fn stats(&self) -> Vec<BodyStats> {
        self.bodies
            .iter()
            .map(|body| BodyStats {
                id: body.id,
                speed: body.speed(),
                distance: body.position.length(),
            })
            .collect()
    }

    pub fn center_of_mass(&self) -> V {
        let mut total_mass = 0.0;
        let mut com = V::ZERO;

        for body in &self.bodies {
            com += body.position * body.mass;
            total_mass += body.mass;
        }

        if total_mass > 0.0 {
            com / total_mass
        } else {
            V::ZERO
        }
    }

    /// Kinetic plus gravitational potential energy.
    pub fn total_energy(&self) -> f64 {
        let kinetic: f64 = self.bodies.iter().map(Body::kinetic_energy).sum();
        kinetic + forces::potential_energy(&self.bodies, &self.scenario.config)
    }
}

fn prepare_bodies<V: Vector>(scenario: &Scenario<V>) -> Result<Vec<Body<V>>, ConfigError> {
    scenario.config.validate()?;
    if scenario.bodies.is_empty() {
        return Err(ConfigError::NoBodies);
    }

    let mut bodies = scenario.bodies.clone();
    for (index, body) in bodies.iter_mut().enumerate() {
        body.validate(index)?;
        body.prepare(index, scenario.config.max_trail_length);
    }
    Ok(bodies)
}
