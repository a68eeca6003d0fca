//! Newtonian gravity between bodies

use crate::body::Body;
use crate::config::SimConfig;
use crate::vector::Vector;

/// Gravitational force exerted on `a` by `b`.
///
/// The separation is floored by the configured clamp before dividing, so
/// nearly coincident bodies get a bounded pull. Coincident centers have no
/// direction and contribute nothing; so do touching bodies when the contact
/// cutoff is enabled.
pub fn pairwise_force<V: Vector>(a: &Body<V>, b: &Body<V>, config: &SimConfig<V>) -> V {
    let r = b.position - a.position;
    let distance = r.length();
    if distance == 0.0 {
        return V::ZERO;
    }
    if config.contact_cutoff && distance <= a.radius + b.radius {
        return V::ZERO;
    }

    let clamped = distance.max(config.force_clamp.min_distance(a.radius, b.radius));
    let force_mag = config.g * a.mass * b.mass / (clamped * clamped);

    r / distance * force_mag
}

/// Clears every accumulator, then adds gravity and the uniform field.
///
/// Each unordered pair is visited once and the force is applied to both
/// bodies with opposite signs. Fixed bodies are skipped on the receiving end
/// but still attract others.
pub fn accumulate<V: Vector>(bodies: &mut [Body<V>], config: &SimConfig<V>) {
    for body in bodies.iter_mut() {
        body.acceleration = if body.fixed {
            V::ZERO
        } else {
            config.uniform_field
        };
    }

    if config.g == 0.0 {
        return;
    }

    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let force = pairwise_force(&bodies[i], &bodies[j], config);

            if !bodies[i].fixed {
                let mass = bodies[i].mass;
                bodies[i].acceleration += force / mass;
            }
            if !bodies[j].fixed {
                let mass = bodies[j].mass;
                bodies[j].acceleration -= force / mass;
            }
        }
    }
}

/// Gravitational potential energy of the whole collection, using the same
/// distance clamp as the force law.
pub fn potential_energy<V: Vector>(bodies: &[Body<V>], config: &SimConfig<V>) -> f64 {
    let mut potential = 0.0;

    for (i, body_i) in bodies.iter().enumerate() {
        for body_j in bodies.iter().skip(i + 1) {
            let r = (body_j.position - body_i.position).length();
            let min = config.force_clamp.min_distance(body_i.radius, body_j.radius);
            potential -= config.g * body_i.mass * body_j.mass / r.max(min);
        }
    }

    potential
}
