//! Canonical starting configurations
//!
//! Every constructor is deterministic: calling it twice yields identical
//! bodies, which is what `Simulation::reset` relies on.

use glam::{DVec2, DVec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

use crate::body::Body;
use crate::config::{ForceClamp, SimConfig};
use crate::vector::Vector;

/// Frame rate the 2D box scenarios were tuned at; their per-frame constants
/// are converted to per-second units with it.
const TUNED_FPS: f64 = 60.0;

/// Meters in one astronomical unit.
pub const AU_METERS: f64 = 149_597_870_700.0;

/// Gravitational constant in AU³·kg⁻¹·s⁻².
pub const G_AU_KG_S: f64 = 1.993560809749174e-44;

/// Seed for the asteroid belt so resets rebuild the same rocks.
const BELT_SEED: u64 = 0x5EED_0B17;

/// A named body set plus the parameters to simulate it with.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario<V> {
    pub name: &'static str,
    pub config: SimConfig<V>,
    pub bodies: Vec<Body<V>>,
    /// Simulated seconds per real second a driver should start with
    pub time_scale: f64,
}

impl<V: Vector> Scenario<V> {
    pub fn new(name: &'static str, config: SimConfig<V>, bodies: Vec<Body<V>>) -> Self {
        Self {
            name,
            config,
            bodies,
            time_scale: 1.0,
        }
    }

    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale;
        self
    }
}

/// Converts km/s to AU/s.
pub fn kmps_to_au_per_s(kmps: f64) -> f64 {
    kmps * 1000.0 / AU_METERS
}

/// Circular orbit speed around a central mass.
pub fn circular_speed(g: f64, central_mass: f64, distance: f64) -> f64 {
    (g * central_mass / distance).sqrt()
}

/// Three balls falling under a uniform field inside an 800x600 box.
pub fn bouncing_balls() -> Scenario<DVec2> {
    let per_frame = TUNED_FPS;
    let config = SimConfig::default()
        .with_g(0.0)
        .with_uniform_field(DVec2::new(0.0, -0.2 * per_frame * per_frame))
        .with_bounds(DVec2::ZERO, DVec2::new(800.0, 600.0), 0.95)
        .with_max_timestep(1.0 / 240.0)
        .with_trails(300, 2);

    let bodies = [
        (DVec2::new(200.0, 500.0), DVec2::new(2.0, 0.0)),
        (DVec2::new(400.0, 550.0), DVec2::new(-3.0, 0.0)),
        (DVec2::new(600.0, 520.0), DVec2::new(1.5, 0.0)),
    ]
    .into_iter()
    .map(|(position, velocity)| Body::new(position, velocity * per_frame, 1.0, 15.0))
    .collect();

    Scenario::new("bouncing-balls", config, bodies)
}

/// Five equal balls pulling on each other inside an 800x600 box.
pub fn orbiting_balls() -> Scenario<DVec2> {
    let per_frame = TUNED_FPS;
    let config = SimConfig::default()
        .with_g(5.0 * per_frame * per_frame)
        .with_force_clamp(ForceClamp::Epsilon(1.0))
        .with_contact_cutoff(true)
        .with_bounds(DVec2::ZERO, DVec2::new(800.0, 600.0), 0.95)
        .with_max_timestep(1.0 / 240.0)
        .with_trails(500, 2);

    let balls = [
        (DVec2::new(100.0, 300.0), DVec2::new(0.5, -0.2), [1.0, 0.0, 0.0, 1.0], "red"),
        (DVec2::new(250.0, 450.0), DVec2::new(-0.3, 0.1), [0.0, 1.0, 0.0, 1.0], "green"),
        (DVec2::new(400.0, 150.0), DVec2::new(0.2, 0.4), [0.0, 0.0, 1.0, 1.0], "blue"),
        (DVec2::new(550.0, 400.0), DVec2::new(-0.4, -0.3), [1.0, 1.0, 0.0, 1.0], "yellow"),
        (DVec2::new(700.0, 250.0), DVec2::new(-0.2, 0.3), [1.0, 0.0, 1.0, 1.0], "magenta"),
    ];

    let bodies = balls
        .into_iter()
        .map(|(position, velocity, color, name)| {
            Body::new(position, velocity * per_frame, 100.0, 15.0)
                .with_color(color)
                .with_name(name)
        })
        .collect();

    Scenario::new("orbiting-balls", config, bodies)
}

/// Toy solar system around a fixed sun, with a moon and an asteroid belt.
pub fn solar_system() -> Scenario<DVec3> {
    let g = 6.674;
    let sun_mass = 5000.0;
    let config = SimConfig::default()
        .with_g(g)
        .with_force_clamp(ForceClamp::RadiusSum { factor: 2.0 })
        .with_restitution(0.8)
        .with_collision_damping(0.98)
        .with_max_timestep(0.001)
        .with_trails(1000, 3);

    let mut bodies = vec![Body::anchored(DVec3::ZERO, sun_mass, 1.5)
        .with_name("Sun")
        .with_color([1.0, 0.9, 0.3, 1.0])
        .with_trail_length(0)];

    // (distance, speed factor, extra vertical speed, mass, radius, color)
    let planets = [
        (5.0, 0.95, 0.0, 10.0, 0.3, [0.8, 0.4, 0.2, 1.0]),
        (8.0, 1.0, 0.0, 15.0, 0.4, [0.2, 0.5, 1.0, 1.0]),
        (12.0, 1.0, 0.0, 20.0, 0.5, [1.0, 0.3, 0.3, 1.0]),
        (16.0, 0.92, 0.1, 18.0, 0.45, [0.5, 0.3, 0.8, 1.0]),
    ];

    for (i, (distance, factor, lift, mass, radius, color)) in planets.into_iter().enumerate() {
        let speed = circular_speed(g, sun_mass, distance) * factor;
        bodies.push(
            Body::new(
                DVec3::new(distance, 0.0, 0.0),
                DVec3::new(0.0, lift, speed),
                mass,
                radius,
            )
            .with_color(color)
            .with_name(&format!("Planet {}", i + 1)),
        );
    }

    // Moon riding on the second planet
    let host_distance = 8.0;
    let host_speed = circular_speed(g, sun_mass, host_distance);
    let moon_orbit = 1.2;
    let moon_speed = circular_speed(g, 15.0, moon_orbit);
    bodies.push(
        Body::new(
            DVec3::new(host_distance + moon_orbit, 0.0, 0.0),
            DVec3::new(0.0, 0.0, host_speed + moon_speed),
            2.0,
            0.15,
        )
        .with_color([0.8, 0.8, 0.8, 1.0])
        .with_name("Moon"),
    );

    let mut rng = StdRng::seed_from_u64(BELT_SEED);
    for i in 0..8 {
        let angle = i as f64 * TAU / 8.0;
        let distance = 9.5 + 0.3 * (rng.gen::<f64>() - 0.5);
        let speed = circular_speed(g, sun_mass, distance) * (0.98 + 0.04 * rng.gen::<f64>());
        let mass = 0.5 + rng.gen::<f64>();
        let color = [
            0.5 + 0.3 * rng.gen::<f32>(),
            0.4 + 0.3 * rng.gen::<f32>(),
            0.3 + 0.3 * rng.gen::<f32>(),
            1.0,
        ];
        let radius = 0.05 + 0.05 * rng.gen::<f64>();

        bodies.push(
            Body::new(
                DVec3::new(distance * angle.cos(), 0.0, distance * angle.sin()),
                DVec3::new(-speed * angle.sin(), 0.0, speed * angle.cos()),
                mass,
                radius,
            )
            .with_color(color),
        );
    }

    Scenario::new("solar-system", config, bodies)
}

/// The real solar system in AU, kg and seconds, with visual radii.
pub fn scaled_solar_system() -> Scenario<DVec3> {
    const RADIUS_SCALE: f64 = 0.005;
    const DAY: f64 = 86_400.0;

    let config = SimConfig::default()
        .with_g(G_AU_KG_S)
        .with_force_clamp(ForceClamp::RadiusSum { factor: 1.0 })
        .with_collisions(false)
        .with_max_timestep(DAY / 24.0)
        .with_trails(500, 6);

    let mut bodies = vec![Body::new(DVec3::ZERO, DVec3::ZERO, 1.989e30, 65.0 * RADIUS_SCALE)
        .with_name("Sun")
        .with_color([1.0, 0.9, 0.3, 1.0])];

    // (name, distance AU, mean orbital speed km/s, mass kg, relative radius, color)
    let planets = [
        ("Mercury", 0.387, 47.36, 3.3011e23, 0.383, [0.7, 0.4, 0.2, 1.0]),
        ("Venus", 0.723, 35.02, 4.8675e24, 0.949, [0.9, 0.7, 0.4, 1.0]),
        ("Earth", 1.0, 29.78, 5.97237e24, 1.0, [0.2, 0.4, 0.7, 1.0]),
        ("Mars", 1.524, 24.07, 6.4171e23, 0.532, [0.9, 0.5, 0.3, 1.0]),
        ("Jupiter", 5.203, 13.07, 1.8982e27, 11.21, [1.0, 0.5, 0.2, 1.0]),
        ("Saturn", 9.537, 9.69, 5.6834e26, 9.45, [0.8, 0.7, 0.6, 1.0]),
        ("Uranus", 19.191, 6.81, 8.6810e25, 4.01, [0.6, 0.8, 0.9, 1.0]),
        ("Neptune", 30.07, 5.43, 1.02413e26, 3.88, [0.3, 0.5, 0.9, 1.0]),
    ];

    for (name, distance, speed, mass, radius, color) in planets {
        bodies.push(
            Body::new(
                DVec3::new(distance, 0.0, 0.0),
                DVec3::new(0.0, kmps_to_au_per_s(speed), 0.0),
                mass,
                radius * RADIUS_SCALE,
            )
            .with_name(name)
            .with_color(color),
        );
    }

    Scenario::new("scaled-solar-system", config, bodies).with_time_scale(10.0 * DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_presets_validate() {
        assert_eq!(bouncing_balls().config.validate(), Ok(()));
        assert_eq!(orbiting_balls().config.validate(), Ok(()));
        assert_eq!(solar_system().config.validate(), Ok(()));
        assert_eq!(scaled_solar_system().config.validate(), Ok(()));
    }

    #[test]
    fn test_presets_are_deterministic() {
        assert_eq!(solar_system(), solar_system());
        assert_eq!(orbiting_balls(), orbiting_balls());
    }

    #[test]
    fn test_solar_system_layout() {
        let scenario = solar_system();
        assert_eq!(scenario.bodies.len(), 1 + 4 + 1 + 8);
        assert!(scenario.bodies[0].fixed);
        assert!(scenario.bodies.iter().skip(1).all(|b| !b.fixed));
        assert_eq!(scenario.bodies[5].name.as_deref(), Some("Moon"));
    }

    #[test]
    fn test_earth_speed_matches_circular_orbit() {
        let scenario = scaled_solar_system();
        let earth = &scenario.bodies[3];
        assert_eq!(earth.name.as_deref(), Some("Earth"));

        let expected = circular_speed(G_AU_KG_S, 1.989e30, 1.0);
        assert_relative_eq!(earth.velocity.y, expected, max_relative = 0.01);
    }

    #[test]
    fn test_orbiting_balls_have_distinct_colors() {
        let scenario = orbiting_balls();
        for (i, a) in scenario.bodies.iter().enumerate() {
            for b in scenario.bodies.iter().skip(i + 1) {
                assert_ne!(a.color, b.color);
            }
        }
    }
}
