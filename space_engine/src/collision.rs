//! Body-body collision response and world boundary bounces

use crate::body::Body;
use crate::config::Bounds;
use crate::vector::Vector;

/// Separations below this use the fallback normal.
const DEGENERATE_SEPARATION: f64 = 1e-3;

/// Parameters of the impulse response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Response {
    pub restitution: f64,
    pub damping: f64,
}

/// Whether the two spheres touch or overlap.
pub fn check_collision<V: Vector>(a: &Body<V>, b: &Body<V>) -> bool {
    (b.position - a.position).length() <= a.radius + b.radius
}

/// Pushes overlapping bodies apart and exchanges an impulse along the
/// contact normal.
///
/// Returns `true` if the bodies overlapped and were corrected.
pub fn resolve_collision<V: Vector>(a: &mut Body<V>, b: &mut Body<V>, response: Response) -> bool {
    let delta = b.position - a.position;
    let dist = delta.length();
    let overlap = a.radius + b.radius - dist;

    if overlap <= 0.0 {
        return false;
    }

    let normal = if dist > DEGENERATE_SEPARATION {
        delta / dist
    } else {
        V::X
    };

    let separation = normal * overlap;
    match (a.fixed, b.fixed) {
        (false, false) => {
            let total_mass = a.mass + b.mass;
            a.position -= separation * (b.mass / total_mass);
            b.position += separation * (a.mass / total_mass);
        }
        (true, false) => b.position += separation,
        (false, true) => a.position -= separation,
        (true, true) => {}
    }

    let vel_along_normal = (b.velocity - a.velocity).dot(normal);
    if vel_along_normal >= 0.0 {
        return true;
    }

    let inv_mass_a = if a.fixed { 0.0 } else { 1.0 / a.mass };
    let inv_mass_b = if b.fixed { 0.0 } else { 1.0 / b.mass };
    let inv_mass_sum = inv_mass_a + inv_mass_b;
    if inv_mass_sum == 0.0 {
        return true;
    }

    let j = -(1.0 + response.restitution) * vel_along_normal / inv_mass_sum;
    let impulse = normal * j;

    if !a.fixed {
        a.velocity -= impulse * inv_mass_a;
        a.velocity *= response.damping;
    }
    if !b.fixed {
        b.velocity += impulse * inv_mass_b;
        b.velocity *= response.damping;
    }

    true
}

/// Keeps a body inside the box, reflecting and damping the velocity on every
/// axis where it crossed a wall.
///
/// Returns `true` if any wall was hit.
pub fn resolve_boundary<V: Vector>(body: &mut Body<V>, bounds: &Bounds<V>) -> bool {
    if body.fixed {
        return false;
    }

    let mut hit = false;
    for axis in 0..V::DIM {
        let low = bounds.min[axis] + body.radius;
        let high = bounds.max[axis] - body.radius;

        if body.position[axis] < low {
            body.position[axis] = low;
            body.velocity[axis] *= -bounds.restitution;
            hit = true;
        } else if body.position[axis] > high {
            body.position[axis] = high;
            body.velocity[axis] *= -bounds.restitution;
            hit = true;
        }
    }
    hit
}

/// Borrows two distinct elements of a slice mutably.
pub(crate) fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert!(i < j);
    let (head, tail) = items.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::{DVec2, DVec3};

    const UNDAMPED: Response = Response {
        restitution: 0.8,
        damping: 1.0,
    };

    #[test]
    fn test_touching_counts_as_collision() {
        let a = Body::new(DVec3::ZERO, DVec3::ZERO, 1.0, 0.5);
        let b = Body::new(DVec3::new(1.0, 0.0, 0.0), DVec3::ZERO, 1.0, 0.5);
        assert!(check_collision(&a, &b));

        let c = Body::new(DVec3::new(1.01, 0.0, 0.0), DVec3::ZERO, 1.0, 0.5);
        assert!(!check_collision(&a, &c));
    }

    #[test]
    fn test_equal_masses_split_overlap() {
        let mut a = Body::new(DVec3::ZERO, DVec3::ZERO, 2.0, 1.0);
        let mut b = Body::new(DVec3::new(1.5, 0.0, 0.0), DVec3::ZERO, 2.0, 1.0);

        assert!(resolve_collision(&mut a, &mut b, UNDAMPED));

        assert_relative_eq!(a.position.x, -0.25);
        assert_relative_eq!(b.position.x, 1.75);
        assert_relative_eq!((b.position - a.position).length(), 2.0);
    }

    #[test]
    fn test_heavier_body_moves_less() {
        let mut light = Body::new(DVec2::ZERO, DVec2::ZERO, 1.0, 1.0);
        let mut heavy = Body::new(DVec2::new(1.0, 0.0), DVec2::ZERO, 3.0, 1.0);

        resolve_collision(&mut light, &mut heavy, UNDAMPED);

        assert_relative_eq!(light.position.x, -0.75);
        assert_relative_eq!(heavy.position.x, 1.25);
    }

    #[test]
    fn test_fixed_body_absorbs_no_correction() {
        let mut sun = Body::anchored(DVec3::ZERO, 5000.0, 1.5);
        let mut rock = Body::new(DVec3::new(1.0, 0.0, 0.0), DVec3::new(-1.0, 0.0, 0.0), 1.0, 0.1);

        resolve_collision(&mut sun, &mut rock, UNDAMPED);

        assert_eq!(sun.position, DVec3::ZERO);
        assert_eq!(sun.velocity, DVec3::ZERO);
        assert_relative_eq!(rock.position.x, 1.6);
        assert_relative_eq!(rock.velocity.x, 0.8);
    }

    #[test]
    fn test_restitution_scales_separation_speed() {
        let v = 4.0;
        let mut a = Body::new(DVec3::ZERO, DVec3::new(v / 2.0, 0.0, 0.0), 1.0, 1.0);
        let mut b = Body::new(DVec3::new(1.9, 0.0, 0.0), DVec3::new(-v / 2.0, 0.0, 0.0), 1.0, 1.0);

        resolve_collision(&mut a, &mut b, UNDAMPED);

        let separating = (b.velocity - a.velocity).x;
        assert_relative_eq!(separating, 0.8 * v, epsilon = 1e-12);
    }

    #[test]
    fn test_separating_bodies_keep_velocity() {
        let mut a = Body::new(DVec3::ZERO, DVec3::new(-1.0, 0.0, 0.0), 1.0, 1.0);
        let mut b = Body::new(DVec3::new(1.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0), 1.0, 1.0);

        assert!(resolve_collision(&mut a, &mut b, UNDAMPED));
        assert_eq!(a.velocity.x, -1.0);
        assert_eq!(b.velocity.x, 1.0);
    }

    #[test]
    fn test_coincident_centers_use_fallback_axis() {
        let mut a = Body::new(DVec3::ONE, DVec3::ZERO, 1.0, 1.0);
        let mut b = Body::new(DVec3::ONE, DVec3::ZERO, 1.0, 1.0);

        resolve_collision(&mut a, &mut b, UNDAMPED);

        assert_relative_eq!(a.position.x, 0.0);
        assert_relative_eq!(b.position.x, 2.0);
        assert_eq!(a.position.y, 1.0);
        assert!(a.position.is_finite() && b.position.is_finite());
    }

    #[test]
    fn test_damping_applied_after_impulse() {
        let response = Response {
            restitution: 1.0,
            damping: 0.5,
        };
        let mut a = Body::new(DVec2::ZERO, DVec2::new(1.0, 0.0), 1.0, 1.0);
        let mut b = Body::new(DVec2::new(2.0, 0.0), DVec2::new(-1.0, 0.0), 1.0, 1.0);

        assert!(!resolve_collision(&mut a, &mut b, response));

        b.position.x = 1.5;
        assert!(resolve_collision(&mut a, &mut b, response));
        assert_relative_eq!(a.velocity.x, -0.5);
        assert_relative_eq!(b.velocity.x, 0.5);
    }

    #[test]
    fn test_boundary_bounce_clamps_and_reflects() {
        let bounds = Bounds {
            min: DVec2::ZERO,
            max: DVec2::new(800.0, 600.0),
            restitution: 0.95,
        };
        let mut ball = Body::new(DVec2::new(10.0, 590.0), DVec2::new(-100.0, 50.0), 1.0, 15.0);

        assert!(resolve_boundary(&mut ball, &bounds));
        assert_eq!(ball.position, DVec2::new(15.0, 585.0));
        assert_relative_eq!(ball.velocity.x, 95.0);
        assert_relative_eq!(ball.velocity.y, -47.5);

        assert!(!resolve_boundary(&mut ball, &bounds));
    }

    #[test]
    fn test_pair_mut_borrows_both() {
        let mut values = [1, 2, 3];
        let (a, b) = pair_mut(&mut values, 0, 2);
        std::mem::swap(a, b);
        assert_eq!(values, [3, 2, 1]);
    }
}
