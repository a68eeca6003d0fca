//! Vector abstraction so the same physics runs in 2D and 3D

use glam::{DVec2, DVec3};
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A double precision vector the simulation can integrate.
///
/// Implemented for [`DVec2`] and [`DVec3`]. Components are `f64` because the
/// scaled solar system uses a gravitational constant (~2e-44) that underflows
/// single precision.
pub trait Vector:
    Copy
    + Debug
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign<f64>
    + Index<usize, Output = f64>
    + IndexMut<usize>
{
    /// Number of spatial dimensions.
    const DIM: usize;
    const ZERO: Self;
    /// Unit vector along the first axis, used as a fallback direction.
    const X: Self;

    fn dot(self, other: Self) -> f64;

    fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    fn length_squared(self) -> f64 {
        self.dot(self)
    }

    fn is_finite(self) -> bool;

    /// Position padded to three components for renderers.
    fn to_array3(self) -> [f64; 3];
}

impl Vector for DVec2 {
    const DIM: usize = 2;
    const ZERO: Self = DVec2::ZERO;
    const X: Self = DVec2::X;

    fn dot(self, other: Self) -> f64 {
        DVec2::dot(self, other)
    }

    fn is_finite(self) -> bool {
        DVec2::is_finite(self)
    }

    fn to_array3(self) -> [f64; 3] {
        [self.x, self.y, 0.0]
    }
}

impl Vector for DVec3 {
    const DIM: usize = 3;
    const ZERO: Self = DVec3::ZERO;
    const X: Self = DVec3::X;

    fn dot(self, other: Self) -> f64 {
        DVec3::dot(self, other)
    }

    fn is_finite(self) -> bool {
        DVec3::is_finite(self)
    }

    fn to_array3(self) -> [f64; 3] {
        self.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length_of<V: Vector>(v: V) -> f64 {
        Vector::length(v)
    }

    #[test]
    fn test_length_matches_glam() {
        assert_eq!(length_of(DVec2::new(3.0, 4.0)), 5.0);
        assert_eq!(length_of(DVec3::new(2.0, 3.0, 6.0)), 7.0);
    }

    #[test]
    fn test_planar_vectors_pad_to_three_components() {
        assert_eq!(DVec2::new(1.0, 2.0).to_array3(), [1.0, 2.0, 0.0]);
        assert_eq!(<DVec2 as Vector>::DIM, 2);
        assert_eq!(<DVec3 as Vector>::DIM, 3);
    }
}
