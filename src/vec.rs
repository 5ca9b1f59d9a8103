//! Vector types and traits for physics calculations.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trait for vector types used in physics calculations.
///
/// Abstracts over dimensionality (1D, 2D, 3D) so all physics code
/// is generic over the vector type. Per-axis access lets axis-aligned
/// colliders work in any dimension.
pub trait Vec:
    Copy
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + core::fmt::Debug
{
    /// The scalar (float) type for this vector.
    type Scalar: Float;

    /// Number of axes.
    const DIM: usize;

    /// Zero vector.
    fn zero() -> Self;

    /// Vector with all components set to the same value.
    fn splat(value: Self::Scalar) -> Self;

    /// Component along `axis`. Panics if `axis >= DIM`.
    fn axis(self, axis: usize) -> Self::Scalar;

    /// Overwrite the component along `axis`. Panics if `axis >= DIM`.
    fn set_axis(&mut self, axis: usize, value: Self::Scalar);

    /// Dot product.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Scale all components by a scalar.
    fn scale(self, s: Self::Scalar) -> Self;

    /// Unit vector along `axis`.
    fn unit(axis: usize) -> Self {
        let mut v = Self::zero();
        v.set_axis(axis, Self::Scalar::one());
        v
    }

    /// Squared length (avoids sqrt).
    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    /// Length (magnitude).
    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Distance between two points.
    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).length()
    }

    /// True when no component is NaN or infinite.
    fn is_finite(self) -> bool {
        (0..Self::DIM).all(|axis| self.axis(axis).is_finite())
    }
}

// --------------------------------------------------------------------------
// Scalar<F>: 1D wrapper
// --------------------------------------------------------------------------

/// 1D "vector": a scalar value implementing the Vec trait.
///
/// Useful for 1D mass-spring chains and bouncing-ball style tests.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scalar<F: Float>(pub F);

impl<F: Float> Add for Scalar<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Scalar(self.0 + rhs.0) }
}

impl<F: Float> Sub for Scalar<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Scalar(self.0 - rhs.0) }
}

impl<F: Float> Neg for Scalar<F> {
    type Output = Self;
    fn neg(self) -> Self { Scalar(-self.0) }
}

impl<F: Float> Vec for Scalar<F> {
    type Scalar = F;
    const DIM: usize = 1;
    fn zero() -> Self { Scalar(F::zero()) }
    fn splat(value: F) -> Self { Scalar(value) }
    fn axis(self, axis: usize) -> F {
        match axis {
            0 => self.0,
            _ => panic!("axis {} out of range for Scalar", axis),
        }
    }
    fn set_axis(&mut self, axis: usize, value: F) {
        match axis {
            0 => self.0 = value,
            _ => panic!("axis {} out of range for Scalar", axis),
        }
    }
    fn dot(self, other: Self) -> F { self.0 * other.0 }
    fn scale(self, s: F) -> Self { Scalar(self.0 * s) }
}

// --------------------------------------------------------------------------
// Vec2<F>: 2D vector
// --------------------------------------------------------------------------

/// 2D vector for planar soft bodies.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Vec for Vec2<F> {
    type Scalar = F;
    const DIM: usize = 2;
    fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }
    fn splat(value: F) -> Self { Vec2 { x: value, y: value } }
    fn axis(self, axis: usize) -> F {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => panic!("axis {} out of range for Vec2", axis),
        }
    }
    fn set_axis(&mut self, axis: usize, value: F) {
        match axis {
            0 => self.x = value,
            1 => self.y = value,
            _ => panic!("axis {} out of range for Vec2", axis),
        }
    }
    fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }
    fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }
}

// --------------------------------------------------------------------------
// Vec3<F>: 3D vector
// --------------------------------------------------------------------------

/// 3D vector, the primary space for soft bodies and box colliders.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    /// Rotate about the X axis by `angle` radians.
    pub fn rotate_x(self, angle: F) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        Vec3 { x: self.x, y: self.y * c - self.z * s, z: self.y * s + self.z * c }
    }

    /// Rotate about the Y axis by `angle` radians.
    pub fn rotate_y(self, angle: F) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        Vec3 { x: self.x * c + self.z * s, y: self.y, z: -self.x * s + self.z * c }
    }

    /// Rotate about the Z axis by `angle` radians.
    pub fn rotate_z(self, angle: F) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        Vec3 { x: self.x * c - self.y * s, y: self.x * s + self.y * c, z: self.z }
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> Vec for Vec3<F> {
    type Scalar = F;
    const DIM: usize = 3;
    fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }
    fn splat(value: F) -> Self { Vec3 { x: value, y: value, z: value } }
    fn axis(self, axis: usize) -> F {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("axis {} out of range for Vec3", axis),
        }
    }
    fn set_axis(&mut self, axis: usize, value: F) {
        match axis {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => panic!("axis {} out of range for Vec3", axis),
        }
    }
    fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }
}
