//! Cross-braced box bodies built from eight corner nodes.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::node::{NodeId, NodeMaterial};
use crate::spring::SpringParams;
use crate::vec::{Vec, Vec3};
use crate::world::World;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which springs brace a cuboid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bracing {
    /// 12 edges and 2 diagonals per face: 24 springs.
    #[default]
    Faces,
    /// `Faces` plus the 4 space diagonals: 28 springs.
    Full,
}

/// Configuration for creating a cuboid.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CuboidConfig<F: Float> {
    pub stiffness: F,
    pub damping: F,
    pub material: NodeMaterial<F>,
    pub bracing: Bracing,
}

impl<F: Float> Default for CuboidConfig<F> {
    fn default() -> Self {
        CuboidConfig {
            stiffness: F::from_f32(1000.0),
            damping: F::from_f32(0.95),
            material: NodeMaterial::default(),
            bracing: Bracing::Faces,
        }
    }
}

/// Handles to the corner nodes of a box body added to a [`World`].
///
/// Corners are ordered bottom face first (`-y`), counter-clockwise seen
/// from above starting at `(-x, -z)`, then the top face in the same order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cuboid {
    corners: [NodeId; 8],
    springs: usize,
}

// Corner sign pattern, index matches `Cuboid::corners`.
const CORNERS: [(f32, f32, f32); 8] = [
    (-1.0, -1.0, -1.0),
    (1.0, -1.0, -1.0),
    (1.0, -1.0, 1.0),
    (-1.0, -1.0, 1.0),
    (-1.0, 1.0, -1.0),
    (1.0, 1.0, -1.0),
    (1.0, 1.0, 1.0),
    (-1.0, 1.0, 1.0),
];

// Which extents contribute to a spring's rest length.
#[derive(Copy, Clone)]
enum Span {
    X,
    Y,
    Z,
    XY,
    XZ,
    YZ,
    XYZ,
}

const EDGES: [(usize, usize, Span); 12] = [
    (0, 1, Span::X), (1, 2, Span::Z), (2, 3, Span::X), (3, 0, Span::Z),
    (4, 5, Span::X), (5, 6, Span::Z), (6, 7, Span::X), (7, 4, Span::Z),
    (0, 4, Span::Y), (1, 5, Span::Y), (2, 6, Span::Y), (3, 7, Span::Y),
];

const FACE_DIAGONALS: [(usize, usize, Span); 12] = [
    (0, 2, Span::XZ), (1, 3, Span::XZ), (4, 6, Span::XZ), (5, 7, Span::XZ),
    (0, 5, Span::XY), (1, 4, Span::XY), (2, 7, Span::XY), (3, 6, Span::XY),
    (0, 7, Span::YZ), (1, 6, Span::YZ), (2, 5, Span::YZ), (3, 4, Span::YZ),
];

const SPACE_DIAGONALS: [(usize, usize, Span); 4] = [
    (0, 6, Span::XYZ), (1, 7, Span::XYZ), (2, 4, Span::XYZ), (3, 5, Span::XYZ),
];

impl Span {
    fn length<F: Float>(self, size: Vec3<F>) -> F {
        let (x, y, z) = (size.x * size.x, size.y * size.y, size.z * size.z);
        match self {
            Span::X => size.x,
            Span::Y => size.y,
            Span::Z => size.z,
            Span::XY => (x + y).sqrt(),
            Span::XZ => (x + z).sqrt(),
            Span::YZ => (y + z).sqrt(),
            Span::XYZ => (x + y + z).sqrt(),
        }
    }
}

impl Cuboid {
    /// Add a box of full extents `size` centered on `center` to `world`.
    ///
    /// Everything is validated before the world is touched, so on error the
    /// world is unchanged.
    pub fn build<F: Float>(
        world: &mut World<Vec3<F>>,
        center: Vec3<F>,
        size: Vec3<F>,
        config: &CuboidConfig<F>,
    ) -> Result<Self, PhysicsError> {
        for axis in 0..3 {
            let s = size.axis(axis);
            if !(s.is_finite() && s > F::zero()) {
                return Err(PhysicsError::InvalidSize);
            }
        }
        config.material.validate()?;
        SpringParams::new(config.stiffness, config.damping, F::zero()).validate()?;

        let half = size.scale(F::half());
        let mut corners = [NodeId(0); 8];
        for (slot, &(sx, sy, sz)) in corners.iter_mut().zip(CORNERS.iter()) {
            let offset = Vec3::new(
                half.x * F::from_f32(sx),
                half.y * F::from_f32(sy),
                half.z * F::from_f32(sz),
            );
            *slot = world.spawn(center + offset, &config.material)?;
        }

        let space: &[(usize, usize, Span)] = match config.bracing {
            Bracing::Faces => &[],
            Bracing::Full => &SPACE_DIAGONALS,
        };
        let mut springs = 0;
        for &(a, b, span) in EDGES.iter().chain(FACE_DIAGONALS.iter()).chain(space.iter()) {
            let params = SpringParams::new(config.stiffness, config.damping, span.length(size));
            world.add_spring(corners[a], corners[b], &params)?;
            springs += 1;
        }

        log::debug!(
            "cuboid of {} nodes and {} springs at {:?}",
            corners.len(),
            springs,
            center
        );
        Ok(Cuboid { corners, springs })
    }

    pub fn corners(&self) -> [NodeId; 8] { self.corners }
    pub fn spring_count(&self) -> usize { self.springs }

    /// Mean position of the corners.
    pub fn center<F: Float>(&self, world: &World<Vec3<F>>) -> Vec3<F> {
        let sum = self
            .corners
            .iter()
            .fold(Vec3::zero(), |acc, &id| acc + world.node(id).position);
        sum.scale(F::one() / F::from_f32(8.0))
    }

    /// Rotate the body about the world origin by Euler angles in degrees.
    ///
    /// The rotation is `Rx(pitch) * Ry(yaw) * Rz(roll)`, so roll acts first.
    /// A body away from the origin moves as well as turns; use
    /// [`rotate_about`](Self::rotate_about) with [`center`](Self::center) to
    /// turn it in place.
    pub fn rotate<F: Float>(&self, world: &mut World<Vec3<F>>, pitch: F, yaw: F, roll: F) {
        self.rotate_about(world, Vec3::zero(), pitch, yaw, roll);
    }

    /// Like [`rotate`](Self::rotate), about `pivot`. Velocities rotate with
    /// the body.
    pub fn rotate_about<F: Float>(
        &self,
        world: &mut World<Vec3<F>>,
        pivot: Vec3<F>,
        pitch: F,
        yaw: F,
        roll: F,
    ) {
        let (p, y, r) = (pitch.to_radians(), yaw.to_radians(), roll.to_radians());
        let turn = |v: Vec3<F>| v.rotate_z(r).rotate_y(y).rotate_x(p);

        for &id in self.corners.iter() {
            let node = world.node_mut(id);
            node.position = pivot + turn(node.position - pivot);
            node.velocity = turn(node.velocity);
        }
    }
}
