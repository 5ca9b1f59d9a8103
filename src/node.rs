//! Point masses advanced by explicit Euler integration.

use crate::config::DampingMode;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable handle to a node inside a [`World`](crate::World).
///
/// Nodes are never removed, so a handle stays valid for the world's lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Handle for the node at `index` of a node slice, for use with the
    /// free [`integrate`](crate::integrate) and
    /// [`resolve_collisions`](crate::resolve_collisions) functions.
    pub fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Index into the world's node array.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Material parameters shared by the nodes of a body.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeMaterial<F: Float> {
    /// Mass, strictly positive.
    pub mass: F,
    /// Velocity retention per step, in [0, 1]. 1.0 = no decay.
    pub damping: F,
    /// Tangential velocity loss on contact, >= 0.
    pub friction: F,
    /// Restitution on contact, in [0, 1]. 0.0 = no bounce.
    pub elasticity: F,
}

impl<F: Float> NodeMaterial<F> {
    pub fn new(mass: F, damping: F, friction: F, elasticity: F) -> Self {
        NodeMaterial { mass, damping, friction, elasticity }
    }

    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_elasticity(mut self, elasticity: F) -> Self {
        self.elasticity = elasticity;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.mass.is_finite() && self.mass > F::zero()) {
            return Err(PhysicsError::InvalidMass);
        }
        if !in_unit_range(self.damping) {
            return Err(PhysicsError::InvalidNodeDamping);
        }
        if !(self.friction.is_finite() && self.friction >= F::zero()) {
            return Err(PhysicsError::InvalidFriction);
        }
        if !in_unit_range(self.elasticity) {
            return Err(PhysicsError::InvalidElasticity);
        }
        Ok(())
    }
}

impl<F: Float> Default for NodeMaterial<F> {
    fn default() -> Self {
        NodeMaterial {
            mass: F::one(),
            damping: F::from_f32(0.999),
            friction: F::from_f32(10.0),
            elasticity: F::from_f32(0.1),
        }
    }
}

fn in_unit_range<F: Float>(v: F) -> bool {
    v >= F::zero() && v <= F::one()
}

/// A point mass with explicit velocity.
///
/// Material fields are private so a constructed node always satisfies its
/// invariants; position and velocity are free for callers to read and set.
#[derive(Clone, Debug)]
pub struct Node<V: Vec> {
    pub position: V,
    pub velocity: V,
    force: V,
    mass: V::Scalar,
    inv_mass: V::Scalar,
    damping: V::Scalar,
    friction: V::Scalar,
    elasticity: V::Scalar,
    pinned: bool,
}

impl<V: Vec> Node<V> {
    pub fn new(position: V, material: &NodeMaterial<V::Scalar>) -> Result<Self, PhysicsError> {
        material.validate()?;
        Ok(Node {
            position,
            velocity: V::zero(),
            force: V::zero(),
            mass: material.mass,
            inv_mass: V::Scalar::one() / material.mass,
            damping: material.damping,
            friction: material.friction,
            elasticity: material.elasticity,
            pinned: false,
        })
    }

    /// An immovable node: infinite mass, never integrated, ignored by colliders.
    pub fn pinned(position: V) -> Self {
        Node {
            position,
            velocity: V::zero(),
            force: V::zero(),
            mass: V::Scalar::zero(),
            inv_mass: V::Scalar::zero(),
            damping: V::Scalar::one(),
            friction: V::Scalar::zero(),
            elasticity: V::Scalar::zero(),
            pinned: true,
        }
    }

    pub fn with_velocity(mut self, velocity: V) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn apply_force(&mut self, force: V) {
        if !self.pinned {
            self.force = self.force + force;
        }
    }

    /// Accumulate a mass-proportional force, e.g. gravity.
    pub fn apply_acceleration(&mut self, accel: V) {
        if !self.pinned {
            self.force = self.force + accel.scale(self.mass);
        }
    }

    /// Advance by one explicit Euler step and clear the force accumulator.
    ///
    /// Velocity is updated first and then used for the position update.
    /// With `dt == 0` the position is unchanged but damping still applies.
    pub fn integrate(&mut self, dt: V::Scalar, mode: DampingMode<V::Scalar>) {
        if self.pinned {
            self.force = V::zero();
            return;
        }
        let accel = self.force.scale(self.inv_mass);
        let retention = mode.factor(self.damping, dt);
        self.velocity = (self.velocity + accel.scale(dt)).scale(retention);
        self.position = self.position + self.velocity.scale(dt);
        self.force = V::zero();
    }

    /// Force accumulated since the last integration.
    pub fn force(&self) -> V { self.force }
    /// Mass; zero for a pinned node.
    pub fn mass(&self) -> V::Scalar { self.mass }
    /// `1 / mass`, or zero for a pinned node.
    pub fn inv_mass(&self) -> V::Scalar { self.inv_mass }
    /// Per-step velocity retention.
    pub fn damping(&self) -> V::Scalar { self.damping }
    /// Tangential velocity loss on contact.
    pub fn friction(&self) -> V::Scalar { self.friction }
    /// Restitution on contact.
    pub fn elasticity(&self) -> V::Scalar { self.elasticity }
    /// Whether the node is fixed in place.
    pub fn is_pinned(&self) -> bool { self.pinned }

    pub fn kinetic_energy(&self) -> V::Scalar {
        V::Scalar::half() * self.mass * self.velocity.length_sq()
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}
