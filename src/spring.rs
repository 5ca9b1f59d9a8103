//! Damped Hookean springs linking two nodes.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::node::{Node, NodeId};
use crate::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Material parameters of a spring.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpringParams<F: Float> {
    /// Hookean constant, >= 0.
    pub stiffness: F,
    /// Damping along the spring axis, >= 0.
    pub damping: F,
    /// Separation at which the spring exerts no force, >= 0.
    pub rest_length: F,
}

impl<F: Float> SpringParams<F> {
    pub fn new(stiffness: F, damping: F, rest_length: F) -> Self {
        SpringParams { stiffness, damping, rest_length }
    }

    pub fn with_rest_length(mut self, rest_length: F) -> Self {
        self.rest_length = rest_length;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !non_negative(self.stiffness) {
            return Err(PhysicsError::InvalidStiffness);
        }
        if !non_negative(self.damping) {
            return Err(PhysicsError::InvalidSpringDamping);
        }
        if !non_negative(self.rest_length) {
            return Err(PhysicsError::InvalidRestLength);
        }
        Ok(())
    }
}

impl<F: Float> Default for SpringParams<F> {
    fn default() -> Self {
        SpringParams {
            stiffness: F::one(),
            damping: F::from_f32(0.99),
            rest_length: F::one(),
        }
    }
}

fn non_negative<F: Float>(v: F) -> bool {
    v.is_finite() && v >= F::zero()
}

/// A damped spring between two distinct nodes.
///
/// The spring only refers to its endpoints; the node array owns them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    a: NodeId,
    b: NodeId,
    stiffness: F,
    damping: F,
    rest_length: F,
}

impl<F: Float> Spring<F> {
    pub fn new(a: NodeId, b: NodeId, params: &SpringParams<F>) -> Result<Self, PhysicsError> {
        if a == b {
            return Err(PhysicsError::SelfLoop { node: a.index() });
        }
        params.validate()?;
        Ok(Spring {
            a,
            b,
            stiffness: params.stiffness,
            damping: params.damping,
            rest_length: params.rest_length,
        })
    }

    /// Spring whose rest length is the current distance between its endpoints.
    ///
    /// Panics if either handle is out of range for `nodes`.
    /// [`World::connect`](crate::World::connect) checks both handles first
    /// and returns [`PhysicsError::NodeOutOfBounds`] instead.
    pub fn from_nodes<V: Vec<Scalar = F>>(
        a: NodeId,
        b: NodeId,
        nodes: &[Node<V>],
        stiffness: F,
        damping: F,
    ) -> Result<Self, PhysicsError> {
        let rest_length = nodes[a.index()].position.distance(nodes[b.index()].position);
        Self::new(a, b, &SpringParams::new(stiffness, damping, rest_length))
    }

    /// Force this spring exerts on node `a`; node `b` receives the negation.
    ///
    /// Returns `None` when the endpoints coincide, since the spring has no
    /// direction then.
    pub fn force<V: Vec<Scalar = F>>(&self, nodes: &[Node<V>]) -> Option<V> {
        let a = &nodes[self.a.index()];
        let b = &nodes[self.b.index()];

        let delta = b.position - a.position;
        let dist = delta.length();
        if dist.is_near_zero(F::from_f32(1e-10)) {
            return None;
        }
        let dir = delta.scale(F::one() / dist);

        let stretch = self.stiffness * (dist - self.rest_length);
        // Separation speed along the axis; only the axial part is damped.
        let separation_speed = (b.velocity - a.velocity).dot(dir);
        let magnitude = stretch + self.damping * separation_speed;

        Some(dir.scale(magnitude))
    }

    /// Accumulate this spring's force into both endpoints.
    pub fn apply<V: Vec<Scalar = F>>(&self, nodes: &mut [Node<V>]) {
        if let Some(force) = self.force(nodes) {
            nodes[self.a.index()].apply_force(force);
            nodes[self.b.index()].apply_force(-force);
        }
    }

    /// First endpoint; receives [`force`](Self::force) as computed.
    pub fn a(&self) -> NodeId { self.a }
    /// Second endpoint; receives the negated force.
    pub fn b(&self) -> NodeId { self.b }
    /// Hookean constant.
    pub fn stiffness(&self) -> F { self.stiffness }
    /// Damping along the spring axis.
    pub fn damping(&self) -> F { self.damping }
    /// Separation at which the spring exerts no force.
    pub fn rest_length(&self) -> F { self.rest_length }

    /// Current length minus rest length.
    pub fn extension<V: Vec<Scalar = F>>(&self, nodes: &[Node<V>]) -> F {
        nodes[self.a.index()].position.distance(nodes[self.b.index()].position) - self.rest_length
    }
}
