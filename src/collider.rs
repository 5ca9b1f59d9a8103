//! Static axis-aligned box obstacles.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::node::Node;
use crate::vec::Vec;

/// Stable handle to a collider inside a [`World`](crate::World).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderId(pub(crate) usize);

impl ColliderId {
    pub fn new(index: usize) -> Self {
        ColliderId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Which of the two faces on an axis a contact was resolved to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Face {
    /// The face at `center - size / 2`; outward normal points to negative.
    Min,
    /// The face at `center + size / 2`; outward normal points to positive.
    Max,
}

/// Result of pushing a node out of a box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact<V: Vec> {
    pub axis: usize,
    pub face: Face,
    /// Distance the node was moved to reach the face.
    pub depth: V::Scalar,
    /// Outward unit normal of the face.
    pub normal: V,
}

/// A static axis-aligned box. It never moves and is never integrated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Collider<V: Vec> {
    position: V,
    size: V,
}

impl<V: Vec> Collider<V> {
    /// `position` is the box center, `size` its full extents.
    pub fn new(position: V, size: V) -> Result<Self, PhysicsError> {
        for axis in 0..V::DIM {
            let s = size.axis(axis);
            if !(s.is_finite() && s > V::Scalar::zero()) {
                return Err(PhysicsError::InvalidSize);
            }
        }
        Ok(Collider { position, size })
    }

    pub fn position(&self) -> V { self.position }
    pub fn size(&self) -> V { self.size }

    pub fn min(&self) -> V {
        self.position - self.size.scale(V::Scalar::half())
    }

    pub fn max(&self) -> V {
        self.position + self.size.scale(V::Scalar::half())
    }

    /// Boundary-inclusive point-in-box test.
    pub fn contains(&self, point: V) -> bool {
        let (min, max) = (self.min(), self.max());
        (0..V::DIM).all(|axis| {
            let p = point.axis(axis);
            p >= min.axis(axis) && p <= max.axis(axis)
        })
    }

    /// Shortest way out of the box for `point`, or `None` if it is outside.
    ///
    /// Ties go to the lower axis, and the min face before the max face.
    pub fn penetration(&self, point: V) -> Option<Contact<V>> {
        if !self.contains(point) {
            return None;
        }
        let (min, max) = (self.min(), self.max());

        let mut best: Option<(usize, Face, V::Scalar)> = None;
        for axis in 0..V::DIM {
            let p = point.axis(axis);
            let candidates = [(Face::Min, p - min.axis(axis)), (Face::Max, max.axis(axis) - p)];
            for (face, depth) in candidates {
                match best {
                    Some((_, _, d)) if d <= depth => {}
                    _ => best = Some((axis, face, depth)),
                }
            }
        }

        best.map(|(axis, face, depth)| {
            let normal = match face {
                Face::Min => -V::unit(axis),
                Face::Max => V::unit(axis),
            };
            Contact { axis, face, depth, normal }
        })
    }

    /// Push `node` onto the nearest face and apply the contact response.
    ///
    /// The node's coordinate on the contact axis is set exactly to the face
    /// plane. If the node was moving into the box, its normal velocity is
    /// reflected and scaled by `-elasticity` and its tangential velocity is
    /// scaled by `1 - friction` (clamped to [0, 1]). A node resting on the
    /// face or moving away keeps its velocity, so resolving an already
    /// resolved node changes nothing. Pinned nodes are ignored.
    pub fn resolve(&self, node: &mut Node<V>) -> Option<Contact<V>> {
        if node.is_pinned() {
            return None;
        }
        let contact = self.penetration(node.position)?;

        let plane = match contact.face {
            Face::Min => self.min().axis(contact.axis),
            Face::Max => self.max().axis(contact.axis),
        };
        node.position.set_axis(contact.axis, plane);

        let normal_speed = node.velocity.dot(contact.normal);
        if normal_speed < V::Scalar::zero() {
            let one = V::Scalar::one();
            let slide = (one - node.friction()).clamp(V::Scalar::zero(), one);
            let incoming = node.velocity.axis(contact.axis);
            let mut velocity = node.velocity.scale(slide);
            velocity.set_axis(contact.axis, -node.elasticity() * incoming);
            node.velocity = velocity;
        }

        Some(contact)
    }
}
