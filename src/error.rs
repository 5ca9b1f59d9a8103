//! Error types for world construction.

use core::fmt;

/// Errors rejected when nodes, springs, or colliders are constructed.
///
/// The simulation step itself never fails once the world holds valid data.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// Node damping must be in [0, 1].
    InvalidNodeDamping,
    /// Friction must be non-negative and finite.
    InvalidFriction,
    /// Elasticity must be in [0, 1].
    InvalidElasticity,
    /// Spring stiffness must be non-negative and finite.
    InvalidStiffness,
    /// Spring damping must be non-negative and finite.
    InvalidSpringDamping,
    /// Rest length must be non-negative and finite.
    InvalidRestLength,
    /// A spring cannot connect a node to itself.
    SelfLoop { node: usize },
    /// Node index is out of bounds.
    NodeOutOfBounds { index: usize, count: usize },
    /// Box extents must be positive and finite on every axis.
    InvalidSize,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidNodeDamping => write!(f, "node damping must be in [0, 1]"),
            PhysicsError::InvalidFriction => write!(f, "friction must be non-negative"),
            PhysicsError::InvalidElasticity => write!(f, "elasticity must be in [0, 1]"),
            PhysicsError::InvalidStiffness => write!(f, "stiffness must be non-negative"),
            PhysicsError::InvalidSpringDamping => write!(f, "spring damping must be non-negative"),
            PhysicsError::InvalidRestLength => write!(f, "rest length must be non-negative"),
            PhysicsError::SelfLoop { node } => {
                write!(f, "spring connects node {} to itself", node)
            }
            PhysicsError::NodeOutOfBounds { index, count } => {
                write!(f, "node index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::InvalidSize => write!(f, "box size must be positive on every axis"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PhysicsError {}
