//! Configuration types for the simulation pipeline.

use crate::float::Float;
use crate::node::NodeMaterial;
use crate::spring::SpringParams;
use crate::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard gravity in m/s^2, used by [`SimulationConfig::earth`].
pub const STANDARD_GRAVITY: f32 = 9.81;

/// How a node's `damping` turns into a velocity factor for one step.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DampingMode<F: Float> {
    /// `velocity *= damping` once per step, whatever the step length.
    ///
    /// Results depend on the frame rate.
    PerStep,
    /// `velocity *= damping ^ (dt * reference_rate)`.
    ///
    /// Matches `PerStep` when `dt == 1 / reference_rate` and gives the same
    /// decay per second of simulated time at any step length.
    PerSecond { reference_rate: F },
}

impl<F: Float> DampingMode<F> {
    /// Velocity retention factor for a step of length `dt`.
    pub fn factor(self, damping: F, dt: F) -> F {
        match self {
            DampingMode::PerStep => damping,
            DampingMode::PerSecond { reference_rate } => {
                if dt <= F::zero() {
                    F::one()
                } else {
                    damping.powf(dt * reference_rate)
                }
            }
        }
    }
}

impl<F: Float> Default for DampingMode<F> {
    fn default() -> Self {
        DampingMode::PerStep
    }
}

/// Global tunables for the integration and collision passes.
///
/// # Builder Pattern
/// ```
/// use squishy::config::{DampingMode, SimulationConfig};
/// use squishy::vec::Vec3;
///
/// let config: SimulationConfig<Vec3<f32>> = SimulationConfig::new()
///     .with_gravity(Vec3::new(0.0, -9.81, 0.0))
///     .with_damping_mode(DampingMode::PerSecond { reference_rate: 60.0 })
///     .with_sub_steps(2);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "V: Serialize, V::Scalar: Serialize",
        deserialize = "V: Deserialize<'de>, V::Scalar: Deserialize<'de>"
    ))
)]
pub struct SimulationConfig<V: Vec> {
    /// Gravity acceleration vector. Default: zero (no gravity).
    pub gravity: V,
    /// How node damping is applied. Default: [`DampingMode::PerStep`].
    pub damping_mode: DampingMode<V::Scalar>,
    /// Number of equal sub-steps per frame, each running integration then
    /// collision. Default: 1.
    pub sub_steps: usize,
    /// Material used by [`World::spawn_default`](crate::World::spawn_default).
    pub node_material: NodeMaterial<V::Scalar>,
    /// Parameters used by [`World::add_default_spring`](crate::World::add_default_spring).
    pub spring: SpringParams<V::Scalar>,
}

impl<V: Vec> SimulationConfig<V> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimulationConfig {
            gravity: V::zero(),
            damping_mode: DampingMode::PerStep,
            sub_steps: 1,
            node_material: NodeMaterial::default(),
            spring: SpringParams::default(),
        }
    }

    /// Defaults plus standard gravity pointing down the Y axis
    /// (down the only axis in 1D).
    pub fn earth() -> Self {
        let up = if V::DIM > 1 { 1 } else { 0 };
        Self::new().with_gravity(V::unit(up).scale(-V::Scalar::from_f32(STANDARD_GRAVITY)))
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: V) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping mode.
    pub fn with_damping_mode(mut self, mode: DampingMode<V::Scalar>) -> Self {
        self.damping_mode = mode;
        self
    }

    /// Set the number of sub-steps.
    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }

    /// Set the default node material.
    pub fn with_node_material(mut self, material: NodeMaterial<V::Scalar>) -> Self {
        self.node_material = material;
        self
    }

    /// Set the default spring parameters.
    pub fn with_spring(mut self, spring: SpringParams<V::Scalar>) -> Self {
        self.spring = spring;
        self
    }
}

impl<V: Vec> Default for SimulationConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}
