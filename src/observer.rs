//! Step observer trait for monitoring simulation progress.

use crate::collider::ColliderId;
use crate::node::NodeId;

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor the pipeline (e.g., for debugging,
/// contact visualization, or performance profiling). All methods have
/// default no-op implementations.
pub trait StepObserver {
    /// Called after every node has been integrated.
    fn on_integrate(&mut self) {}

    /// Called for each node pushed out of a collider.
    fn on_contact(&mut self, _node: NodeId, _collider: ColliderId) {}

    /// Called after the collision pass of each sub-step.
    fn on_sub_step(&mut self, _sub_step: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
