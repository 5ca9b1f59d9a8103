//! Force accumulation and explicit Euler integration.

use crate::config::SimulationConfig;
use crate::node::Node;
use crate::observer::StepObserver;
use crate::spring::Spring;
use crate::vec::Vec;

/// Advance every node by `dt`.
///
/// Two passes: first every spring and gravity contribute to the nodes'
/// force accumulators, then every node integrates its summed force. A node
/// shared by several springs therefore sees all of them.
///
/// Returns the number of nodes whose position or velocity is no longer
/// finite after the step. Explicit integration with stiff springs and a
/// large `dt` can blow up; that is reported, not corrected.
///
/// Panics if a spring refers to a node outside `nodes`.
pub fn integrate<V: Vec, O: StepObserver>(
    nodes: &mut [Node<V>],
    springs: &[Spring<V::Scalar>],
    dt: V::Scalar,
    config: &SimulationConfig<V>,
    observer: &mut O,
) -> usize {
    for spring in springs {
        spring.apply(nodes);
    }
    for node in nodes.iter_mut() {
        node.apply_acceleration(config.gravity);
    }

    let mut non_finite = 0;
    for node in nodes.iter_mut() {
        node.integrate(dt, config.damping_mode);
        if !node.is_finite() {
            non_finite += 1;
        }
    }
    observer.on_integrate();

    non_finite
}
