//! Discrete penetration correction against static colliders.

use crate::collider::{Collider, ColliderId};
use crate::node::{Node, NodeId};
use crate::observer::StepObserver;
use crate::vec::Vec;

/// Push every node out of every collider it penetrates.
///
/// Each node is tested against the colliders in order and resolved against
/// each one independently. Overlapping colliders can leave a node inside
/// one of them for a frame; later frames work it out. No contact state
/// survives between calls.
///
/// Returns the number of contacts resolved.
pub fn resolve_collisions<V: Vec, O: StepObserver>(
    nodes: &mut [Node<V>],
    colliders: &[Collider<V>],
    observer: &mut O,
) -> usize {
    let mut contacts = 0;
    for (i, node) in nodes.iter_mut().enumerate() {
        for (j, collider) in colliders.iter().enumerate() {
            if collider.resolve(node).is_some() {
                contacts += 1;
                observer.on_contact(NodeId(i), ColliderId(j));
            }
        }
    }
    contacts
}
