//! Arena of nodes, springs, and colliders driving the per-frame pipeline.

use crate::collider::{Collider, ColliderId};
use crate::collision::resolve_collisions;
use crate::config::SimulationConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::integration::integrate;
use crate::node::{Node, NodeId, NodeMaterial};
use crate::observer::StepObserver;
use crate::spring::{Spring, SpringParams};
use crate::time::TimeSource;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Owns the simulation data and runs integration then collision each step.
///
/// Nodes, springs, and colliders live in dense arrays and are addressed by
/// index handles. Nothing is ever removed, so handles stay valid.
pub struct World<V: Vec> {
    nodes: AllocVec<Node<V>>,
    springs: AllocVec<Spring<V::Scalar>>,
    colliders: AllocVec<Collider<V>>,
    diverged: bool,
}

impl<V: Vec> World<V> {
    pub fn new() -> Self {
        World {
            nodes: AllocVec::new(),
            springs: AllocVec::new(),
            colliders: AllocVec::new(),
            diverged: false,
        }
    }

    pub fn add_node(&mut self, node: Node<V>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Create and add a node in one go.
    pub fn spawn(
        &mut self,
        position: V,
        material: &NodeMaterial<V::Scalar>,
    ) -> Result<NodeId, PhysicsError> {
        let node = Node::new(position, material)?;
        Ok(self.add_node(node))
    }

    /// Spawn a node made of `config.node_material`.
    pub fn spawn_default(
        &mut self,
        position: V,
        config: &SimulationConfig<V>,
    ) -> Result<NodeId, PhysicsError> {
        self.spawn(position, &config.node_material)
    }

    pub fn add_spring(
        &mut self,
        a: NodeId,
        b: NodeId,
        params: &SpringParams<V::Scalar>,
    ) -> Result<usize, PhysicsError> {
        self.check_node(a)?;
        self.check_node(b)?;
        let spring = Spring::new(a, b, params)?;
        self.springs.push(spring);
        log::trace!("spring {} links node {} and node {}", self.springs.len() - 1, a.0, b.0);
        Ok(self.springs.len() - 1)
    }

    /// Link two nodes with a spring built from `config.spring`, rest length
    /// included.
    pub fn add_default_spring(
        &mut self,
        a: NodeId,
        b: NodeId,
        config: &SimulationConfig<V>,
    ) -> Result<usize, PhysicsError> {
        self.add_spring(a, b, &config.spring)
    }

    /// Link two nodes with a spring at rest at their current distance.
    pub fn connect(
        &mut self,
        a: NodeId,
        b: NodeId,
        stiffness: V::Scalar,
        damping: V::Scalar,
    ) -> Result<usize, PhysicsError> {
        self.check_node(a)?;
        self.check_node(b)?;
        let spring = Spring::from_nodes(a, b, &self.nodes, stiffness, damping)?;
        self.springs.push(spring);
        Ok(self.springs.len() - 1)
    }

    pub fn add_collider(&mut self, collider: Collider<V>) -> ColliderId {
        let id = ColliderId(self.colliders.len());
        log::debug!("collider {} spans {:?}..{:?}", id.0, collider.min(), collider.max());
        self.colliders.push(collider);
        id
    }

    fn check_node(&self, id: NodeId) -> Result<(), PhysicsError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(PhysicsError::NodeOutOfBounds { index: id.0, count: self.nodes.len() })
        }
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// The step is split into `config.sub_steps` equal parts; each part
    /// integrates every node, then resolves collisions.
    pub fn step<O: StepObserver>(
        &mut self,
        dt: V::Scalar,
        config: &SimulationConfig<V>,
        observer: &mut O,
    ) {
        debug_assert!(dt >= V::Scalar::zero(), "negative time step");
        let sub_steps = config.sub_steps.max(1);
        let sub_dt = dt / V::Scalar::from_f32(sub_steps as f32);

        for sub in 0..sub_steps {
            let non_finite = integrate(&mut self.nodes, &self.springs, sub_dt, config, observer);
            if non_finite > 0 && !self.diverged {
                self.diverged = true;
                log::warn!(
                    "{} of {} nodes left the finite range; reduce dt or stiffness",
                    non_finite,
                    self.nodes.len()
                );
            }

            let contacts = resolve_collisions(&mut self.nodes, &self.colliders, observer);
            log::trace!("sub-step {}: dt {:?}, {} contacts", sub, sub_dt, contacts);
            observer.on_sub_step(sub);
        }

        observer.on_step_complete();
    }

    /// Tick `time` and step by the returned delta. Returns the delta.
    pub fn frame<T: TimeSource<V::Scalar>, O: StepObserver>(
        &mut self,
        time: &mut T,
        config: &SimulationConfig<V>,
        observer: &mut O,
    ) -> V::Scalar {
        let dt = time.tick();
        self.step(dt, config, observer);
        dt
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
    pub fn collider_count(&self) -> usize { self.colliders.len() }

    /// Panics if `id` did not come from this world.
    pub fn node(&self, id: NodeId) -> &Node<V> { &self.nodes[id.0] }
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<V> { &mut self.nodes[id.0] }
    pub fn nodes(&self) -> &[Node<V>] { &self.nodes }
    pub fn springs(&self) -> &[Spring<V::Scalar>] { &self.springs }
    pub fn colliders(&self) -> &[Collider<V>] { &self.colliders }
    pub fn collider(&self, id: ColliderId) -> &Collider<V> { &self.colliders[id.0] }

    pub fn positions(&self) -> AllocVec<V> {
        self.nodes.iter().map(|n| n.position).collect()
    }

    /// Whether any node has ever left the finite range.
    pub fn has_diverged(&self) -> bool { self.diverged }

    pub fn kinetic_energy(&self) -> V::Scalar {
        self.nodes
            .iter()
            .fold(V::Scalar::zero(), |sum, n| sum + n.kinetic_energy())
    }
}

impl<V: Vec> Default for World<V> {
    fn default() -> Self {
        Self::new()
    }
}
