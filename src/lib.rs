//! Mass-spring soft bodies with explicit Euler integration and box collisions.
//!
//! `squishy` simulates point masses linked by damped Hookean springs and
//! pushes them out of static axis-aligned boxes. Each frame runs a fixed
//! pipeline: tick a [`TimeSource`], accumulate spring and gravity forces,
//! integrate every node, then resolve collisions.
//!
//! # Features
//!
//! - **Damped springs**: Hooke's law plus axial damping, equal and opposite
//! - **Explicit Euler**: velocity first, then position; per-step or per-second damping
//! - **Box colliders**: nearest-face penetration correction with restitution and friction
//! - **Cuboids**: eight cross-braced corner nodes in one call
//! - **Observable**: Monitor the pipeline via the `StepObserver` trait
//! - **`no_std` compatible**: only `alloc` is required; `std` adds a wall-clock time source
//!
//! ```
//! use squishy::{Collider, Cuboid, CuboidConfig, NoOpStepObserver, SimulationConfig, Vec3, World};
//!
//! let mut world: World<Vec3<f32>> = World::new();
//! let body = Cuboid::build(
//!     &mut world,
//!     Vec3::new(0.0, 7.0, 0.0),
//!     Vec3::new(1.0, 1.0, 1.0),
//!     &CuboidConfig::default(),
//! ).unwrap();
//! body.rotate(&mut world, 20.0, 45.0, 0.0);
//! world.add_collider(Collider::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(20.0, 1.0, 20.0)).unwrap());
//!
//! let config = SimulationConfig::earth();
//! for _ in 0..60 {
//!     world.step(1.0 / 60.0, &config, &mut NoOpStepObserver);
//! }
//! assert!(world.positions().iter().all(|p| p.y < 8.0));
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod float;
pub mod vec;
pub mod node;
pub mod spring;
pub mod collider;
pub mod integration;
pub mod collision;
pub mod time;
pub mod world;
pub mod cuboid;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Scalar, Vec2, Vec3};
pub use node::{Node, NodeId, NodeMaterial};
pub use spring::{Spring, SpringParams};
pub use collider::{Collider, ColliderId, Contact, Face};
pub use integration::integrate;
pub use collision::resolve_collisions;
pub use time::{TimeSource, FixedTimeSource};
#[cfg(feature = "std")]
pub use time::RealTimeSource;
pub use world::World;
pub use cuboid::{Bracing, Cuboid, CuboidConfig};
pub use config::{DampingMode, SimulationConfig};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;

/// A three-dimensional world, the common case.
pub type World3D<F> = World<Vec3<F>>;
