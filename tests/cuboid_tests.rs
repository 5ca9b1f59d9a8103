use squishy::{
    Bracing, Collider, Cuboid, CuboidConfig, NoOpStepObserver, PhysicsError, SimulationConfig,
    Vec3, World,
};
use squishy::Vec;

fn ground() -> Collider<Vec3<f32>> {
    Collider::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(20.0, 1.0, 20.0)).unwrap()
}

#[test]
fn face_bracing_builds_8_nodes_and_24_springs() {
    let mut world: World<Vec3<f32>> = World::new();
    let body = Cuboid::build(
        &mut world,
        Vec3::new(0.0, 7.0, 0.0),
        Vec3::new(1.0, 1.0, 1.0),
        &CuboidConfig::default(),
    )
    .unwrap();
    assert_eq!(world.node_count(), 8);
    assert_eq!(world.spring_count(), 24);
    assert_eq!(body.spring_count(), 24);
}

#[test]
fn full_bracing_adds_space_diagonals() {
    let mut world: World<Vec3<f64>> = World::new();
    let config = CuboidConfig { bracing: Bracing::Full, ..CuboidConfig::default() };
    Cuboid::build(&mut world, Vec3::zero(), Vec3::new(2.0, 3.0, 6.0), &config).unwrap();
    assert_eq!(world.spring_count(), 28);

    // 2^2 + 3^2 + 6^2 = 49
    let longest = world.springs().iter().map(|s| s.rest_length()).fold(0.0, f64::max);
    assert!((longest - 7.0).abs() < 1e-12);
}

#[test]
fn every_node_has_springs_and_none_repeat() {
    let mut world: World<Vec3<f32>> = World::new();
    let config = CuboidConfig { bracing: Bracing::Full, ..CuboidConfig::default() };
    let body = Cuboid::build(&mut world, Vec3::zero(), Vec3::splat(1.0), &config).unwrap();

    let mut pairs: std::vec::Vec<(usize, usize)> = world
        .springs()
        .iter()
        .map(|s| {
            let (a, b) = (s.a().index(), s.b().index());
            (a.min(b), a.max(b))
        })
        .collect();
    pairs.sort();
    pairs.dedup();
    // 8 nodes fully connected: C(8, 2) = 28 distinct pairs.
    assert_eq!(pairs.len(), 28);

    for corner in body.corners() {
        let degree = world.springs().iter().filter(|s| s.a() == corner || s.b() == corner).count();
        assert_eq!(degree, 7);
    }
}

#[test]
fn corners_span_the_requested_box() {
    let mut world: World<Vec3<f32>> = World::new();
    let body = Cuboid::build(
        &mut world,
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(2.0, 4.0, 6.0),
        &CuboidConfig::default(),
    )
    .unwrap();
    let corners = body.corners();
    assert_eq!(world.node(corners[0]).position, Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(world.node(corners[6]).position, Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(body.center(&world), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn rejects_invalid_material() {
    let mut world: World<Vec3<f32>> = World::new();
    let mut config = CuboidConfig::default();
    config.material.mass = 0.0;
    let err = Cuboid::build(&mut world, Vec3::zero(), Vec3::splat(1.0), &config).unwrap_err();
    assert_eq!(err, PhysicsError::InvalidMass);
    assert_eq!(world.node_count(), 0);
}

#[test]
fn rotation_about_center_keeps_shape_and_place() {
    let mut world: World<Vec3<f64>> = World::new();
    let body = Cuboid::build(
        &mut world,
        Vec3::new(0.0, 7.0, 0.0),
        Vec3::new(1.0, 2.0, 3.0),
        &CuboidConfig::default(),
    )
    .unwrap();
    let before = body.center(&world);

    body.rotate_about(&mut world, before, 20.0, 45.0, 10.0);

    let after = body.center(&world);
    assert!(after.distance(before) < 1e-12);
    for s in world.springs() {
        assert!(s.extension(world.nodes()).abs() < 1e-12);
    }
    let corner = world.node(body.corners()[0]).position;
    assert!((corner.y - (7.0 - 1.0)).abs() > 1e-3, "corner did not move");
}

#[test]
fn rotation_swings_body_around_origin() {
    let mut world: World<Vec3<f32>> = World::new();
    let body = Cuboid::build(
        &mut world,
        Vec3::new(0.0, 7.0, 0.0),
        Vec3::new(1.0, 1.0, 1.0),
        &CuboidConfig::default(),
    )
    .unwrap();
    body.rotate(&mut world, 20.0, 45.0, 0.0);

    let center = body.center(&world);
    assert!(center.x.abs() < 1e-5, "center {:?}", center);
    assert!((center.y - 6.5778).abs() < 1e-4, "center {:?}", center);
    assert!((center.z - 2.3941).abs() < 1e-4, "center {:?}", center);
    for s in world.springs() {
        assert!(s.extension(world.nodes()).abs() < 1e-5);
    }
}

#[test]
fn yaw_quarter_turn_swaps_x_and_z() {
    let mut world: World<Vec3<f64>> = World::new();
    let body =
        Cuboid::build(&mut world, Vec3::zero(), Vec3::new(2.0, 2.0, 4.0), &CuboidConfig::default())
            .unwrap();
    body.rotate(&mut world, 0.0, 90.0, 0.0);

    let xs = body.corners().iter().map(|&c| world.node(c).position.x.abs()).fold(0.0, f64::max);
    let zs = body.corners().iter().map(|&c| world.node(c).position.z.abs()).fold(0.0, f64::max);
    assert!((xs - 2.0).abs() < 1e-12, "x extent {}", xs);
    assert!((zs - 1.0).abs() < 1e-12, "z extent {}", zs);
}

fn settle(pitch: f32, yaw: f32, roll: f32) -> World<Vec3<f32>> {
    let mut world: World<Vec3<f32>> = World::new();
    let body = Cuboid::build(
        &mut world,
        Vec3::new(0.0, 7.0, 0.0),
        Vec3::new(1.0, 1.0, 1.0),
        &CuboidConfig::default(),
    )
    .unwrap();
    body.rotate(&mut world, pitch, yaw, roll);
    world.add_collider(ground());

    let config = SimulationConfig::earth().with_sub_steps(4);
    for _ in 0..600 {
        world.step(1.0 / 60.0, &config, &mut NoOpStepObserver);
        for p in world.positions() {
            assert!(p.y >= 0.5 - 1e-5, "node below the ground top: {:?}", p);
        }
    }
    world
}

#[test]
fn box_comes_to_rest_on_ground() {
    let world = settle(0.0, 0.0, 0.0);
    assert!(!world.has_diverged());
    let top = world.positions().iter().map(|p| p.y).fold(f32::MIN, f32::max);
    assert!(top < 2.0, "box still airborne, top at {}", top);
    assert!(world.kinetic_energy() < 0.05, "energy {}", world.kinetic_energy());
}

#[test]
fn tilted_box_lands_without_exploding() {
    let world = settle(20.0, 45.0, 0.0);
    assert!(!world.has_diverged());
    let top = world.positions().iter().map(|p| p.y).fold(f32::MIN, f32::max);
    assert!(top < 2.0, "box still airborne, top at {}", top);
    for s in world.springs() {
        let stretch = s.extension(world.nodes());
        assert!(stretch.abs() < 0.05, "spring deformed by {}", stretch);
    }
}
