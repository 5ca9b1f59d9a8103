use squishy::{
    integrate, resolve_collisions, Collider, ColliderId, NoOpStepObserver, Node, NodeId,
    NodeMaterial, SimulationConfig, StepObserver, Vec2, Vec3, World,
};
use squishy::Vec as _;

fn ground() -> Collider<Vec3<f32>> {
    Collider::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(20.0, 1.0, 20.0)).unwrap()
}

#[test]
fn falling_node_lands_exactly_on_face() {
    let material = NodeMaterial::default().with_damping(1.0).with_elasticity(0.5).with_friction(0.0);
    let mut nodes = vec![Node::new(Vec3::new(0.3f32, 2.0, -0.2), &material).unwrap()];
    let colliders = [ground()];
    let config = SimulationConfig::new().with_gravity(Vec3::new(0.0, -9.8, 0.0));
    let dt = 1.0 / 60.0;

    let mut landed = false;
    for _ in 0..200 {
        integrate(&mut nodes, &[], dt, &config, &mut NoOpStepObserver);
        let incoming = nodes[0].velocity;
        let was_inside = colliders[0].contains(nodes[0].position);

        let contacts = resolve_collisions(&mut nodes, &colliders, &mut NoOpStepObserver);

        if was_inside && incoming.y < 0.0 {
            assert_eq!(contacts, 1);
            assert_eq!(nodes[0].position.y, 0.5, "node must sit exactly on the top face");
            assert_eq!(nodes[0].velocity.y, -0.5 * incoming.y);
            assert_eq!(nodes[0].velocity.x, incoming.x);
            assert_eq!(nodes[0].velocity.z, incoming.z);
            landed = true;
            break;
        }
    }
    assert!(landed, "node never reached the ground");
}

#[test]
fn resolving_twice_is_a_no_op() {
    let material = NodeMaterial::default().with_elasticity(0.3).with_friction(0.4);
    let mut nodes = vec![
        Node::new(Vec3::new(1.0f32, 0.2, 1.0), &material)
            .unwrap()
            .with_velocity(Vec3::new(1.0, -5.0, 2.0)),
        Node::new(Vec3::new(-9.95f32, 0.0, 3.0), &material)
            .unwrap()
            .with_velocity(Vec3::new(-2.0, 0.0, 0.0)),
        Node::new(Vec3::new(0.0f32, 4.0, 0.0), &material).unwrap(),
    ];
    let colliders = [ground()];

    resolve_collisions(&mut nodes, &colliders, &mut NoOpStepObserver);
    let positions: Vec<_> = nodes.iter().map(|n| n.position).collect();
    let velocities: Vec<_> = nodes.iter().map(|n| n.velocity).collect();

    resolve_collisions(&mut nodes, &colliders, &mut NoOpStepObserver);
    for (i, n) in nodes.iter().enumerate() {
        assert_eq!(n.position, positions[i], "node {} moved", i);
        assert_eq!(n.velocity, velocities[i], "node {} changed speed", i);
    }
}

#[test]
fn node_exits_through_nearest_side_face() {
    let material = NodeMaterial::default().with_elasticity(0.0).with_friction(0.0);
    let mut nodes = vec![Node::new(Vec3::new(-9.95f32, 0.0, 3.0), &material)
        .unwrap()
        .with_velocity(Vec3::new(-2.0, -1.0, 0.0))];
    let colliders = [ground()];

    resolve_collisions(&mut nodes, &colliders, &mut NoOpStepObserver);

    // Already leaving through the -x face: placed on it, velocity untouched.
    assert_eq!(nodes[0].position, Vec3::new(-10.0, 0.0, 3.0));
    assert_eq!(nodes[0].velocity, Vec3::new(-2.0, -1.0, 0.0));
}

#[test]
fn node_entering_side_face_is_stopped() {
    let material = NodeMaterial::default().with_elasticity(0.0).with_friction(0.0);
    let mut nodes = vec![Node::new(Vec3::new(-9.95f32, 0.0, 3.0), &material)
        .unwrap()
        .with_velocity(Vec3::new(2.0, -1.0, 0.0))];

    resolve_collisions(&mut nodes, &[ground()], &mut NoOpStepObserver);

    assert_eq!(nodes[0].position.x, -10.0);
    assert_eq!(nodes[0].velocity, Vec3::new(0.0, -1.0, 0.0));
}

#[test]
fn inelastic_ground_stops_bounce() {
    let material = NodeMaterial::default().with_elasticity(0.0).with_damping(1.0);
    let mut world: World<Vec3<f32>> = World::new();
    let id = world.spawn(Vec3::new(0.0, 3.0, 0.0), &material).unwrap();
    world.add_collider(ground());
    let config = SimulationConfig::earth();

    for _ in 0..240 {
        world.step(1.0 / 60.0, &config, &mut NoOpStepObserver);
        assert!(world.node(id).position.y >= 0.5, "sank to {}", world.node(id).position.y);
    }
    assert_eq!(world.node(id).position.y, 0.5);
    assert_eq!(world.node(id).velocity.y, 0.0);
}

#[test]
fn elastic_bounce_keeps_rebounding() {
    let material = NodeMaterial::default().with_elasticity(1.0).with_damping(1.0);
    let mut world: World<Vec2<f64>> = World::new();
    let id = world.spawn(Vec2::new(0.0, 5.0), &material).unwrap();
    world.add_collider(Collider::new(Vec2::new(0.0, -1.0), Vec2::new(100.0, 2.0)).unwrap());
    let config = SimulationConfig::earth();

    let mut bounces = 0;
    let mut falling = true;
    for _ in 0..600 {
        world.step(1.0 / 120.0, &config, &mut NoOpStepObserver);
        let vy = world.node(id).velocity.y;
        if falling && vy > 0.0 {
            bounces += 1;
        }
        falling = vy <= 0.0;
    }
    assert!(bounces >= 2, "expected repeated bounces, saw {}", bounces);
}

#[test]
fn pinned_node_inside_collider_stays_put() {
    let mut world: World<Vec3<f32>> = World::new();
    let id = world.add_node(Node::pinned(Vec3::new(0.0, 0.0, 0.0)));
    world.add_collider(ground());

    world.step(1.0 / 60.0, &SimulationConfig::earth(), &mut NoOpStepObserver);

    assert_eq!(world.node(id).position, Vec3::new(0.0, 0.0, 0.0));
}

#[derive(Default)]
struct ContactLog {
    contacts: Vec<(NodeId, ColliderId)>,
    steps: usize,
}

impl StepObserver for ContactLog {
    fn on_contact(&mut self, node: NodeId, collider: ColliderId) {
        self.contacts.push((node, collider));
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}

#[test]
fn observer_sees_contacts_per_collider() {
    let mut world: World<Vec3<f32>> = World::new();
    let material = NodeMaterial::default();
    world.spawn(Vec3::new(0.0, 5.0, 0.0), &material).unwrap();
    let inside = world.spawn(Vec3::new(5.0, 0.4, 0.0), &material).unwrap();
    let floor = world.add_collider(ground());
    world.add_collider(Collider::new(Vec3::new(50.0, 0.0, 0.0), Vec3::splat(1.0)).unwrap());

    let mut log = ContactLog::default();
    world.step(0.0, &SimulationConfig::new(), &mut log);

    assert_eq!(log.contacts, vec![(inside, floor)]);
    assert_eq!(log.steps, 1);
    assert_eq!(world.collider(floor).max().y, 0.5);
}
