use super::*;

fn palette() -> Vec<Arc<str>> {
    vec![Arc::from("rgba(145, 188, 242, 0.9)"), Arc::from("#5EEAD4")]
}

#[test]
fn density_tier_switches_above_compact_width() {
    let cfg = NetworkConfig::default();
    assert_eq!(DensityTier::for_width(768.0, &cfg), DensityTier::Compact);
    assert_eq!(DensityTier::for_width(769.0, &cfg), DensityTier::Wide);
    assert_eq!(DensityTier::Compact.area_per_node(&cfg), 15_000.0);
    assert_eq!(DensityTier::Wide.area_per_node(&cfg), 12_000.0);
}

#[test]
fn wide_800_by_600_gets_40_nodes_and_20_particle_slots() {
    let cfg = NetworkConfig::default();
    let size = Size::new(800.0, 600.0);
    let tier = DensityTier::for_width(size.width, &cfg);
    assert_eq!(tier, DensityTier::Wide);
    assert_eq!(node_count(size, tier, &cfg), 40);
    assert_eq!(particle_slots(size.width, &cfg), 20);

    let mut rng = Rng64::new(1);
    let (nodes, particles) = generate(size, tier, &cfg, &palette(), &mut rng);
    assert_eq!(nodes.len(), 40);
    assert!(particles.len() <= 20);
}

#[test]
fn node_count_has_floor_and_optional_cap() {
    let mut cfg = NetworkConfig::default();
    let small = Size::new(100.0, 100.0);
    assert_eq!(node_count(small, DensityTier::Compact, &cfg), 15);
    assert_eq!(node_count(Size::ZERO, DensityTier::Compact, &cfg), 15);

    let big = Size::new(1920.0, 1080.0);
    assert_eq!(node_count(big, DensityTier::Wide, &cfg), 172);
    cfg.max_nodes = Some(60);
    assert_eq!(node_count(big, DensityTier::Wide, &cfg), 60);
}

#[test]
fn dense_configs_stop_at_the_node_ceiling() {
    let mut cfg = NetworkConfig::default();
    cfg.wide_area_per_node = 1e-6;
    let big = Size::new(1920.0, 1080.0);
    assert_eq!(node_count(big, DensityTier::Wide, &cfg), NODE_CEILING);

    cfg.min_nodes = usize::MAX;
    assert_eq!(node_count(big, DensityTier::Wide, &cfg), NODE_CEILING);
}

#[test]
fn particle_slots_are_capped() {
    let cfg = NetworkConfig::default();
    assert_eq!(particle_slots(39.0, &cfg), 0);
    assert_eq!(particle_slots(400.0, &cfg), 10);
    assert_eq!(particle_slots(4000.0, &cfg), 50);
}

#[test]
fn generated_nodes_respect_ranges_and_link_limits() {
    let cfg = NetworkConfig::default();
    let size = Size::new(1280.0, 720.0);
    let mut rng = Rng64::new(7);
    let (nodes, particles) = generate(size, DensityTier::Wide, &cfg, &palette(), &mut rng);
    let reach = cfg.connection_distance(size.width, size.height);

    for (i, n) in nodes.iter().enumerate() {
        assert!((0.0..size.width).contains(&n.position.x));
        assert!((0.0..size.height).contains(&n.position.y));
        assert!((1.5..3.5).contains(&n.radius));
        assert!((0.3..0.8).contains(&n.opacity));
        assert!(n.velocity.x.abs() <= 0.1 && n.velocity.y.abs() <= 0.1);
        assert!(n.neighbors.len() <= 3);
        assert!(!n.neighbors.contains(&i));
        for &j in &n.neighbors {
            assert!(n.position.distance(nodes[j].position) < reach);
        }
        let mut sorted = n.neighbors.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), n.neighbors.len());
    }

    for p in &particles {
        assert_eq!(p.progress, 0.0);
        assert!((0.2..0.7).contains(&p.speed));
        assert_ne!(p.source, p.target);
        assert!(nodes[p.source].neighbors.contains(&p.target));
    }
}

#[test]
fn same_seed_same_network() {
    let cfg = NetworkConfig::default();
    let size = Size::new(640.0, 480.0);
    let a = generate(size, DensityTier::Compact, &cfg, &palette(), &mut Rng64::new(5));
    let b = generate(size, DensityTier::Compact, &cfg, &palette(), &mut Rng64::new(5));
    assert_eq!(a, b);
}

fn node_at(x: f64, y: f64) -> Node {
    Node {
        position: Point::new(x, y),
        radius: 2.0,
        color: Arc::from("rgb(1, 2, 3)"),
        opacity: 0.5,
        velocity: Vec2::ZERO,
        neighbors: Neighbors::new(),
    }
}

#[test]
fn linking_scans_in_index_order_and_can_be_one_sided() {
    // Node 0 sits in a cluster of four; node 4 is near 3 only.
    let mut nodes = vec![
        node_at(0.0, 0.0),
        node_at(1.0, 0.0),
        node_at(2.0, 0.0),
        node_at(3.0, 0.0),
        node_at(9.0, 0.0),
    ];
    link_neighbors(&mut nodes, 7.0, 3);
    assert_eq!(nodes[0].neighbors.as_slice(), &[1, 2, 3]);
    assert_eq!(nodes[3].neighbors.as_slice(), &[0, 1, 2]);
    assert_eq!(nodes[4].neighbors.as_slice(), &[3]);
    // 4 is within reach of 3, but 3 filled up before the scan reached it.
    assert!(!nodes[3].is_linked_to(4));
}
