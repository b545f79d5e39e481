use super::*;

fn engine() -> NetworkEngine {
    NetworkEngine::new(&BackdropConfig::default())
}

#[test]
fn empty_surface_defers_generation() {
    let mut e = engine();
    assert!(!e.resize(Size::new(0.0, 600.0)));
    assert!(!e.is_generated());
    e.update(Duration::from_millis(16), &PointerState::default());
    assert!(e.nodes().is_empty());
}

#[test]
fn first_non_empty_size_generates_once() {
    let mut e = engine();
    assert!(e.resize(Size::new(800.0, 600.0)));
    assert_eq!(e.nodes().len(), 40);
    let before = e.nodes().to_vec();

    assert!(!e.resize(Size::new(1600.0, 1200.0)));
    assert_eq!(e.nodes(), before.as_slice());
    assert_eq!(e.size(), Size::new(1600.0, 1200.0));
    assert_eq!(e.connection_distance(), 300.0);
}

#[test]
fn zero_elapsed_is_a_no_op() {
    let mut e = engine();
    e.resize(Size::new(800.0, 600.0));
    let before = e.nodes().to_vec();
    let k = e.update(Duration::ZERO, &PointerState::default());
    assert_eq!(k, 0.0);
    assert_eq!(e.nodes(), before.as_slice());
}

#[test]
fn long_stalls_are_clamped() {
    let mut e = engine();
    e.resize(Size::new(800.0, 600.0));
    let k = e.update(Duration::from_secs(3), &PointerState::default());
    assert_eq!(k, 4.0);
}

#[test]
fn ticks_keep_the_graph_invariants() {
    let mut e = engine();
    e.resize(Size::new(1024.0, 768.0));
    let size = e.size();
    for i in 0..600 {
        let pointer = if i % 3 == 0 {
            PointerState::active_at(crate::foundation::core::Point::new(500.0, 400.0))
        } else {
            PointerState::default()
        };
        e.update(Duration::from_millis(16), &pointer);
        for (idx, n) in e.nodes().iter().enumerate() {
            assert!(n.neighbors.len() <= 3);
            assert!(!n.neighbors.contains(&idx));
            assert!((0.0..=size.width).contains(&n.position.x));
            assert!((0.0..=size.height).contains(&n.position.y));
        }
        for p in e.particles() {
            assert!((0.0..1.0).contains(&p.progress));
            assert_ne!(p.source, p.target);
        }
    }
}

#[test]
fn edges_come_from_the_lower_index() {
    let mut e = engine();
    e.resize(Size::new(800.0, 600.0));
    for (i, j) in e.edges() {
        assert!(i < j);
        assert!(e.nodes()[i].neighbors.contains(&j));
    }
}

#[test]
fn same_seed_same_trajectory() {
    let mut a = engine();
    let mut b = engine();
    a.resize(Size::new(800.0, 600.0));
    b.resize(Size::new(800.0, 600.0));
    for _ in 0..30 {
        a.update(Duration::from_millis(16), &PointerState::default());
        b.update(Duration::from_millis(16), &PointerState::default());
    }
    assert_eq!(a.nodes(), b.nodes());
    assert_eq!(a.particles(), b.particles());
}
