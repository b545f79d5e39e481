use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn draws_stay_in_range() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let f = rng.next_f64();
        assert!((0.0..1.0).contains(&f));
        let r = rng.range(1.5, 3.5);
        assert!((1.5..3.5).contains(&r));
        let c = rng.centered(0.2);
        assert!((-0.1..0.1).contains(&c));
        assert!(rng.index(4) < 4);
    }
}

#[test]
fn index_except_never_returns_excluded() {
    let mut rng = Rng64::new(99);
    for exclude in 0..5 {
        for _ in 0..200 {
            let i = rng.index_except(5, exclude);
            assert!(i < 5);
            assert_ne!(i, exclude);
        }
    }
    // With two slots the only answer is the other one.
    assert_eq!(rng.index_except(2, 0), 1);
    assert_eq!(rng.index_except(2, 1), 0);
}
