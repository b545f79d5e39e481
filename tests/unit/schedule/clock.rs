use super::*;

#[test]
fn timestamps_are_frame_multiples() {
    let clock = FrameClock::new(Fps::new(30, 1).unwrap());
    assert_eq!(clock.timestamp(FrameIndex(0)), Duration::ZERO);
    assert_eq!(clock.timestamp(FrameIndex(30)), Duration::from_secs(1));

    let ts: Vec<_> = clock.timestamps(3).collect();
    assert_eq!(ts.len(), 3);
    assert_eq!(ts[2].0, FrameIndex(2));
    let step = ts[1].1.as_secs_f64();
    assert!((step - 1.0 / 30.0).abs() < 1e-9);
}
