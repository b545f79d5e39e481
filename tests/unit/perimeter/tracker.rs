use super::*;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn zero_progress_is_the_top_left_corner() {
    assert_eq!(position_for(0.0, 300.0, 200.0), Point::new(0.0, 0.0));
}

#[test]
fn segments_meet_at_corners() {
    let (w, h) = (300.0, 200.0);
    let per = 2.0 * (w + h);
    let eps = 1e-9;
    for (d, corner) in [
        (w, Point::new(w, 0.0)),
        (w + h, Point::new(w, h)),
        (2.0 * w + h, Point::new(0.0, h)),
    ] {
        let before = position_for(d / per - eps, w, h);
        let after = position_for(d / per + eps, w, h);
        assert!((before - corner).hypot() < 1e-3, "{before:?} vs {corner:?}");
        assert!((after - corner).hypot() < 1e-3, "{after:?} vs {corner:?}");
    }
    // Closing the loop back at the origin.
    let end = position_for(1.0 - eps, w, h);
    assert!((end - Point::ORIGIN).hypot() < 1e-3);
}

#[test]
fn mapping_has_period_one() {
    for p in [0.0, 0.13, 0.5, 0.77, 0.99] {
        let base = position_for(p, 120.0, 80.0);
        assert!(close(base, position_for(p + 1.0, 120.0, 80.0)));
        assert!(close(base, position_for(p - 1.0, 120.0, 80.0)));
        assert!(close(base, position_for(p + 3.0, 120.0, 80.0)));
    }
}

#[test]
fn square_quarters_land_on_corners() {
    assert!(close(position_for(0.25, 100.0, 100.0), Point::new(100.0, 0.0)));
    assert!(close(position_for(0.5, 100.0, 100.0), Point::new(100.0, 100.0)));
    assert!(close(position_for(0.75, 100.0, 100.0), Point::new(0.0, 100.0)));
    // Just past half the marker is on the bottom edge heading left.
    let p = position_for(0.6, 100.0, 100.0);
    assert!(close(p, Point::new(60.0, 100.0)));
}

#[test]
fn wide_panel_half_lap_is_bottom_right() {
    assert!(close(position_for(0.5, 600.0, 100.0), Point::new(600.0, 100.0)));
}

#[test]
fn degenerate_rect_maps_to_origin() {
    assert_eq!(position_for(0.4, 0.0, 0.0), Point::ORIGIN);
    assert_eq!(position_for(0.4, f64::NAN, 10.0), Point::ORIGIN);
}

#[test]
fn advance_covers_one_lap_per_lap_duration() {
    let mut t = PerimeterTracker::new(Direction::Forward, Duration::from_secs(10));
    t.advance(Duration::from_secs(5));
    assert!((t.progress() - 0.5).abs() < 1e-12);
    t.advance(Duration::from_secs(5));
    assert!(t.progress() < 1e-12 || t.progress() > 1.0 - 1e-12);

    // Overshooting a full lap still wraps into [0, 1).
    let mut t = PerimeterTracker::new(Direction::Forward, Duration::from_secs(2));
    t.advance(Duration::from_millis(5_500));
    assert!((t.progress() - 0.75).abs() < 1e-9);
}

#[test]
fn reverse_mirrors_forward() {
    let lap = Duration::from_secs(10);
    let mut fwd = PerimeterTracker::new(Direction::Forward, lap);
    let mut rev = PerimeterTracker::new(Direction::Reverse, lap);
    for step in [16u64, 17, 16, 250, 1_000, 3_333] {
        fwd.advance(Duration::from_millis(step));
        rev.advance(Duration::from_millis(step));
        assert!((0.0..1.0).contains(&fwd.progress()));
        assert!((0.0..1.0).contains(&rev.progress()));
        let mirrored = (1.0 - rev.progress()).rem_euclid(1.0);
        assert!((fwd.progress() - mirrored).abs() < 1e-9);
    }
}

#[test]
fn position_is_offset_by_panel_origin() {
    let t = PerimeterTracker::new(Direction::Forward, Duration::from_secs(10)).with_progress(0.25);
    let rect = Rect::new(50.0, 40.0, 150.0, 140.0);
    assert!(close(t.position(rect), Point::new(150.0, 40.0)));
    assert_eq!(t.direction(), Direction::Forward);
}

#[test]
fn direction_accepts_rotational_aliases() {
    let d: Direction = serde_json::from_str("\"clockwise\"").unwrap();
    assert_eq!(d, Direction::Forward);
    let d: Direction = serde_json::from_str("\"counterclockwise\"").unwrap();
    assert_eq!(d, Direction::Reverse);
    assert_eq!(serde_json::to_string(&Direction::Reverse).unwrap(), "\"reverse\"");
}
