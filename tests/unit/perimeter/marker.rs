use super::*;
use crate::perimeter::tracker::Direction;
use crate::render::display::DrawOp;

fn marker(direction: Direction) -> BorderMarker {
    BorderMarker::from_config(&MarkerConfig {
        direction,
        ..MarkerConfig::default()
    })
}

#[test]
fn pulse_cycles_between_rest_and_peak() {
    let mut m = marker(Direction::Forward);
    let rest = m.pulse();
    assert!((rest.scale - 1.0).abs() < 1e-12);
    assert!((rest.opacity - 0.7).abs() < 1e-12);

    m.advance(Duration::from_secs(1));
    let peak = m.pulse();
    assert!((peak.scale - 1.2).abs() < 1e-9);
    assert!((peak.opacity - 1.0).abs() < 1e-9);

    m.advance(Duration::from_secs(1));
    let back = m.pulse();
    assert!((back.scale - 1.0).abs() < 1e-9);
}

#[test]
fn marker_travels_with_its_tracker() {
    let mut m = marker(Direction::Forward);
    let panel = Rect::new(10.0, 20.0, 110.0, 120.0);
    assert_eq!(m.position(panel), Point::new(10.0, 20.0));

    // A quarter of the default 10 s lap reaches the top-right corner of a square panel.
    m.advance(Duration::from_millis(2_500));
    let p = m.position(panel);
    assert!((p.x - 110.0).abs() < 1e-9 && (p.y - 20.0).abs() < 1e-9);
    assert!((m.tracker().progress() - 0.25).abs() < 1e-12);
}

#[test]
fn draw_emits_glow_then_dot() {
    let m = marker(Direction::Reverse);
    let mut list = DisplayList::new();
    m.draw(Rect::new(0.0, 0.0, 50.0, 50.0), ColorDef::WHITE.with_alpha(0.5), &mut list);
    assert_eq!(list.len(), 2);
    match &list.ops()[0] {
        DrawOp::RadialGradient { radius, stops, .. } => {
            assert!((radius - 8.0).abs() < 1e-12);
            assert_eq!(stops.len(), 3);
            assert_eq!(stops[2].color.a, 0.0);
            assert!((stops[0].color.a - 0.35).abs() < 1e-12);
        }
        other => panic!("expected glow first, got {other:?}"),
    }
    match &list.ops()[1] {
        DrawOp::FillCircle { radius, color, .. } => {
            assert!((radius - 4.0).abs() < 1e-12);
            assert!((color.a - 0.7).abs() < 1e-12);
        }
        other => panic!("expected dot, got {other:?}"),
    }
}
