use super::*;
use crate::foundation::core::Point;

fn mount(w: f64, h: f64) -> Backdrop {
    Backdrop::mount(BackdropConfig::default(), SurfaceDesc::new(w, h)).unwrap()
}

#[test]
fn mount_generates_and_first_tick_renders_without_motion() {
    let mut b = mount(800.0, 600.0);
    assert!(b.is_running());
    assert_eq!(b.engine().nodes().len(), 40);
    let before = b.engine().nodes().to_vec();

    let frame = b.tick(Duration::from_millis(500)).unwrap();
    assert_eq!((frame.width, frame.height), (800, 600));
    assert_eq!(b.engine().nodes(), before.as_slice());
}

#[test]
fn zero_surface_defers_generation_until_resize() {
    let mut b = mount(0.0, 0.0);
    assert!(!b.engine().is_generated());
    assert!(b.tick(Duration::ZERO).unwrap().is_empty());

    b.handle(&InputEvent::Resize {
        width: 320.0,
        height: 240.0,
    });
    assert!(b.engine().is_generated());
    assert_eq!(b.engine().nodes().len(), 15);
    let frame = b.tick(Duration::from_millis(16)).unwrap();
    assert_eq!((frame.width, frame.height), (320, 240));
}

#[test]
fn invalid_surfaces_fail_to_mount() {
    let bad_ratio = SurfaceDesc::new(100.0, 100.0).with_device_pixel_ratio(0.0);
    assert!(Backdrop::mount(BackdropConfig::default(), bad_ratio).is_err());

    let too_big = SurfaceDesc::new(70_000.0, 10.0);
    assert!(Backdrop::mount(BackdropConfig::default(), too_big).is_err());

    let mut cfg = BackdropConfig::default();
    cfg.theme.node_palette.clear();
    assert!(Backdrop::mount(cfg, SurfaceDesc::new(10.0, 10.0)).is_err());
}

#[test]
fn rejected_resize_keeps_the_previous_surface() {
    let mut b = mount(200.0, 100.0);
    b.handle(&InputEvent::Resize {
        width: 1.0e6,
        height: 100.0,
    });
    assert_eq!(b.surface().physical.width, 200);
}

#[test]
fn pointer_and_panel_events_update_state() {
    let mut b = mount(400.0, 300.0);
    b.handle(&InputEvent::PointerMove { x: 10.0, y: 20.0 });
    assert_eq!(b.pointer(), PointerState::active_at(Point::new(10.0, 20.0)));
    b.handle(&InputEvent::PointerLeave);
    assert!(!b.pointer().active);

    b.handle(&InputEvent::PanelMoved(Rect::new(300.0, 200.0, 100.0, 50.0)));
    assert_eq!(b.panel(), Some(Rect::new(100.0, 50.0, 300.0, 200.0)));
}

#[test]
fn stop_handle_halts_ticks_and_resume_restarts() {
    let mut b = mount(64.0, 64.0);
    let handle = b.stop_handle();
    assert!(b.tick(Duration::ZERO).is_some());
    handle.stop();
    handle.stop();
    assert!(b.tick(Duration::from_millis(16)).is_none());
    assert!(!b.is_running());

    b.resume();
    assert!(b.tick(Duration::from_secs(60)).is_some());
    assert_eq!(b.markers()[0].tracker().progress(), 0.0);
}
