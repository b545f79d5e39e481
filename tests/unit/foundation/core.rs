use super::*;

#[test]
fn frame_range_iterates_half_open() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    let idx: Vec<u64> = r.iter().map(|f| f.0).collect();
    assert_eq!(idx, vec![2, 3, 4]);
    assert_eq!(r.len_frames(), 3);
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn fps_rejects_zero_and_reports_duration() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
    let fps = Fps::new(60, 1).unwrap();
    assert!((fps.frame_duration_secs() - 1.0 / 60.0).abs() < 1e-12);
    assert!((fps.frames_to_secs(120) - 2.0).abs() < 1e-12);
}

#[test]
fn surface_desc_defaults_to_unit_ratio() {
    let s = SurfaceDesc::new(800.0, 600.0);
    assert_eq!(s.device_pixel_ratio, 1.0);
    assert_eq!(s.with_device_pixel_ratio(2.0).device_pixel_ratio, 2.0);
    assert_eq!(s.size(), Size::new(800.0, 600.0));
    assert!(Canvas { width: 0, height: 10 }.is_empty());
}
