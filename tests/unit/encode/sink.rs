use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "netglow_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn frame(px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data: [px, px].concat(),
        premultiplied: true,
    }
}

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 1,
        fps: Fps::new(30, 1).unwrap(),
    }
}

#[test]
fn in_memory_sink_keeps_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame([1, 2, 3, 255])).unwrap();
    sink.push_frame(FrameIndex(1), &frame([4, 5, 6, 255])).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.config(), Some(cfg()));
    assert_eq!(sink.frames().len(), 2);
    assert_eq!(sink.frames()[1].0, FrameIndex(1));
}

#[test]
fn png_sequence_names_frames_and_rejects_reordering() {
    let dir = temp_dir("png_sequence");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame([16, 18, 27, 255])).unwrap();
    sink.push_frame(FrameIndex(1), &frame([16, 18, 27, 255])).unwrap();
    assert!(sink.push_frame(FrameIndex(1), &frame([0, 0, 0, 0])).is_err());
    sink.end().unwrap();

    assert_eq!(sink.written().len(), 2);
    assert!(dir.join("frame_00000.png").exists());
    let img = image::open(dir.join("frame_00001.png")).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(0, 0).0, [16, 18, 27, 255]);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn unpremultiply_restores_straight_channels() {
    let out = unpremultiply(&[64, 32, 0, 128, 10, 20, 30, 255, 9, 9, 9, 0]);
    assert_eq!(&out[0..4], &[128, 64, 0, 128]);
    assert_eq!(&out[4..8], &[10, 20, 30, 255]);
    assert_eq!(&out[8..12], &[9, 9, 9, 0]);
}

#[test]
fn empty_frames_are_not_written() {
    let dir = temp_dir("empty_png");
    std::fs::create_dir_all(&dir).unwrap();
    assert!(write_png(&dir.join("x.png"), &FrameRGBA::empty()).is_err());
    std::fs::remove_dir_all(&dir).ok();
}
