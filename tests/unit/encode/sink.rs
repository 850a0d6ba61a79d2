use super::*;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::default(),
    }
}

#[test]
fn in_memory_sink_records_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(2, 2)).unwrap();
    for i in 0..3 {
        sink.push_frame(FrameIndex(i), &FrameRGBA::filled(2, 2, [0, 0, 0, 255]))
            .unwrap();
    }
    sink.end().unwrap();

    assert!(sink.is_finished());
    assert_eq!(sink.config(), Some(cfg(2, 2)));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2]);
}

#[test]
fn png_sequence_names_are_zero_padded() {
    let sink = PngSequenceSink::with_prefix("out", "sirds");
    assert_eq!(
        sink.path_for(FrameIndex(7)),
        PathBuf::from("out").join("sirds_00007.png")
    );
}

#[test]
fn png_sequence_writes_files() {
    let dir = PathBuf::from("target").join("unit_png_sequence");
    let _ = std::fs::remove_dir_all(&dir);

    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg(4, 2)).unwrap();
    sink.push_frame(FrameIndex(0), &FrameRGBA::filled(4, 2, [9, 9, 9, 255]))
        .unwrap();
    sink.push_frame(FrameIndex(1), &FrameRGBA::filled(4, 2, [9, 9, 9, 255]))
        .unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written().len(), 2);
    assert!(dir.join("frame_00000.png").is_file());
    assert!(dir.join("frame_00001.png").is_file());
}

#[test]
fn png_sequence_rejects_empty_frames() {
    let mut sink = PngSequenceSink::new(PathBuf::from("target").join("unit_png_empty"));
    assert!(sink.begin(cfg(0, 2)).is_err());
}
