use super::*;
use crate::foundation::core::Fps;

fn cfg(width: u32, height: u32, fps: Fps) -> SinkConfig {
    SinkConfig { width, height, fps }
}

#[test]
fn sink_config_validation_catches_bad_values() {
    let fps = Fps::default();
    assert!(validate_sink_config(&cfg(0, 10, fps)).is_err());
    assert!(validate_sink_config(&cfg(11, 10, fps)).is_err());
    assert!(validate_sink_config(&cfg(10, 10, Fps { num: 0, den: 1 })).is_err());
    assert!(validate_sink_config(&cfg(960, 800, fps)).is_ok());
}

#[test]
fn opaque_pixels_pass_through() {
    let src = vec![225u8, 225, 225, 255, 0, 0, 0, 255];
    let mut dst = vec![0u8; 8];
    flatten_to_opaque_rgba8(&mut dst, &src, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn translucent_pixels_blend_over_background() {
    // straight red @ 50% alpha over black
    let src = vec![255u8, 0, 0, 128];
    let mut dst = vec![0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, [0, 0, 0, 255]).unwrap();
    assert_eq!(dst, vec![128u8, 0, 0, 255]);

    let src = vec![0u8, 0, 0, 0];
    flatten_to_opaque_rgba8(&mut dst, &src, [7, 8, 9, 255]).unwrap();
    assert_eq!(dst, vec![7u8, 8, 9, 255]);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(flatten_to_opaque_rgba8(&mut dst, &[0u8; 4], [0, 0, 0, 255]).is_err());
}

#[test]
fn push_before_begin_is_an_error() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/never.mp4"));
    let frame = FrameRGBA::filled(2, 2, [0, 0, 0, 255]);
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn odd_canvas_is_rejected_before_spawning() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/unit_ffmpeg/odd.mp4"));
    let err = sink.begin(cfg(3, 4, Fps::default())).unwrap_err();
    assert!(matches!(err, SirdsError::Validation(_)));
}

#[test]
fn command_streams_raw_rgba_into_yuv420p_mp4() {
    let mut opts = FfmpegSinkOpts::new("out/stereo.mp4");
    opts.overwrite = false;
    let cmd = ffmpeg_command(&opts, &cfg(960, 800, Fps::new(30, 1).unwrap()));
    assert_eq!(cmd.get_program(), "ffmpeg");

    let args: Vec<String> = cmd
        .get_args()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    assert_eq!(args.first().map(String::as_str), Some("-n"));
    assert_eq!(args.last().map(String::as_str), Some("out/stereo.mp4"));
    let after = |flag: &str| {
        let at = args.iter().position(|a| a == flag).unwrap();
        args[at + 1].clone()
    };
    assert_eq!(after("-s"), "960x800");
    assert_eq!(after("-r"), "30/1");
    assert_eq!(after("-f"), "rawvideo");
    assert_eq!(after("-c:v"), "libx264");
    let rate = args.iter().position(|a| a == "-r").unwrap();
    let input = args.iter().position(|a| a == "-i").unwrap();
    assert!(rate < input);
}

#[test]
fn odd_canvas_error_names_the_size() {
    let err = validate_sink_config(&cfg(961, 800, Fps::default())).unwrap_err();
    assert!(err.to_string().contains("961x800"), "{err}");
}
