use super::*;

const BG: Rgba8 = [0, 0, 0, 255];
const DOT: Rgba8 = [225, 225, 225, 255];

#[test]
fn filled_frame_has_expected_size() {
    let f = FrameRGBA::filled(3, 2, [1, 2, 3, 4]);
    assert_eq!(f.data.len(), 3 * 2 * 4);
    assert_eq!(f.pixel(2, 1), Some([1, 2, 3, 4]));
    assert_eq!(f.pixel(3, 0), None);
}

#[test]
fn fill_square_clips_at_edges() {
    let mut f = FrameRGBA::filled(4, 4, BG);
    f.fill_square(3, 3, 4, DOT);
    assert_eq!(f.pixel(3, 3), Some(DOT));
    assert_eq!(f.pixel(2, 3), Some(BG));
    f.fill_square(10, 10, 4, DOT);
}

#[test]
fn dots_become_squares_of_dot_size() {
    let field = DotField::from_rows(&[[true, false], [false, true]]).unwrap();
    let mut f = FrameRGBA::filled(8, 8, BG);
    paint_field(&mut f, &field, 4, 0, DOT);

    for y in 0..8 {
        for x in 0..8 {
            let on = (x < 4) == (y < 4);
            let want = if on { DOT } else { BG };
            assert_eq!(f.pixel(x, y), Some(want), "({x}, {y})");
        }
    }
}

#[test]
fn offset_moves_the_image_right() {
    let field = DotField::from_rows(&[[true]]).unwrap();
    let mut f = FrameRGBA::filled(4, 2, BG);
    paint_field(&mut f, &field, 2, 2, DOT);
    assert_eq!(f.pixel(1, 0), Some(BG));
    assert_eq!(f.pixel(2, 0), Some(DOT));
    assert_eq!(f.pixel(3, 1), Some(DOT));
}

#[test]
fn layout_places_images_side_by_side() {
    let cfg = StereogramConfig {
        grid: GridSize::new(3, 2).unwrap(),
        dot_size: 2,
        ..StereogramConfig::default()
    };
    let layout = StereoLayout::from_config(&cfg).unwrap();
    assert_eq!(layout.image_width(), 6);
    assert_eq!(layout.canvas_width(), 12);
    assert_eq!(layout.height(), 4);
    assert_eq!(layout.shifted_offset(), 6);

    let reference = DotField::from_rows(&[[true, false, false], [false, false, false]]).unwrap();
    let shifted = DotField::from_rows(&[[false, false, false], [false, false, true]]).unwrap();
    let frame = layout.compose(&reference, &shifted, &cfg.palette);

    assert_eq!(frame.width, 12);
    assert_eq!(frame.pixel(0, 0), Some(cfg.palette.dot));
    assert_eq!(frame.pixel(6, 0), Some(cfg.palette.background));
    // last cell of the shifted image spans x 10..12, y 2..4
    assert_eq!(frame.pixel(11, 3), Some(cfg.palette.dot));
    assert_eq!(frame.pixel(5, 3), Some(cfg.palette.background));
}

#[test]
fn argb_packing_drops_alpha() {
    let f = FrameRGBA::filled(1, 1, [0x12, 0x34, 0x56, 0x78]);
    assert_eq!(f.to_argb_u32(), vec![0x0012_3456]);
}

#[test]
fn png_is_written_to_disk() {
    let path = std::path::PathBuf::from("target")
        .join("unit_render")
        .join("frame.png");
    let _ = std::fs::remove_file(&path);
    FrameRGBA::filled(4, 4, DOT).save_png(&path).unwrap();
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 4));
    assert_eq!(img.get_pixel(0, 0).0, DOT);
}
