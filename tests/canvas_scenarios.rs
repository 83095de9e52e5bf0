//! End-to-end scenarios driven through the public `softraster` API only.

use softraster::config::{CanvasConfig, Config};
use softraster::font::builtin;
use softraster::{Canvas, CanvasError, Color, CompositeMode, Sprite};
use std::sync::Arc;

#[test_log::test]
fn test_clear_fill_copy_scenario() {
    // Contract: 4x4, clear red, fill blue 2x2 at (1,1), copy.
    let mut canvas = Canvas::new(4, 4).unwrap();
    canvas.clear_with(Color::from_argb(0xFFFF_0000));
    canvas.fill_rect(1, 1, 2, 2, Color::from_argb(0xFF00_00FF));
    canvas.copy();

    assert_eq!(canvas.pixel(0, 0), Some(Color::RED));
    assert_eq!(canvas.pixel(2, 2), Some(Color::BLUE));
    assert_eq!(canvas.pixel(3, 3), Some(Color::RED));
    assert_eq!(canvas.image().pixels(), canvas.pixels());
    assert_eq!(canvas.image().pixel(1, 1), Some(Color::BLUE));
}

#[test_log::test]
fn test_out_of_bounds_writes_leave_frame_intact() {
    let mut canvas = Canvas::new(5, 3).unwrap();
    canvas.clear_with(Color::GREEN);
    let before = canvas.pixels().to_vec();
    canvas.set_pixel(-1, 0, Color::WHITE);
    canvas.set_pixel(0, canvas.height() as i32, Color::WHITE);
    assert_eq!(canvas.pixels(), before.as_slice());
}

#[test_log::test]
fn test_text_with_builtin_font() {
    let mut canvas = Canvas::new(16, 6).unwrap();
    canvas.clear();
    canvas.set_font(Some(Arc::new(builtin::tiny_font(Color::WHITE).unwrap())));
    // Lower-case input is folded to the font's upper-case glyphs.
    canvas.draw_string(0, 0, "hi").unwrap();
    canvas.copy();

    let image = canvas.image();
    // 'H' column 0 is fully lit, column 1 only on the middle row.
    for row in 0..5 {
        assert_eq!(image.pixel(0, row), Some(Color::WHITE));
        let expected = if row == 2 { Color::WHITE } else { Color::BLACK };
        assert_eq!(image.pixel(1, row), Some(expected));
    }
    // 'I' starts one advance to the right with a full top bar.
    for col in 4..7 {
        assert_eq!(image.pixel(col, 0), Some(Color::WHITE));
    }
    assert_eq!(image.pixel(3, 0), Some(Color::BLACK));
    assert_eq!(image.pixel(0, 5), Some(Color::BLACK));
}

#[test_log::test]
fn test_space_has_no_glyph_but_advances() {
    let mut canvas = Canvas::new(16, 5).unwrap();
    canvas.clear();
    canvas.set_font(Some(Arc::new(builtin::tiny_font(Color::WHITE).unwrap())));
    canvas.draw_string(0, 0, " 1").unwrap();
    assert!((0..4).all(|x| canvas.pixel(x, 0) == Some(Color::BLACK)));
    // '1' top row is 0b010, so the lit pixel sits at advance + 1.
    assert_eq!(canvas.pixel(builtin::ADVANCE + 1, 0), Some(Color::WHITE));
}

#[test_log::test]
fn test_config_driven_canvas() {
    let config = Config::from_json(
        r#"{ "canvas": { "width": 3, "height": 2, "composite_mode": "source_over" } }"#,
    )
    .unwrap();
    let mut canvas = Canvas::with_config(&config.canvas).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (3, 2));
    assert_eq!(canvas.composite_mode(), CompositeMode::SourceOver);

    canvas.clear_with(Color::RED);
    canvas.set_pixel(0, 0, Color::TRANSPARENT);
    assert_eq!(canvas.pixel(0, 0), Some(Color::RED));

    let bad = CanvasConfig {
        width: 0,
        ..CanvasConfig::default()
    };
    assert!(matches!(
        Canvas::with_config(&bad),
        Err(CanvasError::InvalidDimensions { width: 0, .. })
    ));
}

#[test_log::test]
fn test_sprite_scene_publishes_rgba_bytes() {
    let mut canvas = Canvas::new(4, 4).unwrap();
    canvas.clear();
    let sprite = Sprite::solid(2, 2, Color::BLUE).unwrap();
    canvas.render(2, 2, &sprite);
    canvas.rotated_render(0, 0, 1, 1, 180, &sprite);
    canvas.copy();

    let bytes = canvas.image().to_rgba_bytes();
    assert_eq!(bytes.len(), 4 * 4 * 4);
    let at = |x: usize, y: usize| &bytes[(x + y * 4) * 4..(x + y * 4) * 4 + 4];
    assert_eq!(at(0, 0), &[0, 0, 255, 255]);
    assert_eq!(at(1, 1), &[0, 0, 255, 255]);
    assert_eq!(at(3, 3), &[0, 0, 255, 255]);
    assert_eq!(at(3, 0), &[0, 0, 0, 255]);
}
