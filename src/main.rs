// src/main.rs

use softraster::config::CONFIG;
use softraster::font::builtin::{self, GLYPH_HEIGHT};
use softraster::{Canvas, Color, Image, Sprite};

use anyhow::Context;
use log::info;
use std::io::Write;
use std::sync::Arc;

/// Luminance ramp used by the ASCII preview, darkest first.
const PREVIEW_RAMP: &[u8] = b" .:-=+*#%@";

/// Main entry point for the `softraster` demo.
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting softraster demo...");

    let config = &*CONFIG;
    let mut canvas = Canvas::with_config(&config.canvas).context("Failed to create canvas")?;
    info!(
        "Canvas {}x{} ({:?} compositing)",
        canvas.width(),
        canvas.height(),
        canvas.composite_mode()
    );

    draw_scene(&mut canvas, config).context("Failed to draw demo scene")?;
    canvas.copy();
    info!("Frame published");

    if config.demo.preview {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        write_preview(&mut out, &canvas.image()).context("Failed to write preview")?;
    }

    info!("softraster exited successfully.");
    Ok(())
}

fn draw_scene(canvas: &mut Canvas, config: &softraster::config::Config) -> anyhow::Result<()> {
    let demo = &config.demo;
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);

    canvas.clear_with(demo.background);

    // Frame border.
    let border = Color::rgb(0x40, 0x40, 0x40);
    canvas.fill_rect(0, 0, w, 1, border);
    canvas.fill_rect(0, h - 1, w, 1, border);
    canvas.fill_rect(0, 0, 1, h, border);
    canvas.fill_rect(w - 1, 0, 1, h, border);

    canvas.set_font(Some(Arc::new(builtin::tiny_font(demo.text_color)?)));
    canvas.draw_string(2, 2, &demo.text)?;

    let sprite = Sprite::solid(8, 4, Color::rgb(0xC0, 0x30, 0x30))?;
    let sprite_y = 2 + GLYPH_HEIGHT as i32 + 4;
    canvas.rotated_render(w / 2 - 4, sprite_y, 4, 2, demo.sprite_angle, &sprite);
    canvas.render(4, sprite_y, &sprite);

    Ok(())
}

/// Prints the published frame as ASCII art, one character per pixel.
fn write_preview(out: &mut impl Write, image: &Image<'_>) -> std::io::Result<()> {
    for row in image.pixels().chunks(image.width() as usize) {
        let line: String = row
            .iter()
            .map(|&argb| {
                let c = Color::from_argb(argb);
                let luma = (u32::from(c.red()) * 3 + u32::from(c.green()) * 6 + u32::from(c.blue()))
                    / 10;
                let idx = luma as usize * (PREVIEW_RAMP.len() - 1) / 255;
                PREVIEW_RAMP[idx] as char
            })
            .collect();
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
