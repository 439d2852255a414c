/// Rasterizer: turns a display list into an RGBA pixel buffer.
///
/// Glyphs are content-addressed ink patterns rather than real font outlines;
/// the exporter only needs a deterministic, correctly sized snapshot of the
/// document, not typographic fidelity.

use crate::rendering::paint::{PaintCommand, Rgba};
use crate::rendering::PixelRegion;

const CHAR_W: u32 = 8;
const CHAR_H: u32 = 8;

// Deterministic 8x8 ink pattern derived from the character code.
fn glyph_rows(c: char) -> [u8; 8] {
    if c.is_whitespace() {
        return [0; 8];
    }
    let mut x = (c as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    let mut rows = [0u8; 8];
    for r in rows.iter_mut() {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        *r = (x & 0xFF) as u8 | 0x3C; // guarantee ink in the middle columns
    }
    // leave a one-row gap above and below so lines stay visually separate
    rows[0] = 0;
    rows[7] = 0;
    rows
}

fn fill_rect(region: &mut PixelRegion, x: i32, y: i32, w: u32, h: u32, rgba: Rgba) {
    let x0 = x.max(0) as u32;
    let y0 = y.max(0) as u32;
    let x1 = (x.saturating_add(w as i32)).max(0) as u32;
    let y1 = (y.saturating_add(h as i32)).max(0) as u32;
    for py in y0..y1.min(region.height) {
        for px in x0..x1.min(region.width) {
            region.put(px, py, rgba);
        }
    }
}

fn draw_text(region: &mut PixelRegion, x: i32, y: i32, text: &str, text_scale: u32, device_scale: u32, rgba: Rgba) {
    let cell = text_scale * device_scale;
    let mut line_y = y * device_scale as i32;
    for line in text.split('\n') {
        let mut cx = x * device_scale as i32;
        for c in line.chars() {
            let rows = glyph_rows(c);
            for (gy, row) in rows.iter().enumerate() {
                for gx in 0..8u32 {
                    if row & (1 << gx) != 0 {
                        fill_rect(
                            region,
                            cx + (gx * cell) as i32,
                            line_y + (gy as u32 * cell) as i32,
                            cell,
                            cell,
                            rgba,
                        );
                    }
                }
            }
            cx += (CHAR_W * cell) as i32;
        }
        line_y += (CHAR_H * cell) as i32;
    }
}

/// Rasterize a display list.
///
/// Coordinates in the display list are logical pixels; the output region is
/// `scale` times larger in both dimensions (the original captured at 2x for
/// output quality).
pub fn rasterize(commands: &[PaintCommand], width: u32, height: u32, scale: u32) -> PixelRegion {
    let mut region = PixelRegion::blank(width * scale, height * scale);

    for cmd in commands {
        match cmd {
            PaintCommand::SolidRect { x, y, width, height, rgba } => {
                fill_rect(
                    &mut region,
                    x * scale as i32,
                    y * scale as i32,
                    width * scale,
                    height * scale,
                    *rgba,
                );
            }
            PaintCommand::Text { x, y, text, scale: text_scale, rgba } => {
                draw_text(&mut region, *x, *y, text, *text_scale as u32, scale, *rgba);
            }
        }
    }

    region
}
