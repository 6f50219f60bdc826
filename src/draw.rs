// Window + software drawing utilities.
// Provided here:
// 1) A window that shows the composited camera image and reports the quit key.
// 2) Pointer sampling, used as a stand-in hand when no landmark model is wired in.
// 3) Filled shapes and round-capped thick lines for strokes and cursors.
// 4) A tiny 5x7 bitmap font for the HUD.

use crate::error::Error;
use crate::hand::PointerInput;
use crate::types::{FrameBuffer, Point, Rgb, Segment};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the camera feed.
    pub fn new(title: &str, width: usize, height: usize, fps: u32) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps.max(1) as usize);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    /// Also pumps window events, so key and mouse state refresh here.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// 'q' ends the session. Non-blocking: reads the state gathered by the last `present`.
    pub fn quit_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::Q, KeyRepeat::No)
    }

    /// Pointer position (None outside the window) and button state.
    pub fn pointer(&self) -> PointerInput {
        let pos = self
            .window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Point::new(x as i32, y as i32));
        PointerInput {
            pos,
            left: self.window.get_mouse_down(MouseButton::Left),
            right: self.window.get_mouse_down(MouseButton::Right),
        }
    }
}

/* ---------- Software drawing: pixels, shapes, thick lines ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Filled axis-aligned rectangle between two corners (any order), clipped to the frame.
pub fn fill_rect(fb: &mut FrameBuffer, a: Point, b: Point, color: Rgb) {
    let (x0, x1) = (a.x.min(b.x).max(0), a.x.max(b.x).min(fb.width as i32 - 1));
    let (y0, y1) = (a.y.min(b.y).max(0), a.y.max(b.y).min(fb.height as i32 - 1));
    let c = color.packed();
    for y in y0..=y1 {
        let row = y as usize * fb.width;
        for x in x0..=x1 {
            fb.pixels[row + x as usize] = c;
        }
    }
}

/// Filled disc of `radius` pixels centered at `center`.
pub fn fill_circle(fb: &mut FrameBuffer, center: Point, radius: i32, color: Rgb) {
    let c = color.packed();
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                put_pixel(fb, center.x + dx, center.y + dy, c);
            }
        }
    }
}

/// Rasterize a stroke segment: every pixel within thickness/2 of the segment
/// (round caps at both ends). A zero-length segment becomes a dot.
pub fn draw_segment(fb: &mut FrameBuffer, seg: &Segment) {
    if fb.width == 0 || fb.height == 0 {
        return;
    }
    let r = (seg.thickness.max(1) as f32) / 2.0;
    let reach = r.ceil() as i32;
    let (ax, ay) = (seg.from.x as f32, seg.from.y as f32);
    let (bx, by) = (seg.to.x as f32, seg.to.y as f32);
    let (vx, vy) = (bx - ax, by - ay);
    let len2 = vx * vx + vy * vy;

    let x0 = (seg.from.x.min(seg.to.x) - reach).max(0);
    let x1 = (seg.from.x.max(seg.to.x) + reach).min(fb.width as i32 - 1);
    let y0 = (seg.from.y.min(seg.to.y) - reach).max(0);
    let y1 = (seg.from.y.max(seg.to.y) + reach).min(fb.height as i32 - 1);

    let c = seg.color.packed();
    for y in y0..=y1 {
        for x in x0..=x1 {
            let (px, py) = (x as f32 - ax, y as f32 - ay);
            // projection of the pixel onto the segment, clamped to its ends
            let t = if len2 > 0.0 { ((px * vx + py * vy) / len2).clamp(0.0, 1.0) } else { 0.0 };
            let (dx, dy) = (px - t * vx, py - t * vy);
            if dx * dx + dy * dy <= r * r {
                fb.pixels[y as usize * fb.width + x as usize] = c;
            }
        }
    }
}

/// Copy `src` onto `dst` with its top-left corner at (x, y), clipped to `dst`.
pub fn blit(dst: &mut FrameBuffer, src: &FrameBuffer, x: usize, y: usize) {
    if x >= dst.width || y >= dst.height {
        return;
    }
    let w = src.width.min(dst.width - x);
    let h = src.height.min(dst.height - y);
    for row in 0..h {
        let s = row * src.width;
        let d = (y + row) * dst.width + x;
        dst.pixels[d..d + w].copy_from_slice(&src.pixels[s..s + w]);
    }
}

/* ---------- 5x7 bitmap font (ASCII subset for "MARKER | FPS: 29.9") ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Letters used by tool names and the FPS tag
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),

        // Punctuation: space, vertical bar, colon, dot
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y), with a 1-pixel black shadow for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (offset, c) in [(1, 0x0000_0000), (0, color)] {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..5 {
                    if (rowbits & (1 << (4 - rx))) != 0 {
                        put_pixel(fb, x + rx as i32 + offset, y + ry as i32 + offset, c);
                    }
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs; each glyph is 5x7 with 1-pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    fn blank(w: usize, h: usize) -> FrameBuffer {
        FrameBuffer::filled(w, h, Rgb::BLACK)
    }

    #[test]
    fn segment_covers_its_body_and_caps() {
        let mut fb = blank(100, 100);
        let seg = Segment { from: Point::new(20, 50), to: Point::new(80, 50), color: RED, thickness: 10 };
        draw_segment(&mut fb, &seg);
        assert_eq!(fb.get(50, 50), Some(RED.packed()));
        assert_eq!(fb.get(50, 45), Some(RED.packed()));
        assert_eq!(fb.get(50, 44), Some(0));
        assert_eq!(fb.get(16, 50), Some(RED.packed())); // round cap
        assert_eq!(fb.get(14, 50), Some(0));
        assert_eq!(fb.get(20, 40), Some(0));
    }

    #[test]
    fn zero_length_segment_is_a_dot() {
        let mut fb = blank(40, 40);
        let p = Point::new(20, 20);
        draw_segment(&mut fb, &Segment { from: p, to: p, color: RED, thickness: 15 });
        assert_eq!(fb.get(20, 20), Some(RED.packed()));
        assert_eq!(fb.get(27, 20), Some(RED.packed()));
        assert_eq!(fb.get(29, 20), Some(0));
    }

    #[test]
    fn segment_off_screen_is_clipped() {
        let mut fb = blank(10, 10);
        let seg = Segment { from: Point::new(-50, 5), to: Point::new(200, 5), color: RED, thickness: 3 };
        draw_segment(&mut fb, &seg);
        assert!((0..10).all(|x| fb.get(x, 5) == Some(RED.packed())));
        assert_eq!(fb.get(0, 0), Some(0));
    }

    #[test]
    fn rect_accepts_corners_in_any_order() {
        let mut fb = blank(20, 20);
        fill_rect(&mut fb, Point::new(10, 15), Point::new(5, -3), RED);
        assert_eq!(fb.get(5, 0), Some(RED.packed()));
        assert_eq!(fb.get(10, 15), Some(RED.packed()));
        assert_eq!(fb.get(11, 15), Some(0));
        assert_eq!(fb.get(7, 16), Some(0));
    }

    #[test]
    fn blit_clips_to_destination() {
        let mut dst = blank(8, 4);
        let src = FrameBuffer::filled(6, 6, RED);
        blit(&mut dst, &src, 4, 1);
        assert_eq!(dst.get(3, 1), Some(0));
        assert_eq!(dst.get(4, 1), Some(RED.packed()));
        assert_eq!(dst.get(7, 3), Some(RED.packed()));
        assert_eq!(dst.get(4, 0), Some(0));
    }

    #[test]
    fn circle_is_round() {
        let mut fb = blank(40, 40);
        fill_circle(&mut fb, Point::new(20, 20), 5, RED);
        assert_eq!(fb.get(25, 20), Some(RED.packed()));
        assert_eq!(fb.get(24, 24), Some(0));
    }
}
