//! Persistent stroke canvas and the per-frame merge with live video.
//!
//! The canvas has no alpha plane. A canvas pixel counts as "drawn" when its
//! luminance is above `DRAWN_CUTOFF`, so the background must stay darker than
//! the cutoff and every stroke color brighter than it. Erasing is drawing
//! background-colored strokes, which makes pixels "undrawn" again.

use image::imageops::{self, FilterType};
use image::GrayImage;

use crate::draw::{blit, draw_segment};
use crate::tools::BACKGROUND;
use crate::types::{FrameBuffer, Rgb, Segment};

/// Luminance at or below this is background; above it is ink.
pub const DRAWN_CUTOFF: u8 = 50;

const PASS: u8 = 0xFF;
const BLOCK: u8 = 0x00;

pub struct Canvas {
    buf: FrameBuffer,
}

impl Canvas {
    /// Background-filled canvas of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { buf: FrameBuffer::filled(width, height, BACKGROUND) }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.buf
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.buf.dimensions()
    }

    /// Match the live frame size. Existing strokes keep their pixel positions;
    /// rows/columns that did not exist before are background.
    /// Returns true when the canvas was resized.
    pub fn ensure_size(&mut self, width: usize, height: usize) -> bool {
        if self.buf.dimensions() == (width, height) {
            return false;
        }
        let mut next = FrameBuffer::filled(width, height, BACKGROUND);
        blit(&mut next, &self.buf, 0, 0);
        log::debug!(
            "canvas resized {}x{} -> {}x{}",
            self.buf.width, self.buf.height, width, height
        );
        self.buf = next;
        true
    }

    pub fn paint(&mut self, seg: &Segment) {
        draw_segment(&mut self.buf, seg);
    }

    /// Binary pass-through mask for the live frame: 0 where the canvas has ink,
    /// 255 where it is background.
    pub fn pass_mask(&self) -> GrayImage {
        let (w, h) = (self.buf.width as u32, self.buf.height as u32);
        GrayImage::from_fn(w, h, |x, y| {
            let px = self.buf.pixels[y as usize * self.buf.width + x as usize];
            if Rgb::unpack(px).luminance() > DRAWN_CUTOFF {
                image::Luma([BLOCK])
            } else {
                image::Luma([PASS])
            }
        })
    }
}

/// Composite strokes over live video: `(live AND mask) OR canvas`.
///
/// Where the canvas has ink the output is the ink; elsewhere it is the live
/// pixel ORed with the (dark) background. If the live frame and canvas sizes
/// disagree, the mask and canvas are scaled (nearest neighbour) to the live size.
pub fn merge(live: &FrameBuffer, canvas: &Canvas) -> FrameBuffer {
    let (w, h) = live.dimensions();
    let mut mask = canvas.pass_mask();
    let mut ink = canvas.frame().clone();

    if canvas.dimensions() != (w, h) {
        mask = imageops::resize(&mask, w as u32, h as u32, FilterType::Nearest);
        let scaled = imageops::resize(&ink.to_rgb_image(), w as u32, h as u32, FilterType::Nearest);
        ink = FrameBuffer::from_rgb_image(&scaled);
    }

    let pixels = live
        .pixels
        .iter()
        .zip(mask.as_raw())
        .zip(&ink.pixels)
        .map(|((&lp, &m), &cp)| {
            let pass = if m == PASS { 0x00FF_FFFF } else { 0 };
            (lp & pass) | cp
        })
        .collect();

    FrameBuffer { width: w, height: h, pixels }
}
