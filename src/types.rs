// Core types shared by the gesture, canvas and rendering steps.

use image::RgbImage;

/// Packed frame: each pixel is 0x00RRGGBB, which is what minifb presents directly.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A frame filled with one color.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self { width, height, pixels: vec![color.packed(); width * height] }
    }

    /// Pack an `image` RGB buffer into 0x00RRGGBB pixels.
    pub fn from_rgb_image(img: &RgbImage) -> Self {
        let (w, h) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| Rgb::new(p[0], p[1], p[2]).packed())
            .collect();
        Self { width: w as usize, height: h as usize, pixels }
    }

    /// Unpack into an `image` RGB buffer (for resizing with `imageops`).
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let c = Rgb::unpack(self.pixels[y as usize * self.width + x as usize]);
            image::Rgb([c.r, c.g, c.b])
        })
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Pixel at (x, y), or None outside the frame.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub const fn unpack(px: u32) -> Self {
        Self::new(((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8)
    }

    /// BT.601 luma in 14-bit fixed point, rounded (same weights as a BGR→GRAY convert).
    #[inline]
    pub fn luminance(self) -> u8 {
        let y = self.r as u32 * 4899 + self.g as u32 * 9617 + self.b as u32 * 1868;
        ((y + (1 << 13)) >> 14) as u8
    }
}

/// A pixel position in frame coordinates (may lie outside the frame).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One straight stroke piece to rasterize into the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub color: Rgb,
    pub thickness: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_and_unpack_agree() {
        let c = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(c.packed(), 0x0012_3456);
        assert_eq!(Rgb::unpack(0x0012_3456), c);
    }

    #[test]
    fn luminance_matches_bt601() {
        assert_eq!(Rgb::BLACK.luminance(), 0);
        assert_eq!(Rgb::WHITE.luminance(), 255);
        assert_eq!(Rgb::new(50, 50, 50).luminance(), 50);
        // 0.299*219 + 0.587*51 + 0.114*73 = 103.7
        assert_eq!(Rgb::new(219, 51, 73).luminance(), 104);
    }

    #[test]
    fn from_rgb_image_keeps_row_order() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(1, 0, image::Rgb([255, 0, 0]));
        img.put_pixel(0, 1, image::Rgb([0, 0, 255]));
        let fb = FrameBuffer::from_rgb_image(&img);
        assert_eq!(fb.dimensions(), (2, 2));
        assert_eq!(fb.get(1, 0), Some(0x00FF_0000));
        assert_eq!(fb.get(0, 1), Some(0x0000_00FF));
        assert_eq!(fb.get(2, 0), None);
    }
}
