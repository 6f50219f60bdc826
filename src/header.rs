//! Menu header thumbnails: loaded once, one drawn over the menu strip each frame.
//!
//! Files are read in filename order. The expected set is nine images:
//! brush x 4 colors, marker x 4 colors, then the eraser.

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::draw::blit;
use crate::error::Error;
use crate::tools::Tool;
use crate::types::FrameBuffer;

pub const HEADER_WIDTH: u32 = 1280;
pub const HEADER_HEIGHT: u32 = 125;

pub const MARKER_OFFSET: usize = 4;
pub const ERASER_HEADER: usize = 8;

/// Header index for a tool/color pair. Indices past the loaded set fall back to 0.
pub fn select_header_image(tool: Tool, color_index: usize, loaded: usize) -> usize {
    let index = match tool {
        Tool::Eraser => ERASER_HEADER,
        Tool::Brush => color_index,
        Tool::Marker => color_index + MARKER_OFFSET,
    };
    if index < loaded { index } else { 0 }
}

pub struct HeaderSet {
    images: Vec<RgbImage>,
    // last (index, width) scaled for the live frame
    scaled: Option<(usize, usize, FrameBuffer)>,
}

impl HeaderSet {
    /// Load every decodable image in `dir`, resized to the canonical header size.
    /// Unreadable files are skipped with a warning; an empty result is an error.
    pub fn load(dir: &Path) -> Result<Self, Error> {
        let entries = fs::read_dir(dir).map_err(|source| Error::HeaderDir {
            dir: dir.to_path_buf(),
            source,
        })?;
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.is_file())
            .collect();
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut images = Vec::with_capacity(paths.len());
        for path in &paths {
            match image::open(path) {
                Ok(img) => {
                    let rgb = img.to_rgb8();
                    images.push(imageops::resize(&rgb, HEADER_WIDTH, HEADER_HEIGHT, FilterType::Triangle));
                }
                Err(e) => log::warn!("Skipping header image {}: {e}", path.display()),
            }
        }

        if images.is_empty() {
            return Err(Error::NoHeaderImages(dir.to_path_buf()));
        }
        log::info!("Loaded {} header images from {}", images.len(), dir.display());
        Ok(Self::from_images(images))
    }

    pub fn from_images(images: Vec<RgbImage>) -> Self {
        Self { images, scaled: None }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn index_for(&self, tool: Tool, color_index: usize) -> usize {
        select_header_image(tool, color_index, self.images.len())
    }

    /// Header `index` scaled to `width` x 125. Cached until the index or width changes.
    pub fn scaled(&mut self, index: usize, width: usize) -> Option<&FrameBuffer> {
        let index = if index < self.images.len() { index } else { 0 };
        let stale = !matches!(&self.scaled, Some((i, w, _)) if *i == index && *w == width);
        if stale {
            let src = self.images.get(index)?;
            let img = if src.width() as usize == width {
                src.clone()
            } else {
                imageops::resize(src, width as u32, HEADER_HEIGHT, FilterType::Triangle)
            };
            self.scaled = Some((index, width, FrameBuffer::from_rgb_image(&img)));
        }
        self.scaled.as_ref().map(|(_, _, fb)| fb)
    }

    /// Draw header `index` across the top of `frame`.
    pub fn overlay(&mut self, frame: &mut FrameBuffer, index: usize) {
        let width = frame.width;
        if let Some(header) = self.scaled(index, width) {
            blit(frame, header, 0, 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;

    fn solid(w: u32, h: u32, c: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(w, h, image::Rgb(c))
    }

    #[test]
    fn header_index_per_tool() {
        assert_eq!(select_header_image(Tool::Brush, 2, 9), 2);
        assert_eq!(select_header_image(Tool::Marker, 2, 9), 6);
        assert_eq!(select_header_image(Tool::Eraser, 3, 9), 8);
    }

    #[test]
    fn out_of_range_header_falls_back_to_first() {
        assert_eq!(select_header_image(Tool::Eraser, 0, 5), 0);
        assert_eq!(select_header_image(Tool::Marker, 3, 7), 0);
        assert_eq!(select_header_image(Tool::Brush, 12, 9), 0);
    }

    #[test]
    fn loads_sorted_and_skips_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        solid(64, 10, [255, 0, 0]).save(dir.path().join("2.png")).unwrap();
        solid(64, 10, [0, 0, 255]).save(dir.path().join("1.png")).unwrap();
        fs::write(dir.path().join("0.png"), b"not an image").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let mut set = HeaderSet::load(dir.path()).unwrap();
        assert_eq!(set.len(), 2);

        let first = set.scaled(0, HEADER_WIDTH as usize).unwrap();
        assert_eq!(first.dimensions(), (1280, 125));
        assert_eq!(first.get(640, 60), Some(Rgb::new(0, 0, 255).packed()));
        let second = set.scaled(1, HEADER_WIDTH as usize).unwrap();
        assert_eq!(second.get(0, 0), Some(Rgb::new(255, 0, 0).packed()));
    }

    #[test]
    fn zero_images_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.jpg"), b"\xff\xd8 nope").unwrap();
        assert!(matches!(HeaderSet::load(dir.path()), Err(Error::NoHeaderImages(_))));
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("Header");
        assert!(matches!(HeaderSet::load(&gone), Err(Error::HeaderDir { .. })));
    }

    #[test]
    fn overlay_scales_to_frame_width() {
        let mut set = HeaderSet::from_images(vec![solid(1280, 125, [10, 200, 30])]);
        let mut frame = FrameBuffer::filled(640, 480, Rgb::BLACK);
        set.overlay(&mut frame, 0);
        assert_eq!(frame.get(639, 124), Some(Rgb::new(10, 200, 30).packed()));
        assert_eq!(frame.get(0, 125), Some(0));

        // short frames clip the header
        let mut tiny = FrameBuffer::filled(100, 50, Rgb::BLACK);
        set.overlay(&mut tiny, 5);
        assert_eq!(tiny.get(99, 49), Some(Rgb::new(10, 200, 30).packed()));
    }
}
