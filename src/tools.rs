// Drawing tools, the four preset swatches, and the per-session tool state.

use crate::types::Rgb;

/// Canvas background. Must stay darker than the compositing cutoff (see canvas.rs).
pub const BACKGROUND: Rgb = Rgb::BLACK;

/// Preset stroke colors, selected by index 0..=3 from the menu strip.
pub const SWATCHES: [Rgb; 4] = [
    Rgb::new(97, 196, 230), // blue
    Rgb::new(50, 50, 50),   // gray
    Rgb::new(219, 51, 73),  // red
    Rgb::new(94, 23, 235),  // purple
];

pub const BRUSH_THICKNESS: u32 = 15;
pub const MARKER_THICKNESS: u32 = 35;
pub const ERASER_THICKNESS: u32 = 70;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Brush,
    Marker,
    Eraser,
}

impl Tool {
    /// Stroke width in pixels.
    pub fn thickness(self) -> u32 {
        match self {
            Tool::Brush => BRUSH_THICKNESS,
            Tool::Marker => MARKER_THICKNESS,
            Tool::Eraser => ERASER_THICKNESS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::Brush => "BRUSH",
            Tool::Marker => "MARKER",
            Tool::Eraser => "ERASER",
        }
    }
}

/// Swatch RGB for an index; out-of-range indices fall back to swatch 0.
pub fn swatch(index: usize) -> Rgb {
    SWATCHES.get(index).copied().unwrap_or(SWATCHES[0])
}

/// What the pointer will draw with. `draw_color` is always derived, never set directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolState {
    tool: Tool,
    color_index: usize,
    draw_color: Rgb,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(Tool::Brush, 0)
    }
}

impl ToolState {
    pub fn new(tool: Tool, color_index: usize) -> Self {
        let color_index = if color_index < SWATCHES.len() { color_index } else { 0 };
        let mut state = Self { tool, color_index, draw_color: SWATCHES[color_index] };
        state.recompute_draw_color();
        state
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    pub fn draw_color(&self) -> Rgb {
        self.draw_color
    }

    pub fn thickness(&self) -> u32 {
        self.tool.thickness()
    }

    pub(crate) fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub(crate) fn set_color_index(&mut self, index: usize) {
        if index < SWATCHES.len() {
            self.color_index = index;
        }
    }

    /// Eraser paints background; every other tool paints the active swatch.
    pub(crate) fn recompute_draw_color(&mut self) {
        self.draw_color = match self.tool {
            Tool::Eraser => BACKGROUND,
            _ => swatch(self.color_index),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_starts_with_brush_and_first_swatch() {
        let s = ToolState::default();
        assert_eq!(s.tool(), Tool::Brush);
        assert_eq!(s.color_index(), 0);
        assert_eq!(s.draw_color(), SWATCHES[0]);
        assert_eq!(s.thickness(), BRUSH_THICKNESS);
    }

    #[test]
    fn eraser_forces_background_color() {
        let s = ToolState::new(Tool::Eraser, 3);
        assert_eq!(s.color_index(), 3);
        assert_eq!(s.draw_color(), BACKGROUND);
        assert_eq!(s.thickness(), ERASER_THICKNESS);
    }

    #[test]
    fn thickness_is_distinct_per_tool() {
        let t = [Tool::Brush.thickness(), Tool::Marker.thickness(), Tool::Eraser.thickness()];
        assert_eq!(t, [15, 35, 70]);
    }

    #[test]
    fn out_of_range_index_falls_back() {
        assert_eq!(swatch(9), SWATCHES[0]);
        assert_eq!(ToolState::new(Tool::Marker, 7).color_index(), 0);
    }

    #[test]
    fn palette_is_brighter_than_background() {
        // The compositor only treats pixels above luminance 50 as drawn.
        for (i, c) in SWATCHES.iter().enumerate() {
            if i == 1 {
                continue; // gray sits exactly on the cutoff
            }
            assert!(c.luminance() > 50, "swatch {i} too dark");
        }
        assert!(BACKGROUND.luminance() <= 50);
    }
}
