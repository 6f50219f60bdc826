//! Menu strip hit-testing.
//!
//! The top `STRIP_HEIGHT` rows of the frame hold four color bands and three
//! tool bands. Band bounds are exclusive, so the pixel columns on a boundary
//! (and the gaps between groups) select nothing.

use crate::tools::{Tool, ToolState};
use crate::types::Point;

pub const STRIP_HEIGHT: i32 = 125;

/// Horizontal pixel range, exclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    pub start: i32,
    pub end: i32,
}

impl Band {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn contains(&self, x: i32) -> bool {
        self.start < x && x < self.end
    }

    fn overlaps(&self, other: &Band) -> bool {
        self.start < other.end - 1 && other.start < self.end - 1
    }
}

/// Static band table for the menu strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuLayout {
    pub strip_height: i32,
    /// Band i selects swatch i.
    pub colors: [Band; 4],
    pub tools: [(Band, Tool); 3],
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self {
            strip_height: STRIP_HEIGHT,
            colors: [
                Band::new(0, 140),
                Band::new(140, 280),
                Band::new(280, 420),
                Band::new(420, 560),
            ],
            tools: [
                (Band::new(650, 800), Tool::Brush),
                (Band::new(800, 950), Tool::Marker),
                (Band::new(1050, 1280), Tool::Eraser),
            ],
        }
    }
}

impl MenuLayout {
    pub fn color_at(&self, x: i32) -> Option<usize> {
        self.colors.iter().position(|b| b.contains(x))
    }

    pub fn tool_at(&self, x: i32) -> Option<Tool> {
        self.tools.iter().find(|(b, _)| b.contains(x)).map(|&(_, t)| t)
    }

    /// True when no two bands share a selectable column.
    pub fn is_disjoint(&self) -> bool {
        let bands: Vec<Band> = self
            .colors
            .iter()
            .copied()
            .chain(self.tools.iter().map(|(b, _)| *b))
            .collect();
        bands
            .iter()
            .enumerate()
            .all(|(i, a)| bands[i + 1..].iter().all(|b| !a.overlaps(b)))
    }

    /// Apply a pointer position to the tool state.
    ///
    /// Outside the strip the state is returned unchanged. Inside it, a color
    /// band picks the swatch (and leaves the eraser for the brush), a tool band
    /// picks the tool, and the draw color is then derived from the result.
    pub fn resolve(&self, pointer: Point, state: ToolState) -> ToolState {
        if pointer.y >= self.strip_height {
            return state;
        }
        let mut next = state;

        if let Some(i) = self.color_at(pointer.x) {
            next.set_color_index(i);
            if next.tool() == Tool::Eraser {
                next.set_tool(Tool::Brush);
            }
        } else if let Some(tool) = self.tool_at(pointer.x) {
            next.set_tool(tool);
        }

        next.recompute_draw_color();
        next
    }
}
