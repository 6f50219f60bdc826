//! One drawing session: every piece of state that survives between frames.
//!
//! A tick runs strictly in order: fit canvas to frame, classify the hand,
//! resolve the menu (Selecting), track the stroke (Drawing), then composite.

use crate::canvas::{self, Canvas};
use crate::draw::{fill_circle, fill_rect};
use crate::gesture::{classify, GestureState};
use crate::hand::Hand;
use crate::menu::MenuLayout;
use crate::stroke::StrokeAnchor;
use crate::tools::ToolState;
use crate::types::{FrameBuffer, Point, Segment};

/// Radius of the fingertip marker drawn while in Drawing.
pub const CURSOR_RADIUS: i32 = 15;
/// Vertical padding of the selection highlight around the two fingertips.
pub const SELECTION_PAD: i32 = 25;

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub gesture: GestureState,
    pub segment: Option<Segment>,
    pub output: FrameBuffer,
}

pub struct Session {
    tools: ToolState,
    anchor: StrokeAnchor,
    canvas: Canvas,
    menu: MenuLayout,
    min_confidence: f32,
}

impl Session {
    pub fn new(width: usize, height: usize, min_confidence: f32) -> Self {
        Self {
            tools: ToolState::default(),
            anchor: StrokeAnchor::unset(),
            canvas: Canvas::new(width, height),
            menu: MenuLayout::default(),
            min_confidence,
        }
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn anchor(&self) -> StrokeAnchor {
        self.anchor
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Process one live frame. `frame` receives the cursor overlays; the
    /// returned output is the frame merged with the canvas.
    pub fn tick(&mut self, frame: &mut FrameBuffer, hand: Option<&Hand>) -> Tick {
        self.canvas.ensure_size(frame.width, frame.height);

        let hand = hand.filter(|h| h.score >= self.min_confidence);
        let tips = hand.and_then(|h| Some((h.index_tip()?, h.middle_tip()?, h.fingers_up())));

        let (gesture, segment) = match tips {
            Some((index, middle, fingers)) => {
                let gesture = classify(&fingers);
                let segment = self.apply(gesture, index, middle, frame);
                (gesture, segment)
            }
            None => {
                self.anchor.reset();
                (GestureState::Neutral, None)
            }
        };

        let output = canvas::merge(frame, &self.canvas);
        Tick { gesture, segment, output }
    }

    fn apply(&mut self, gesture: GestureState, index: Point, middle: Point, frame: &mut FrameBuffer) -> Option<Segment> {
        if gesture == GestureState::Selecting {
            let before = self.tools;
            self.tools = self.menu.resolve(index, self.tools);
            if self.tools != before {
                log::debug!(
                    "selected {} color {}",
                    self.tools.tool().name(),
                    self.tools.color_index()
                );
            }
            let top = Point::new(index.x, index.y - SELECTION_PAD);
            let bottom = Point::new(middle.x, middle.y + SELECTION_PAD);
            fill_rect(frame, top, bottom, self.tools.draw_color());
        }

        if gesture == GestureState::Drawing {
            fill_circle(frame, index, CURSOR_RADIUS, self.tools.draw_color());
        }

        let segment = self.anchor.track(gesture, index, &self.tools)?;
        self.canvas.paint(&segment);
        Some(segment)
    }
}
