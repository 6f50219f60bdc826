// Turns Drawing samples into connected segments.
// The anchor is the last drawn point; None means the next sample starts a fresh stroke.

use crate::gesture::GestureState;
use crate::tools::ToolState;
use crate::types::{Point, Segment};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StrokeAnchor(Option<Point>);

impl StrokeAnchor {
    pub fn unset() -> Self {
        Self(None)
    }

    pub fn get(&self) -> Option<Point> {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn reset(&mut self) {
        self.0 = None;
    }

    /// Feed one tick. Leaving Drawing clears the anchor; the first Drawing
    /// sample only plants it; later samples connect anchor -> pointer.
    pub fn track(&mut self, gesture: GestureState, pointer: Point, tools: &ToolState) -> Option<Segment> {
        if gesture != GestureState::Drawing {
            self.reset();
            return None;
        }
        let from = self.0.replace(pointer)?;
        Some(Segment {
            from,
            to: pointer,
            color: tools.draw_color(),
            thickness: tools.thickness(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{Tool, BACKGROUND, ERASER_THICKNESS, SWATCHES};

    const D: GestureState = GestureState::Drawing;
    const S: GestureState = GestureState::Selecting;
    const N: GestureState = GestureState::Neutral;

    #[test]
    fn neutral_then_two_drawing_samples() {
        let tools = ToolState::default();
        let mut anchor = StrokeAnchor::unset();

        assert_eq!(anchor.track(N, Point::new(5, 5), &tools), None);
        assert_eq!(anchor.track(D, Point::new(300, 300), &tools), None);
        assert_eq!(anchor.get(), Some(Point::new(300, 300)));

        let seg = anchor.track(D, Point::new(310, 310), &tools).unwrap();
        assert_eq!(seg.from, Point::new(300, 300));
        assert_eq!(seg.to, Point::new(310, 310));
        assert_eq!(seg.color, SWATCHES[0]);
        assert_eq!(seg.thickness, 15);
        assert_eq!(anchor.get(), Some(Point::new(310, 310)));
    }

    #[test]
    fn first_sample_after_any_break_draws_nothing() {
        let tools = ToolState::default();
        let runs: [&[GestureState]; 4] = [
            &[D, D, S, D],
            &[D, N, D],
            &[S, S, D],
            &[D, D, D, N, N, D],
        ];
        for run in runs {
            let mut anchor = StrokeAnchor::unset();
            let mut prev = None;
            for (i, &g) in run.iter().enumerate() {
                let p = Point::new(100 + i as i32 * 7, 200);
                let seg = anchor.track(g, p, &tools);
                match (prev, g) {
                    (Some(D), D) => assert!(seg.is_some(), "run {run:?} tick {i}"),
                    _ => assert!(seg.is_none(), "run {run:?} tick {i}"),
                }
                prev = Some(g);
            }
        }
    }

    #[test]
    fn leaving_drawing_clears_anchor() {
        let tools = ToolState::default();
        let mut anchor = StrokeAnchor::unset();
        anchor.track(D, Point::new(1, 2), &tools);
        assert!(anchor.is_set());
        anchor.track(S, Point::new(1, 2), &tools);
        assert!(!anchor.is_set());
    }

    #[test]
    fn eraser_segments_use_background() {
        let tools = ToolState::new(Tool::Eraser, 2);
        let mut anchor = StrokeAnchor::unset();
        anchor.track(D, Point::new(0, 0), &tools);
        let seg = anchor.track(D, Point::new(4, 0), &tools).unwrap();
        assert_eq!(seg.color, BACKGROUND);
        assert_eq!(seg.thickness, ERASER_THICKNESS);
    }

    #[test]
    fn origin_is_a_real_anchor() {
        let tools = ToolState::default();
        let mut anchor = StrokeAnchor::unset();
        anchor.track(D, Point::new(0, 0), &tools);
        let seg = anchor.track(D, Point::new(3, 3), &tools);
        assert_eq!(seg.map(|s| s.from), Some(Point::new(0, 0)));
    }
}
