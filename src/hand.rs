//! Hand landmarks and the detector seam.
//!
//! A detector reports one hand as 21 labelled keypoints in frame pixels
//! (0 = wrist, 4/8/12/16/20 = thumb..pinky tips). The drawing core only reads
//! the index tip (8), the middle tip (12) and the raised-finger vector.

use crate::types::{FrameBuffer, Point};

pub const LANDMARK_COUNT: usize = 21;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;

/// Tip landmark per finger, thumb first.
const TIP_IDS: [usize; 5] = [4, 8, 12, 16, 20];

/// One raised/lowered flag per finger: thumb, index, middle, ring, pinky.
pub type FingerVector = [bool; 5];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Landmark {
    pub id: usize,
    pub x: i32,
    pub y: i32,
}

impl Landmark {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hand {
    pub landmarks: Vec<Landmark>,
    /// Detection confidence in [0, 1].
    pub score: f32,
}

impl Hand {
    pub fn index_tip(&self) -> Option<Point> {
        self.landmarks.get(INDEX_TIP).map(Landmark::point)
    }

    pub fn middle_tip(&self) -> Option<Point> {
        self.landmarks.get(MIDDLE_TIP).map(Landmark::point)
    }

    pub fn fingers_up(&self) -> FingerVector {
        fingers_up(&self.landmarks)
    }
}

/// Which fingers are extended, judged from landmark geometry.
///
/// Thumb: tip right of the joint below it (mirrored right hand).
/// Others: tip above the PIP joint two landmarks below it.
/// An incomplete landmark set reports every finger down.
pub fn fingers_up(landmarks: &[Landmark]) -> FingerVector {
    let mut fingers = [false; 5];
    if landmarks.len() < LANDMARK_COUNT {
        return fingers;
    }
    fingers[0] = landmarks[TIP_IDS[0]].x > landmarks[TIP_IDS[0] - 1].x;
    for f in 1..5 {
        let tip = TIP_IDS[f];
        fingers[f] = landmarks[tip].y < landmarks[tip - 2].y;
    }
    fingers
}

/// Anything that can find a hand in a frame.
pub trait HandTracker {
    /// The most prominent hand in `frame`, or None when no hand is visible.
    fn detect(&mut self, frame: &FrameBuffer) -> Option<Hand>;
}

/// Pointer sample taken from the display window once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerInput {
    pub pos: Option<Point>,
    pub left: bool,
    pub right: bool,
}

/// A tracker that turns the window pointer into a synthetic hand.
///
/// Left button raises the index finger, right button raises index and middle,
/// no button makes a fist. A pointer outside the window means no hand.
#[derive(Default)]
pub struct PointerHand {
    input: PointerInput,
}

impl PointerHand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, input: PointerInput) {
        self.input = input;
    }
}

impl HandTracker for PointerHand {
    fn detect(&mut self, _frame: &FrameBuffer) -> Option<Hand> {
        let pos = self.input.pos?;
        let index = self.input.left || self.input.right;
        let middle = self.input.right;
        Some(synthetic_hand(pos, [false, index, middle, false, false]))
    }
}

/// Build a 21-point hand whose index tip sits at `tip` and whose finger
/// geometry makes `fingers_up` report exactly `raised` (thumb is always down).
pub fn synthetic_hand(tip: Point, raised: FingerVector) -> Hand {
    let (px, py) = (tip.x, tip.y);
    let mut landmarks: Vec<Landmark> = (0..LANDMARK_COUNT)
        .map(|id| Landmark { id, x: px + 45, y: py + 120 })
        .collect();
    let mut set = |id: usize, x: i32, y: i32| landmarks[id] = Landmark { id, x, y };

    set(0, px + 45, py + 160);
    // thumb: cmc, mcp, ip, tip; tip left of ip means "down"
    set(1, px - 10, py + 140);
    set(2, px - 25, py + 120);
    set(3, px - 40, py + 100);
    set(4, px - 50, py + 95);

    for f in 1..5 {
        let tip_id = TIP_IDS[f];
        let cx = px + (f as i32 - 1) * 30;
        if raised[f] {
            set(tip_id - 3, cx, py + 90);
            set(tip_id - 2, cx, py + 50);
            set(tip_id - 1, cx, py + 25);
            set(tip_id, cx, py);
        } else {
            set(tip_id - 3, cx, py + 90);
            set(tip_id - 2, cx, py + 70);
            set(tip_id - 1, cx, py + 85);
            set(tip_id, cx, py + 95);
        }
    }

    Hand { landmarks, score: 1.0 }
}
