// Finger vector -> gesture state. Pure and total over all 32 combinations.

use crate::hand::FingerVector;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    /// Index and middle raised: pointer hit-tests the menu strip.
    Selecting,
    /// Index raised, middle down: pointer paints.
    Drawing,
    Neutral,
}

pub const INDEX: usize = 1;
pub const MIDDLE: usize = 2;

pub fn classify(fingers: &FingerVector) -> GestureState {
    match (fingers[INDEX], fingers[MIDDLE]) {
        (true, true) => GestureState::Selecting,
        (true, false) => GestureState::Drawing,
        _ => GestureState::Neutral,
    }
}
