mod input;

pub use input::{InputFlags, PAN_STEP, TURN_STEP, apply_input};
