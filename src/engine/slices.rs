//! Depth slicing schedule.
//!
//! Slices start one unit ahead of the eye and spread out with distance:
//! after each slice the step itself grows by [`STEP_GROWTH`].

pub const FIRST_DEPTH: f32 = 1.0;
pub const FIRST_STEP: f32 = 1.0;
pub const STEP_GROWTH: f32 = 0.005;

/// Where the sweep is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliceState {
    NotStarted,
    Slicing { z: f32, step: f32 },
    Done,
}

/// Iterator over slice depths `z`, nearest first, stopping before
/// `max_distance`. Every yielded depth is ≥ [`FIRST_DEPTH`].
#[derive(Clone, Debug)]
pub struct DepthSlices {
    state: SliceState,
    max_distance: f32,
}

impl DepthSlices {
    pub fn new(max_distance: f32) -> Self {
        Self {
            state: SliceState::NotStarted,
            max_distance,
        }
    }

    pub fn state(&self) -> SliceState {
        self.state
    }
}

impl Iterator for DepthSlices {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let (z, step) = match self.state {
            SliceState::NotStarted => (FIRST_DEPTH, FIRST_STEP),
            SliceState::Slicing { z, step } => (z + step, step + STEP_GROWTH),
            SliceState::Done => return None,
        };
        if z >= self.max_distance {
            self.state = SliceState::Done;
            return None;
        }
        self.state = SliceState::Slicing { z, step };
        Some(z)
    }
}

/// Depth of slice `n` (0-based) in closed form.
pub fn depth_of_slice(n: usize) -> f64 {
    let n = n as f64;
    FIRST_DEPTH as f64 + n * FIRST_STEP as f64 + STEP_GROWTH as f64 * n * (n - 1.0) / 2.0
}
