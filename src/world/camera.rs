use glam::{Vec2, vec2};

/// Viewer pose over the height field.
///
/// * Only position and **heading** are simulated; eye height and pitch are
///   render constants (see `RenderParams`).
/// * Heading 0 looks towards −Y; positive heading turns the view to the left.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CameraState {
    pub pos: Vec2, // world units, one unit = one map cell
    pub heading: f32, // radians
}

impl CameraState {
    pub fn new(pos: Vec2, heading: f32) -> Self {
        Self { pos, heading }
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit vector pointing where the camera looks.
    #[inline(always)]
    pub fn forward(self) -> Vec2 {
        let (s, c) = self.heading.sin_cos();
        vec2(-s, -c)
    }

    /// Unit vector pointing to the right of the view (screen +x).
    #[inline(always)]
    pub fn right(self) -> Vec2 {
        let (s, c) = self.heading.sin_cos();
        vec2(c, -s)
    }

    /// World-space endpoints of the slice swept across the screen at depth
    /// `z`: a segment of length `2z` centred `z` units ahead.
    #[inline]
    pub fn slice_endpoints(self, z: f32) -> (Vec2, Vec2) {
        let centre = self.pos + self.forward() * z;
        let half = self.right() * z;
        (centre - half, centre + half)
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Pan along the world axes, independent of heading.
    pub fn pan(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// Rotate in place (positive = turn left).
    pub fn turn(&mut self, delta: f32) {
        self.heading += delta;
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
