/// Per-column occlusion line: the topmost row already painted.
///
/// Slices arrive near-to-far, so within a frame every entry only ever moves
/// up the screen. Allocated once, [`reset`](Self::reset) every frame.
#[derive(Clone, Debug, Default)]
pub struct HorizonBuffer {
    rows: Vec<i32>,
    floor: i32,
}

impl HorizonBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        let mut hb = Self::default();
        hb.reset(width, height);
        hb
    }

    /// Open every column down to the bottom of a `width × height` screen.
    /// Resizes when the resolution changed.
    pub fn reset(&mut self, width: usize, height: usize) {
        self.floor = height as i32;
        self.rows.resize(width, self.floor);
        self.rows.fill(self.floor);
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn row(&self, column: usize) -> i32 {
        self.rows[column]
    }

    pub fn rows(&self) -> &[i32] {
        &self.rows
    }

    /// Visible span of a slice whose top lands on `candidate_top`.
    ///
    /// Returns `Some((top, bottom))` with `bottom` exclusive and raises the
    /// column's occlusion line to `top`; returns `None` and leaves the column
    /// untouched when a nearer slice already covers that row.
    #[inline]
    pub fn visible_span(&mut self, column: usize, candidate_top: i32) -> Option<(i32, i32)> {
        let stored = &mut self.rows[column];
        if candidate_top < *stored {
            let span = (candidate_top, *stored);
            *stored = candidate_top;
            Some(span)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_opens_every_column() {
        let hb = HorizonBuffer::new(5, 400);
        assert_eq!(hb.rows(), &[400; 5]);
    }

    #[test]
    fn visible_span_raises_line() {
        let mut hb = HorizonBuffer::new(2, 400);
        assert_eq!(hb.visible_span(0, 300), Some((300, 400)));
        assert_eq!(hb.row(0), 300);
        assert_eq!(hb.visible_span(0, 120), Some((120, 300)));
        assert_eq!(hb.row(0), 120);
        assert_eq!(hb.row(1), 400);
    }

    #[test]
    fn occluded_or_equal_rows_are_culled() {
        let mut hb = HorizonBuffer::new(1, 400);
        hb.visible_span(0, 200);
        assert_eq!(hb.visible_span(0, 200), None);
        assert_eq!(hb.visible_span(0, 350), None);
        assert_eq!(hb.visible_span(0, 1_960), None);
        assert_eq!(hb.row(0), 200);
    }

    #[test]
    fn negative_rows_are_compared_as_is() {
        let mut hb = HorizonBuffer::new(1, 400);
        assert_eq!(hb.visible_span(0, -50), Some((-50, 400)));
        assert_eq!(hb.row(0), -50);
        assert_eq!(hb.visible_span(0, -10), None);
    }

    #[test]
    fn rows_never_increase_within_a_frame() {
        let mut hb = HorizonBuffer::new(1, 400);
        let mut last = hb.row(0);
        for cand in [390, 395, 250, 251, 10, 399, -4, 7] {
            hb.visible_span(0, cand);
            assert!(hb.row(0) <= last);
            last = hb.row(0);
        }
        assert_eq!(last, -4);
    }

    #[test]
    fn reset_follows_resolution_changes() {
        let mut hb = HorizonBuffer::new(3, 100);
        hb.visible_span(2, 10);
        hb.reset(6, 50);
        assert_eq!(hb.rows(), &[50; 6]);
        hb.reset(2, 80);
        assert_eq!(hb.rows(), &[80; 2]);
    }
}
