//! ---------------------------------------------------------------------------
//! Software (CPU) column back-end
//!
//! * Fills a `Vec<u32>` frame-buffer in **0x00RRGGBB** format.
//! * The terrain rasterizer feeds segments near-to-far and does its own
//!   occlusion, so this back-end only clips to the screen rectangle.
//! ---------------------------------------------------------------------------

use crate::renderer::{Renderer, Rgba, SKY};

/// Column-oriented frame-buffer.
pub struct Software {
    scratch: Vec<Rgba>,
    clear: Rgba,
    width: usize,
    height: usize,
}

impl Default for Software {
    fn default() -> Self {
        Self::with_clear_color(SKY)
    }
}

impl Software {
    pub fn with_clear_color(clear: Rgba) -> Self {
        Self {
            scratch: Vec::new(),
            clear,
            width: 0,
            height: 0,
        }
    }

    /// The last finished (or in-progress) frame, row-major.
    pub fn pixels(&self) -> &[Rgba] {
        &self.scratch
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.scratch[y * self.width + x]
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }
        self.scratch.fill(self.clear);
    }

    fn draw_vertical_segment(&mut self, x: usize, y_top: i32, y_bottom: i32, color: Rgba) {
        if x >= self.width {
            return;
        }
        /* clip to integer pixel rows */
        let y0 = y_top.max(0);
        let y1 = y_bottom.min(self.height as i32);
        if y0 >= y1 {
            return;
        }
        for y in y0 as usize..y1 as usize {
            self.scratch[y * self.width + x] = color;
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
