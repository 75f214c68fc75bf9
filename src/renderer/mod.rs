//! Rendering abstraction layer.
//!
//! *The terrain rasterizer never touches a pixel buffer directly.*
//! It issues one vertical segment per visible column slice and hands it to a
//! type that implements [`Renderer`].
//!
//! * Back-ends own clipping: segments may start above the screen or end
//!   below it, and empty segments are legal.
//! * [`software::Software`] is the CPU frame-buffer back-end used by the
//!   viewer and by the tests.

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// Sky colour cleared behind the terrain every frame.
pub const SKY: Rgba = 0x00_2064C8;

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Paint rows `y_top .. y_bottom` of column `x` with `color`.
    ///
    /// Must no-op when `y_top >= y_bottom` and clip rows outside
    /// `0 .. height`.
    fn draw_vertical_segment(&mut self, x: usize, y_top: i32, y_bottom: i32, color: Rgba);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Software caller passes `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Split 0x00RRGGBB into its channels.
#[inline]
pub fn unpack_rgb(c: Rgba) -> [u8; 3] {
    [(c >> 16) as u8, (c >> 8) as u8, c as u8]
}

/// Pack channels into 0x00RRGGBB.
#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> Rgba {
    (r as Rgba) << 16 | (g as Rgba) << 8 | b as Rgba
}

pub mod software;

pub use software::Software;
