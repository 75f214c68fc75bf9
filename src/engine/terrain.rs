//! Voxel-space terrain rasterizer.
//!
//! For every depth slice (nearest first) the camera sweeps a world-space
//! segment across the screen width. Each column samples the terrain under
//! its point of that segment, projects the elevation to a screen row and
//! paints upward to the column's occlusion line if anything is left to show.

use glam::Vec2;

use crate::{
    engine::{
        horizon::HorizonBuffer,
        projection::{RenderParams, to_row},
        slices::DepthSlices,
    },
    renderer::{Renderer, Rgba},
    world::{CameraState, Terrain},
};

/// Owns the per-frame scratch state; reuse one instance across frames.
#[derive(Clone, Debug, Default)]
pub struct TerrainRasterizer {
    params: RenderParams,
    horizon: HorizonBuffer,
}

/// World-space sample point marching left to right across one slice.
#[derive(Clone, Copy)]
struct SliceCursor {
    p: Vec2,
    d: Vec2,
}

impl SliceCursor {
    fn new(camera: &CameraState, z: f32, width: usize) -> Self {
        let (left, right) = camera.slice_endpoints(z);
        Self {
            p: left,
            d: (right - left) / width as f32,
        }
    }

    #[inline(always)]
    fn advance(&mut self) {
        self.p += self.d;
    }
}

impl TerrainRasterizer {
    pub fn new(params: RenderParams) -> Self {
        Self {
            params,
            horizon: HorizonBuffer::default(),
        }
    }

    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    /// Occlusion state left by the last [`render`](Self::render).
    pub fn horizon(&self) -> &HorizonBuffer {
        &self.horizon
    }

    /// Rasterize one frame of `terrain` seen from `camera` into `target`.
    ///
    /// The horizon buffer is reset first, so nothing carries over between
    /// frames. `target` must already be in a frame (`begin_frame`).
    pub fn render<R: Renderer>(
        &mut self,
        camera: &CameraState,
        terrain: &Terrain,
        width: usize,
        height: usize,
        target: &mut R,
    ) {
        self.horizon.reset(width, height);
        if width == 0 {
            return;
        }

        for z in DepthSlices::new(self.params.max_distance) {
            let mut cur = SliceCursor::new(camera, z, width);
            for x in 0..width {
                let (elevation, color) = terrain.sample(cur.p);
                let row = to_row(self.params.project(elevation as f32, z));
                if let Some((top, bottom)) = self.horizon.visible_span(x, row) {
                    target.draw_vertical_segment(x, top, bottom, color);
                }
                cur.advance();
            }
        }
    }

    /// `begin_frame` → [`render`](Self::render) → `end_frame` in one call.
    pub fn draw_frame<R, F>(
        &mut self,
        renderer: &mut R,
        width: usize,
        height: usize,
        camera: &CameraState,
        terrain: &Terrain,
        submit: F,
    ) where
        R: Renderer,
        F: FnOnce(&[Rgba], usize, usize),
    {
        renderer.begin_frame(width, height);
        self.render(camera, terrain, width, height, renderer);
        renderer.end_frame(submit);
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
