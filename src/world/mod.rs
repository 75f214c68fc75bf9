mod camera;
mod map;

pub use camera::CameraState;

pub use map::{ColorMap, Grid, HeightMap, MapError, Raster, Terrain, sample, wrap_index};
