//! Per-frame terrain rasterization: projection, occlusion and the
//! near-to-far slice sweep.

pub mod horizon;
pub mod projection;
pub mod slices;
pub mod terrain;

pub use horizon::HorizonBuffer;
pub use projection::{RenderParams, project};
pub use slices::DepthSlices;
pub use terrain::TerrainRasterizer;
