//! Voxel-space terrain renderer.
//!
//! A height map and a colour map are swept column by column from a camera
//! hovering over them, nearest depth slice first, with a per-column horizon
//! line culling everything a nearer slice already covers.

pub mod assets;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;
