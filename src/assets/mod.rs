//! Image provider: turns bitmap files into terrain maps, and frames back
//! into bitmaps.

mod loader;

pub use loader::{
    AssetError, decode_color_map, decode_height_map, load_color_map, load_height_map,
    load_terrain, save_snapshot,
};
