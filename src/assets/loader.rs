// ──────────────────────────────────────────────────────────────────────────
// assets/loader.rs
//
//  *   colour bitmap  ── image::DynamicImage (RGB) ──>  world::ColorMap
//  *   height bitmap  ── palette indices / blue    ──>  world::HeightMap
//  *   frame buffer   ── image::RgbImage            ──>  BMP snapshot
// ──────────────────────────────────────────────────────────────────────────

use image::{DynamicImage, ImageFormat, RgbImage, codecs::bmp::BmpDecoder};
use std::{fs, io, io::Cursor, path::Path};
use thiserror::Error;

use crate::{
    renderer::{Rgba, pack_rgb, unpack_rgb},
    world::{ColorMap, HeightMap, MapError, Raster, Terrain},
};

/*──────────────────────────── Error type ───────────────────────────*/

#[derive(Error, Debug)]
pub enum AssetError {
    /// Underlying I/O failure – propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Map(#[from] MapError),
}

/*──────────────────────────── Decoding ─────────────────────────────*/

/// Surface colours of an in-memory BMP, palette already applied.
pub fn decode_color_map(bytes: &[u8]) -> Result<ColorMap, AssetError> {
    let rgb = image::load_from_memory_with_format(bytes, ImageFormat::Bmp)?.into_rgb8();
    let (w, h) = rgb.dimensions();
    let texels = rgb.pixels().map(|p| pack_rgb(p[0], p[1], p[2])).collect();
    Ok(ColorMap::new(w as usize, h as usize, texels)?)
}

/// Elevation of an in-memory BMP = low 8 bits of the stored pixel: the
/// palette index of a palettised image, the blue channel otherwise.
pub fn decode_height_map(bytes: &[u8]) -> Result<HeightMap, AssetError> {
    let mut decoder = BmpDecoder::new(Cursor::new(bytes))?;
    let palettised = decoder.get_palette().is_some();
    if palettised {
        decoder.set_indexed_color(true);
    }

    let img = DynamicImage::from_decoder(decoder)?;
    let ((w, h), texels) = if palettised {
        let ix = img.into_luma8();
        (ix.dimensions(), ix.into_raw())
    } else {
        let rgb = img.into_rgb8();
        (rgb.dimensions(), rgb.pixels().map(|p| p[2]).collect())
    };
    Ok(HeightMap::new(w as usize, h as usize, texels)?)
}

pub fn load_color_map<P: AsRef<Path>>(path: P) -> Result<ColorMap, AssetError> {
    let map = decode_color_map(&fs::read(path.as_ref())?)?;
    log::debug!("colour map {}: {}x{}", path.as_ref().display(), map.width(), map.height());
    Ok(map)
}

pub fn load_height_map<P: AsRef<Path>>(path: P) -> Result<HeightMap, AssetError> {
    let map = decode_height_map(&fs::read(path.as_ref())?)?;
    log::debug!("height map {}: {}x{}", path.as_ref().display(), map.width(), map.height());
    Ok(map)
}

/// Load the colour map and height map pair from two bitmap files.
pub fn load_terrain<P, Q>(color_path: P, height_path: Q) -> Result<Terrain, AssetError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    Ok(Terrain::new(
        load_color_map(color_path)?,
        load_height_map(height_path)?,
    ))
}

/*──────────────────────────── Snapshots ────────────────────────────*/

/// Write a finished frame (row-major, top row first) as a 24-bit BMP.
pub fn save_snapshot<P: AsRef<Path>>(
    path: P,
    w: usize,
    h: usize,
    pixels: &[Rgba],
) -> Result<(), AssetError> {
    if w == 0 || h == 0 {
        return Err(MapError::ZeroDimension { w, h }.into());
    }
    if pixels.len() != w * h {
        return Err(MapError::SizeMismatch {
            w,
            h,
            len: pixels.len(),
        }
        .into());
    }

    let img = RgbImage::from_fn(w as u32, h as u32, |x, y| {
        image::Rgb(unpack_rgb(pixels[y as usize * w + x as usize]))
    });
    img.save_with_format(path, ImageFormat::Bmp)?;
    Ok(())
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
