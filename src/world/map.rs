// Toroidal terrain maps.
// The rasterizer only sees the `Raster` accessor, never the decoded image.

use glam::Vec2;

use crate::renderer::Rgba;

/// Read-only 2-D grid capability: dimensions plus an in-range accessor.
///
/// Callers do the wrap-around themselves (see [`wrap_index`]), so `texel`
/// is only ever asked for `x < width()` and `y < height()`.
pub trait Raster {
    type Texel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn texel(&self, x: usize, y: usize) -> Self::Texel;
}

/// Things that can go wrong when building a map from raw pixels.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map dimensions must be positive, got {w}x{h}")]
    ZeroDimension { w: usize, h: usize },

    #[error("map is {w}x{h} but {len} texels were supplied")]
    SizeMismatch { w: usize, h: usize, len: usize },
}

/// Map any integer coordinate into `0 .. size` (periodic addressing).
#[inline(always)]
pub fn wrap_index(coord: i64, size: usize) -> usize {
    debug_assert!(size > 0);
    coord.rem_euclid(size as i64) as usize
}

/// Nearest-cell sample at an unbounded world position.
#[inline]
pub fn sample<R: Raster + ?Sized>(map: &R, world: Vec2) -> R::Texel {
    let x = wrap_index(world.x.floor() as i64, map.width());
    let y = wrap_index(world.y.floor() as i64, map.height());
    map.texel(x, y)
}

/// Row-major grid of texels, immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    w: usize,
    h: usize,
    texels: Vec<T>,
}

/// Elevation, 0 (sea) ..= 255 (peak).
pub type HeightMap = Grid<u8>;

/// Surface colour, 0x00RRGGBB.
pub type ColorMap = Grid<Rgba>;

impl<T: Copy> Grid<T> {
    pub fn new(w: usize, h: usize, texels: Vec<T>) -> Result<Self, MapError> {
        if w == 0 || h == 0 {
            return Err(MapError::ZeroDimension { w, h });
        }
        if texels.len() != w * h {
            return Err(MapError::SizeMismatch {
                w,
                h,
                len: texels.len(),
            });
        }
        Ok(Self { w, h, texels })
    }

    /// Every cell holds `value`.
    pub fn filled(w: usize, h: usize, value: T) -> Result<Self, MapError> {
        Self::new(w, h, vec![value; w * h])
    }

    /// Build from a per-cell generator, row by row.
    pub fn from_fn<F>(w: usize, h: usize, mut f: F) -> Result<Self, MapError>
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut texels = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                texels.push(f(x, y));
            }
        }
        Self::new(w, h, texels)
    }

    pub fn texels(&self) -> &[T] {
        &self.texels
    }
}

impl<T: Copy> Raster for Grid<T> {
    type Texel = T;

    #[inline(always)]
    fn width(&self) -> usize {
        self.w
    }

    #[inline(always)]
    fn height(&self) -> usize {
        self.h
    }

    #[inline(always)]
    fn texel(&self, x: usize, y: usize) -> T {
        self.texels[y * self.w + x]
    }
}

/// The paired colour and height maps. Both are sampled at the same world
/// point but may have independent dimensions.
#[derive(Clone, Debug)]
pub struct Terrain {
    pub color: ColorMap,
    pub height: HeightMap,
}

impl Terrain {
    pub fn new(color: ColorMap, height: HeightMap) -> Self {
        Self { color, height }
    }

    /// `(elevation, colour)` of the cell under `world`.
    #[inline]
    pub fn sample(&self, world: Vec2) -> (u8, Rgba) {
        (sample(&self.height, world), sample(&self.color, world))
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    fn ramp(w: usize, h: usize) -> HeightMap {
        Grid::from_fn(w, h, |x, y| (y * w + x) as u8).unwrap()
    }

    #[test]
    fn wrap_index_is_always_in_range_and_periodic() {
        for size in [1usize, 2, 7, 64] {
            for c in -300i64..300 {
                let i = wrap_index(c, size);
                assert!(i < size, "{c} mod {size} gave {i}");
                for k in [-3i64, -1, 1, 5] {
                    assert_eq!(i, wrap_index(c + k * size as i64, size));
                }
            }
        }
    }

    #[test]
    fn negative_coords_wrap_from_the_far_edge() {
        assert_eq!(wrap_index(-1, 10), 9);
        assert_eq!(wrap_index(-10, 10), 0);
        assert_eq!(wrap_index(-11, 10), 9);
    }

    #[test]
    fn sample_floors_before_wrapping() {
        let map = ramp(4, 4);
        // -0.5 floors to -1 -> column 3, not column 0
        assert_eq!(sample(&map, vec2(-0.5, 0.0)), 3);
        assert_eq!(sample(&map, vec2(1.99, 2.01)), 9);
        assert_eq!(sample(&map, vec2(5.0, -3.0)), sample(&map, vec2(1.0, 1.0)));
    }

    #[test]
    fn terrain_maps_wrap_independently() {
        let color = Grid::from_fn(2, 2, |x, y| (x + 10 * y) as Rgba).unwrap();
        let height = ramp(3, 3);
        let t = Terrain::new(color, height);
        let (h, c) = t.sample(vec2(4.0, 4.0));
        assert_eq!(h, 4); // (1,1) in a 3x3
        assert_eq!(c, 0); // (0,0) in a 2x2
    }

    #[test]
    fn zero_dimension_rejected() {
        let err = HeightMap::new(0, 4, vec![]).unwrap_err();
        assert_eq!(err, MapError::ZeroDimension { w: 0, h: 4 });
    }

    #[test]
    fn texel_count_must_match() {
        let err = ColorMap::new(2, 2, vec![0; 3]).unwrap_err();
        assert_eq!(err, MapError::SizeMismatch { w: 2, h: 2, len: 3 });
    }
}
