/// Tunables of the height-field projection, fixed for a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParams {
    /// Eye altitude in heightmap units.
    pub camera_height: f32,
    /// Screen row of the horizon (where terrain at eye level lands).
    pub horizon: f32,
    /// Pixels per height unit at depth 1.
    pub vertical_scale: f32,
    /// Slices stop once their depth reaches this.
    pub max_distance: f32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            camera_height: 130.0,
            horizon: 160.0,
            vertical_scale: 240.0,
            max_distance: 800.0,
        }
    }
}

impl RenderParams {
    /// Screen row of a sample of elevation `sample_height` at depth `z`.
    #[inline(always)]
    pub fn project(&self, sample_height: f32, z: f32) -> f32 {
        project(
            sample_height,
            self.camera_height,
            z,
            self.horizon,
            self.vertical_scale,
        )
    }
}

/// Perspective-divide approximation:
///
/// ```text
/// row = (camera_height − sample_height) / z · vertical_scale + horizon
/// ```
///
/// `z` must be positive. The result is unclamped; rows above or below the
/// screen are valid and left to the draw primitive.
#[inline(always)]
pub fn project(
    sample_height: f32,
    camera_height: f32,
    z: f32,
    horizon: f32,
    vertical_scale: f32,
) -> f32 {
    debug_assert!(z > 0.0);
    (camera_height - sample_height) / z * vertical_scale + horizon
}

/// Float row → integer row, truncating toward zero (saturating).
#[inline(always)]
pub fn to_row(row: f32) -> i32 {
    row as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_level_lands_on_horizon() {
        let p = RenderParams::default();
        for z in [1.0, 3.5, 799.0] {
            assert_eq!(p.project(p.camera_height, z), p.horizon);
        }
    }

    #[test]
    fn lower_terrain_projects_below_horizon() {
        let p = RenderParams::default();
        assert!(p.project(100.0, 10.0) > p.horizon);
        assert!(p.project(200.0, 10.0) < p.horizon);
    }

    #[test]
    fn height_difference_shrinks_with_depth() {
        let p = RenderParams::default();
        let near = p.project(0.0, 2.0) - p.horizon;
        let far = p.project(0.0, 20.0) - p.horizon;
        assert!((near / far - 10.0).abs() < 1e-4);
    }

    #[test]
    fn reference_numbers() {
        assert_eq!(project(100.0, 130.0, 1.0, 160.0, 240.0), 1_960.0);
        assert_eq!(project(250.0, 130.0, 4.0, 160.0, 240.0), -7_040.0);
    }

    #[test]
    fn rows_truncate_toward_zero() {
        assert_eq!(to_row(159.9), 159);
        assert_eq!(to_row(-0.7), 0);
        assert_eq!(to_row(-3.2), -3);
        assert_eq!(to_row(f32::INFINITY), i32::MAX);
    }
}
