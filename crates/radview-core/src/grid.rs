//! Splitting a view into a grid of sub-views for tiled rendering.
//!
//! Each sub-view keeps the parent's position and orientation, narrows the
//! field of view, and uses `-vs`/`-vl` to point at its own tile. Rendering
//! every tile and stitching them reproduces the parent image.

use std::f64::consts::PI;

use crate::error::{Result, ViewError};
use crate::view::View;
use crate::view_type::ViewType;

/// Computes the size of one tile along an axis split into `count` parts.
///
/// `None` means the projection cannot be split.
fn split_size(view_type: ViewType, size: f64, count: f64) -> Option<f64> {
    let half_angle = size * PI / 360.0;
    match view_type {
        // The image plane is partitioned directly.
        ViewType::Parallel => Some(size / count),
        // Split the extent on the focal plane, then convert back to an angle.
        ViewType::Perspective => Some((360.0 / PI) * (half_angle.tan() / count).atan()),
        // Fisheye images vary linearly with the projected radius.
        ViewType::Hemispherical | ViewType::Angular | ViewType::Planisphere => {
            Some((360.0 / PI) * (half_angle.sin() / count).asin())
        }
        ViewType::Cylindrical => None,
    }
}

/// Offset of tile `index` (in tile widths) from the optical axis.
fn tile_offset(index: usize, count: usize) -> f64 {
    if count == 1 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let (index, span) = (index as f64, (count - 1) as f64);
    (index / span - 0.5) * span
}

impl View {
    /// Breaks the view down into `x_count` by `y_count` views.
    ///
    /// Counts are taken by absolute value. Views are named
    /// `<name>_<index>` and returned row by row. A 1 by 1 grid returns this
    /// view unchanged, as does a projection that cannot be split (with a
    /// warning).
    ///
    /// The column of a tile is `index % x_count` and its row is
    /// `index / y_count`; the two agree with row-major order only for square
    /// grids.
    pub fn grid(&self, x_count: i64, y_count: i64) -> Result<Vec<View>> {
        let x_count = usize::try_from(x_count.unsigned_abs())
            .map_err(|_| ViewError::validation("x division count is too large"))?;
        let y_count = usize::try_from(y_count.unsigned_abs())
            .map_err(|_| ViewError::validation("y division count is too large"))?;
        let total = x_count
            .checked_mul(y_count)
            .ok_or_else(|| ViewError::validation("division count is too large"))?;
        if total == 0 {
            return Err(ViewError::validation("division count should be larger than 0"));
        }

        if x_count == 1 && y_count == 1 {
            return Ok(vec![self.clone()]);
        }

        #[allow(clippy::cast_precision_loss)]
        let sizes = split_size(self.view_type(), self.h_size(), x_count as f64).zip(split_size(
            self.view_type(),
            self.v_size(),
            y_count as f64,
        ));
        let Some((h_size, v_size)) = sizes else {
            log::warn!(
                "Grid views are not supported for {} views (-vt{}).",
                self.view_type().name(),
                self.view_type().code()
            );
            return Ok(vec![self.clone()]);
        };

        let views = (0..total)
            .map(|index| {
                let mut view = self.derived(format!("{}_{index}", self.name()), h_size, v_size);
                view.set_shift(Some(tile_offset(index % x_count, x_count)));
                view.set_lift(Some(tile_offset(index / y_count, y_count)));
                view
            })
            .collect();
        Ok(views)
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;

    #[test]
    fn test_single_cell_returns_view() {
        let view = View::new("v").unwrap().with_fore_clip(Some(3.0));
        let views = view.grid(1, 1).unwrap();
        assert_eq!(views, vec![view]);
    }

    #[test]
    fn test_zero_count() {
        let view = View::new("v").unwrap();
        assert!(matches!(view.grid(0, 3), Err(ViewError::Validation(_))));
        assert!(matches!(view.grid(2, 0), Err(ViewError::Validation(_))));
    }

    #[test]
    fn test_negative_counts_use_absolute_value() {
        let view = View::new("v").unwrap();
        assert_eq!(view.grid(-2, -2).unwrap(), view.grid(2, 2).unwrap());
    }

    #[test]
    fn test_perspective_2x2() {
        let view = View::new("v")
            .unwrap()
            .with_position(DVec3::new(1.0, 2.0, 3.0))
            .with_fore_clip(Some(100.0));
        let views = view.grid(2, 2).unwrap();
        assert_eq!(views.len(), 4);

        let expected = (360.0 / PI) * ((30f64).to_radians().tan() / 2.0).atan();
        let offsets = [(-0.5, -0.5), (0.5, -0.5), (-0.5, 0.5), (0.5, 0.5)];
        for (i, (v, (shift, lift))) in views.iter().zip(offsets).enumerate() {
            assert_eq!(v.name(), format!("v_{i}"));
            assert!((v.h_size() - expected).abs() < 1e-12);
            assert!((v.v_size() - expected).abs() < 1e-12);
            assert_eq!(v.shift(), Some(shift));
            assert_eq!(v.lift(), Some(lift));
            assert_eq!(v.position(), view.position());
            assert_eq!(v.direction(), view.direction());
            assert_eq!(v.up_vector(), view.up_vector());
            assert_eq!(v.view_type(), ViewType::Perspective);
            assert_eq!(v.fore_clip(), None);
        }
    }

    #[test]
    fn test_perspective_split_reconstructs_extent() {
        let view = View::new("v").unwrap().with_sizes(75.0, 40.0).unwrap();
        for n in 1..8 {
            let views = view.grid(n, 1).unwrap();
            let half = (views[0].h_size() * PI / 360.0).tan();
            #[allow(clippy::cast_precision_loss)]
            let total = 2.0 * half * n as f64;
            assert!((total - 2.0 * (75.0 * PI / 360.0).tan()).abs() < 1e-9);
            assert!((views[0].v_size() - 40.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_parallel_split() {
        let view = View::new("plan")
            .unwrap()
            .with_view_type(ViewType::Parallel)
            .unwrap()
            .with_sizes(30.0, 20.0)
            .unwrap();
        let views = view.grid(3, 2).unwrap();
        assert_eq!(views.len(), 6);
        assert_eq!(views[0].h_size(), 10.0);
        assert_eq!(views[0].v_size(), 10.0);
        let shifts: Vec<_> = views.iter().map(|v| v.shift().unwrap()).collect();
        assert_eq!(shifts, vec![-1.0, 0.0, 1.0, -1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_non_square_lift_indexing() {
        // Rows come from index / y_count, so a 3 x 2 grid assigns lifts
        // 0, 0, 1, 1, 2, 2 (in tile units before centering).
        let view = View::new("v").unwrap();
        let views = view.grid(3, 2).unwrap();
        let lifts: Vec<_> = views.iter().map(|v| v.lift().unwrap()).collect();
        assert_eq!(lifts, vec![-0.5, -0.5, 0.5, 0.5, 1.5, 1.5]);
    }

    #[test]
    fn test_fisheye_split() {
        let view = View::new("fish")
            .unwrap()
            .with_view_type(ViewType::Hemispherical)
            .unwrap();
        let views = view.grid(2, 1).unwrap();
        // asin(sin(90°) / 2) = 30°, doubled.
        assert!((views[0].h_size() - 60.0).abs() < 1e-9);
        assert!((views[0].v_size() - 180.0).abs() < 1e-9);
        assert_eq!(views[0].lift(), Some(0.0));
    }

    #[test]
    fn test_wide_fisheye_split_is_not_negative() {
        let mut view = View::new("fish")
            .unwrap()
            .with_view_type(ViewType::Angular)
            .unwrap();
        assert!(view.set_h_size(400.0).is_err());
        view.set_h_size(360.0).unwrap();
        for tile in view.grid(2, 1).unwrap() {
            assert!(tile.h_size() >= 0.0);
            assert_eq!(
                View::from_radiance(tile.name(), &tile.to_radiance()).unwrap(),
                tile
            );
        }
    }

    #[test]
    fn test_cylindrical_not_split() {
        let view = View::new("pano")
            .unwrap()
            .with_view_type(ViewType::Cylindrical)
            .unwrap();
        assert_eq!(view.grid(2, 2).unwrap(), vec![view]);
    }
}
