//! Image resolution fitting, as done by `vwrays -d`.
//!
//! Radiance keeps the requested bounding box and scales one side down so the
//! image matches the view's aspect ratio. Fisheye images are always square.

use crate::error::{Result, ViewError};
use crate::options::Options;
use crate::view::View;
use crate::view_type::ViewType;

impl View {
    /// Returns the ratio between the horizontal and vertical image extent.
    ///
    /// Perspective views compare the tangents of the half angles; other
    /// views compare sizes directly. Fisheye views are always 1.
    pub fn aspect_ratio(&self) -> Result<f64> {
        if self.is_fisheye() {
            return Ok(1.0);
        }
        let ratio = match self.view_type() {
            ViewType::Perspective => {
                (self.h_size().to_radians() / 2.0).tan() / (self.v_size().to_radians() / 2.0).tan()
            }
            _ => self.h_size() / self.v_size(),
        };
        if ratio.is_finite() && ratio > 0.0 {
            Ok(ratio)
        } else {
            Err(ViewError::validation(format!(
                "view sizes {} x {} have no usable aspect ratio",
                self.h_size(),
                self.v_size()
            )))
        }
    }

    /// Returns the pixel dimensions of this view fitted inside
    /// `x_res` by `y_res`, using Radiance's 512 default for missing values.
    pub fn dimension_x_y(&self, x_res: Option<u32>, y_res: Option<u32>) -> Result<(u32, u32)> {
        self.dimension_x_y_with(x_res, y_res, &Options::default())
    }

    /// Same as [`View::dimension_x_y`] with defaults taken from `options`.
    pub fn dimension_x_y_with(
        &self,
        x_res: Option<u32>,
        y_res: Option<u32>,
        options: &Options,
    ) -> Result<(u32, u32)> {
        let x_res = x_res.unwrap_or(options.default_x_res);
        let y_res = y_res.unwrap_or(options.default_y_res);

        if self.is_fisheye() {
            let size = x_res.min(y_res);
            return Ok((size, size));
        }

        let ratio = self.aspect_ratio()?;
        Ok(fit_resolution(ratio, x_res, y_res))
    }

    /// Returns the dimensions as `vwrays -d` prints them:
    /// `-x <x> -y <y> -ld<+|->`.
    ///
    /// `-ld+` signals that the view clips, so pixel depth is meaningful.
    pub fn dimension(&self, x_res: Option<u32>, y_res: Option<u32>) -> Result<String> {
        let (x, y) = self.dimension_x_y(x_res, y_res)?;
        let sign = if self.has_clipping() { '+' } else { '-' };
        Ok(format!("-x {x} -y {y} -ld{sign}"))
    }
}

/// Fits an image with aspect `ratio` into `x_res` by `y_res`.
///
/// Scales the side along the larger requested dimension first and falls
/// back to the other side when the result would not fit.
pub fn fit_resolution(ratio: f64, x_res: u32, y_res: u32) -> (u32, u32) {
    let scaled_x = || round_to_pixels(ratio * f64::from(y_res));
    let scaled_y = || round_to_pixels(f64::from(x_res) / ratio);

    if y_res <= x_res {
        let new_x = scaled_x();
        if new_x <= x_res {
            (new_x, y_res)
        } else {
            (x_res, scaled_y())
        }
    } else {
        let new_y = scaled_y();
        if new_y <= y_res {
            (x_res, new_y)
        } else {
            (scaled_x(), y_res)
        }
    }
}

/// Rounds half to even, clamping into the `u32` range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_to_pixels(value: f64) -> u32 {
    value.round_ties_even().clamp(0.0, f64::from(u32::MAX)) as u32
}
