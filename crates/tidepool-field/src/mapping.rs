//! Coordinate adapters between sample indices and surface coordinates.
//!
//! Bodies and renderers work in a linear coordinate system (for example
//! canvas pixels) whose vertical axis points down. A [`SurfaceMapping`]
//! translates between that system and a field's sample indices.

use tidepool_core::WaveError;

use crate::field::WaveField;

/// How a field is laid out on a surface.
///
/// # Examples
///
/// ```
/// use tidepool_field::{SurfaceMapping, WaveField};
///
/// let field = WaveField::builder().samples(100).build().unwrap();
/// let mapping = SurfaceMapping::new(400.0, 200.0).unwrap();
/// assert_eq!(mapping.get_index(&field, 200.0), 50);
/// assert_eq!(mapping.get_x(&field, 50), 200.0);
/// assert_eq!(mapping.get_y(&field, 50), 200.0); // flat surface sits on the baseline
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMapping {
    surface_width: f64,
    baseline: f64,
    vertical_scale: f64,
}

impl SurfaceMapping {
    /// A mapping `surface_width` wide with the neutral level at `baseline`
    /// and a vertical scale of 1 (`y = baseline - height`).
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidConfiguration`] if the width is not
    /// finite and positive or the baseline is not finite.
    pub fn new(surface_width: f64, baseline: f64) -> Result<Self, WaveError> {
        if !(surface_width.is_finite() && surface_width > 0.0) {
            return Err(WaveError::config(format!(
                "surface_width must be finite and > 0, got {surface_width}"
            )));
        }
        if !baseline.is_finite() {
            return Err(WaveError::config(format!(
                "baseline must be finite, got {baseline}"
            )));
        }
        Ok(Self {
            surface_width,
            baseline,
            vertical_scale: 1.0,
        })
    }

    /// Scale heights by `scale` before subtracting them from the baseline.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidConfiguration`] if `scale` is not finite.
    pub fn with_vertical_scale(mut self, scale: f64) -> Result<Self, WaveError> {
        if !scale.is_finite() {
            return Err(WaveError::config(format!(
                "vertical_scale must be finite, got {scale}"
            )));
        }
        self.vertical_scale = scale;
        Ok(self)
    }

    /// Surface width.
    pub fn surface_width(&self) -> f64 {
        self.surface_width
    }

    /// Vertical coordinate of the neutral level.
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Multiplier applied to heights.
    pub fn vertical_scale(&self) -> f64 {
        self.vertical_scale
    }

    /// Sample index under `position_x`, clamped to the field.
    pub fn get_index(&self, field: &WaveField, position_x: f64) -> usize {
        field.get_index(position_x, self.surface_width)
    }

    /// Horizontal coordinate of sample `idx` (clamped).
    pub fn get_x(&self, field: &WaveField, idx: isize) -> f64 {
        field.get_x(idx, self.surface_width)
    }

    /// Vertical coordinate of the surface at sample `idx` (clamped).
    pub fn get_y(&self, field: &WaveField, idx: isize) -> f64 {
        self.baseline - self.vertical_scale * field.height(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with_slope(n: usize) -> WaveField {
        let mut f = WaveField::builder().samples(n).build().unwrap();
        let profile: Vec<f64> = (0..n).map(|i| i as f64 * 0.01).collect();
        f.set_displacement(&profile).unwrap();
        f
    }

    #[test]
    fn rejects_degenerate_width() {
        assert!(SurfaceMapping::new(0.0, 10.0).is_err());
        assert!(SurfaceMapping::new(-5.0, 10.0).is_err());
        assert!(SurfaceMapping::new(f64::NAN, 10.0).is_err());
        assert!(SurfaceMapping::new(10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn y_uses_scale_and_baseline() {
        let f = field_with_slope(10);
        let m = SurfaceMapping::new(100.0, 50.0)
            .unwrap()
            .with_vertical_scale(25.0)
            .unwrap();
        assert_eq!(m.get_y(&f, 0), 50.0);
        assert!((m.get_y(&f, 4) - (50.0 - 25.0 * 0.04)).abs() < 1e-12);
        // clamped
        assert_eq!(m.get_y(&f, 40), m.get_y(&f, 9));
    }

    #[test]
    fn index_and_x_round_trip_on_sample_boundaries() {
        let f = field_with_slope(20);
        let m = SurfaceMapping::new(200.0, 0.0).unwrap();
        for idx in 0..20isize {
            let x = m.get_x(&f, idx);
            assert_eq!(m.get_index(&f, x), idx as usize);
        }
    }

    #[test]
    fn default_scale_is_literal_baseline_minus_height() {
        let f = field_with_slope(10);
        let m = SurfaceMapping::new(10.0, 3.0).unwrap();
        assert_eq!(m.vertical_scale(), 1.0);
        assert_eq!(m.get_y(&f, 5), 3.0 - f.height(5));
    }
}
