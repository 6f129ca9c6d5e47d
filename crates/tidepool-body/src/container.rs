//! Circular container (the "bowl") that keeps bodies in view.

use tidepool_core::WaveError;

/// A circle that bodies bounce around inside.
///
/// Coordinates share the surface convention: the vertical axis points
/// down, so the lower arc has larger `y` than the centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container {
    center_x: f64,
    center_y: f64,
    radius: f64,
}

impl Container {
    /// A container centred at `(center_x, center_y)`.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidConfiguration`] if the radius is not
    /// finite and positive or the centre is not finite.
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> Result<Self, WaveError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(WaveError::config(format!(
                "container radius must be finite and > 0, got {radius}"
            )));
        }
        if !(center_x.is_finite() && center_y.is_finite()) {
            return Err(WaveError::config("container centre must be finite"));
        }
        Ok(Self {
            center_x,
            center_y,
            radius,
        })
    }

    /// The bowl inscribed in a square surface `width` wide, shrunk by
    /// `margin` (typically half the body's visual width).
    pub fn bowl(width: f64, margin: f64) -> Result<Self, WaveError> {
        let half = width / 2.0;
        Self::new(half, half, half - margin)
    }

    /// Horizontal centre.
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    /// Vertical centre.
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    /// Radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Half of the container's width at height `py`.
    ///
    /// Above the centre the walls are treated as vertical (full radius).
    pub fn half_width_at(&self, py: f64) -> f64 {
        let offset = self.center_y - py;
        if offset > 0.0 {
            self.radius
        } else {
            (self.radius * self.radius - offset * offset).max(0.0).sqrt()
        }
    }

    /// Height of the lower arc below `px`, or `None` outside the circle's
    /// horizontal extent.
    pub fn floor_at(&self, px: f64) -> Option<f64> {
        let offset = px - self.center_x;
        if offset.abs() > self.radius {
            return None;
        }
        Some(self.center_y + (self.radius * self.radius - offset * offset).sqrt())
    }

    /// Reflect a velocity that points out of the container.
    ///
    /// Past a side wall `vx` is turned back toward the centre; below the
    /// lower arc `vy` is forced upward. Position is not corrected.
    pub fn bounce(&self, px: f64, py: f64, vx: &mut f64, vy: &mut f64) {
        let half = self.half_width_at(py);
        if px < self.center_x - half {
            *vx = vx.abs();
        } else if px > self.center_x + half {
            *vx = -vx.abs();
        }

        if let Some(floor) = self.floor_at(px) {
            if py > floor {
                *vy = -vy.abs();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bowl() -> Container {
        Container::bowl(400.0, 0.0).unwrap()
    }

    #[test]
    fn bowl_geometry() {
        let c = Container::bowl(400.0, 20.0).unwrap();
        assert_eq!(c.center_x(), 200.0);
        assert_eq!(c.center_y(), 200.0);
        assert_eq!(c.radius(), 180.0);
    }

    #[test]
    fn rejects_bad_radius() {
        assert!(Container::new(0.0, 0.0, 0.0).is_err());
        assert!(Container::bowl(10.0, 10.0).is_err());
        assert!(Container::new(f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn half_width_full_above_centre() {
        let c = bowl();
        assert_eq!(c.half_width_at(50.0), 200.0);
        assert_eq!(c.half_width_at(200.0), 200.0);
        assert!((c.half_width_at(320.0) - 160.0).abs() < 1e-9);
        assert_eq!(c.half_width_at(450.0), 0.0);
    }

    #[test]
    fn floor_follows_arc() {
        let c = bowl();
        assert_eq!(c.floor_at(200.0), Some(400.0));
        assert!((c.floor_at(320.0).unwrap() - 360.0).abs() < 1e-9);
        assert_eq!(c.floor_at(401.0), None);
    }

    #[test]
    fn bounce_off_walls() {
        let c = bowl();
        let (mut vx, mut vy) = (3.0, 0.0);
        c.bounce(405.0, 100.0, &mut vx, &mut vy);
        assert_eq!(vx, -3.0);

        let (mut vx, mut vy) = (-2.0, 0.0);
        c.bounce(-1.0, 100.0, &mut vx, &mut vy);
        assert_eq!(vx, 2.0);

        // already heading inward: unchanged
        let (mut vx, mut vy) = (-2.0, 0.0);
        c.bounce(405.0, 100.0, &mut vx, &mut vy);
        assert_eq!(vx, -2.0);
    }

    #[test]
    fn bounce_off_floor() {
        let c = bowl();
        let (mut vx, mut vy) = (0.0, 4.0);
        c.bounce(200.0, 401.0, &mut vx, &mut vy);
        assert_eq!(vy, -4.0);

        let (mut vx, mut vy) = (0.0, 4.0);
        c.bounce(200.0, 300.0, &mut vx, &mut vy);
        assert_eq!(vy, 4.0);
    }
}
