//! Physical constants of a buoyant body.

use tidepool_core::WaveError;

/// Per-body physical constants, fixed at construction.
///
/// Units follow the surface coordinate system the body lives in (for a
/// canvas: pixels and seconds).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyConstants {
    /// Downward acceleration while above the surface.
    pub gravity_accel: f64,
    /// Acceleration along the surface normal while submerged.
    pub buoyancy_accel: f64,
    /// How quickly gravity and buoyancy fade in with distance from the surface.
    pub dropoff: f64,
    /// Divisor applied when easing orientation toward the surface tangent.
    pub rotational_inertia: f64,
    /// Fraction of velocity lost per unit time while submerged.
    pub water_friction: f64,
}

impl Default for BodyConstants {
    fn default() -> Self {
        Self {
            gravity_accel: 20.0,
            buoyancy_accel: 30.0,
            dropoff: 0.2,
            rotational_inertia: 20.0,
            water_friction: 10.0,
        }
    }
}

impl BodyConstants {
    /// Check that every constant is usable.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidConfiguration`] for non-finite values,
    /// a negative acceleration, dropoff or friction, or a non-positive
    /// rotational inertia.
    pub fn validate(&self) -> Result<(), WaveError> {
        let non_negative = [
            ("gravity_accel", self.gravity_accel),
            ("buoyancy_accel", self.buoyancy_accel),
            ("dropoff", self.dropoff),
            ("water_friction", self.water_friction),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(WaveError::config(format!(
                    "{name} must be finite and >= 0, got {value}"
                )));
            }
        }
        if !(self.rotational_inertia.is_finite() && self.rotational_inertia > 0.0) {
            return Err(WaveError::config(format!(
                "rotational_inertia must be finite and > 0, got {}",
                self.rotational_inertia
            )));
        }
        Ok(())
    }
}
