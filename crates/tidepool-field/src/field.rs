//! Finite-difference wave field.
//!
//! Integrates the one-dimensional wave equation with symplectic Euler
//! (velocity first, then displacement with the new velocity):
//! ```text
//! u_x[i]  = (u[i+1] - u[i]) / dx
//! u_tt[i] = c² · (u_x[i+1] - u_x[i]) / dx
//! u_t[i]  = (u_t[i] + u_tt[i-1] · dt) · damping
//! u[i]   += u_t[i] · dt
//! ```
//! with `dx = 1 / n`. Clamped fields skip the edge samples in the velocity
//! update and copy `u[n-1] = u[n-2]`, `u[0] = u[1]` afterwards; wrapped
//! fields use modular neighbours and no copy.
//!
//! Every mutation restores the displacement mean it started with, so the
//! volume under the surface never changes.
//!
//! Constructed via the builder pattern: [`WaveField::builder`].

use tidepool_core::{BoundaryMode, Disturbance, WaveError};

use crate::component::Components;
use crate::disturbance::{
    churn_height, component_height, mean, phase_shift_for, restore_mean, splash_offsets,
    splash_peak, splash_spread, splash_weight,
};
use crate::hash;
use crate::swell::Swell;

/// A sampled one-dimensional wave surface.
///
/// # CFL stability
///
/// The explicit scheme stays bounded only while
/// `propagation_constant · dt / dx <= 1`, i.e. `dt <= 1 / (n · c)`.
/// [`max_dt`](Self::max_dt) reports that bound. Violating it is a caller
/// contract breach; the field does not detect divergence.
///
/// # Examples
///
/// ```
/// use tidepool_field::WaveField;
///
/// let mut field = WaveField::builder().samples(10).build().unwrap();
/// field.splash(0.5, 0.1, 1.0).unwrap();
/// field.tick(0.01).unwrap();
/// assert!(field.mean().abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct WaveField {
    len: usize,
    u: Vec<f64>,
    u_t: Vec<f64>,
    u_x: Vec<f64>,
    u_tt: Vec<f64>,
    propagation_constant: f64,
    damping: f64,
    boundary: BoundaryMode,
    components: Components,
    swell: Swell,
}

/// Builder for [`WaveField`].
///
/// Every option has a default, so `WaveField::builder().build()` yields a
/// 100-sample clamped field.
#[derive(Clone, Debug)]
pub struct WaveFieldBuilder {
    samples: usize,
    propagation_constant: f64,
    damping: f64,
    boundary: BoundaryMode,
    components: Option<Components>,
}

impl WaveField {
    /// Smallest accepted sample count.
    pub const MIN_SAMPLES: usize = 5;
    /// Default sample count.
    pub const DEFAULT_SAMPLES: usize = 100;
    /// Default propagation constant.
    pub const DEFAULT_PROPAGATION_CONSTANT: f64 = 0.01;
    /// Default per-tick velocity damping.
    pub const DEFAULT_DAMPING: f64 = 0.995;

    /// Create a new builder with default settings.
    pub fn builder() -> WaveFieldBuilder {
        WaveFieldBuilder {
            samples: Self::DEFAULT_SAMPLES,
            propagation_constant: Self::DEFAULT_PROPAGATION_CONSTANT,
            damping: Self::DEFAULT_DAMPING,
            boundary: BoundaryMode::Clamped,
            components: None,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: construction rejects fewer than five samples.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Spatial step, `1 / n`.
    pub fn dx(&self) -> f64 {
        1.0 / self.len as f64
    }

    /// Wave speed coefficient `c`.
    pub fn propagation_constant(&self) -> f64 {
        self.propagation_constant
    }

    /// Per-tick velocity damping factor.
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Edge policy.
    pub fn boundary_mode(&self) -> BoundaryMode {
        self.boundary
    }

    /// Normalized churn/swell components.
    pub fn components(&self) -> &Components {
        &self.components
    }

    /// The field's swell state.
    pub fn swell(&self) -> &Swell {
        &self.swell
    }

    /// Displacement per sample.
    pub fn displacement(&self) -> &[f64] {
        &self.u
    }

    /// Velocity per sample.
    pub fn velocity(&self) -> &[f64] {
        &self.u_t
    }

    /// Mean displacement (volume per sample).
    pub fn mean(&self) -> f64 {
        mean(&self.u)
    }

    /// Largest `dt` satisfying the CFL condition, `dx / c`.
    ///
    /// `None` when `c == 0` (nothing propagates, any `dt` is stable).
    pub fn max_dt(&self) -> Option<f64> {
        if self.propagation_constant > 0.0 {
            Some(self.dx() / self.propagation_constant)
        } else {
            None
        }
    }

    /// Courant number `c · dt / dx` for a candidate step size.
    pub fn courant_number(&self, dt: f64) -> f64 {
        self.propagation_constant * dt / self.dx()
    }

    /// Height at `idx`, with `idx` clamped to `[0, n-1]`.
    pub fn height(&self, idx: isize) -> f64 {
        self.u[self.clamp_index(idx)]
    }

    /// Clamp a signed index into `[0, n-1]`.
    pub fn clamp_index(&self, idx: isize) -> usize {
        idx.clamp(0, self.len as isize - 1) as usize
    }

    /// Sample index under `position_x` on a surface `surface_width` wide.
    ///
    /// The result is clamped to `[0, n-1]`.
    pub fn get_index(&self, position_x: f64, surface_width: f64) -> usize {
        let raw = (position_x / surface_width * self.len as f64).floor();
        if raw.is_nan() {
            return 0;
        }
        (raw.max(0.0) as usize).min(self.len - 1)
    }

    /// Linear coordinate of sample `idx` on a surface `surface_width` wide.
    ///
    /// `idx` is clamped to `[0, n-1]`.
    pub fn get_x(&self, idx: isize, surface_width: f64) -> f64 {
        (self.clamp_index(idx) as f64 / self.len as f64 * surface_width).floor()
    }

    /// `baseline - height(idx)`, for coordinate systems whose vertical axis
    /// points down.
    pub fn get_y(&self, idx: isize, baseline: f64) -> f64 {
        baseline - self.height(idx)
    }

    /// Advance the field by one explicit step of `dt`.
    ///
    /// Applies the boundary policy, restores the starting displacement
    /// mean, and then advances and applies the swell if one is active.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidArgument`] if `dt` is negative or not
    /// finite.
    pub fn tick(&mut self, dt: f64) -> Result<(), WaveError> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(WaveError::InvalidArgument {
                name: "dt",
                value: dt,
                expected: "finite and >= 0",
            });
        }

        let n = self.len;
        let dx = self.dx();
        let c2 = self.propagation_constant * self.propagation_constant;
        let damping = self.damping;
        let boundary = self.boundary;
        let rest = mean(&self.u);

        let Self {
            u, u_t, u_x, u_tt, ..
        } = self;

        match boundary {
            BoundaryMode::Clamped => {
                for i in 0..n - 1 {
                    u_x[i] = (u[i + 1] - u[i]) / dx;
                }
                for i in 0..n - 2 {
                    u_tt[i] = c2 * (u_x[i + 1] - u_x[i]) / dx;
                }
                for i in 1..n - 1 {
                    u_t[i] += u_tt[i - 1] * dt;
                    u_t[i] *= damping;
                }
            }
            BoundaryMode::Wrapped => {
                for i in 0..n {
                    u_x[i] = (u[(i + 1) % n] - u[i]) / dx;
                }
                for i in 0..n {
                    u_tt[i] = c2 * (u_x[(i + 1) % n] - u_x[i]) / dx;
                }
                for i in 0..n {
                    u_t[i] += u_tt[(i + n - 1) % n] * dt;
                    u_t[i] *= damping;
                }
            }
        }

        for (ui, vi) in u.iter_mut().zip(u_t.iter()) {
            *ui += vi * dt;
        }

        if boundary == BoundaryMode::Clamped {
            u[n - 1] = u[n - 2];
            u[0] = u[1];
        }
        restore_mean(u, rest);

        if self.swell.is_active() {
            self.swell.tick();
            self.gain(rest);
        }
        Ok(())
    }

    /// Instantaneous Gaussian impulse toward height `y` at position `x`.
    ///
    /// The peak is half the gap between `y` and the current height at
    /// `x`, clamped to `±0.1`. The impulse is added to both displacement
    /// and velocity, then both are shifted back to their previous means.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidArgument`] if `x` is outside `[0, 1]`
    /// or any argument is not finite. Nothing is modified in that case.
    pub fn splash(&mut self, x: f64, y: f64, strength: f64) -> Result<(), WaveError> {
        check_unit("x", x)?;
        check_finite("y", y)?;
        check_finite("strength", strength)?;

        let ix = self.sample_at(x);
        let peak = splash_peak(y, self.u[ix]);
        if peak == 0.0 {
            return Ok(());
        }
        let spread = splash_spread(peak);
        let rest_u = mean(&self.u);
        let rest_v = mean(&self.u_t);

        for offset in splash_offsets(self.len) {
            let Some(j) = self.boundary.resolve(ix, offset, self.len) else {
                continue;
            };
            let g = splash_weight(offset, strength, peak, spread);
            self.u[j] += g;
            self.u_t[j] += g;
        }

        restore_mean(&mut self.u, rest_u);
        restore_mean(&mut self.u_t, rest_v);
        Ok(())
    }

    /// Burst of turbulence built from the field's components, phased at `x`.
    ///
    /// Adds `strength · 0.1 · y · Σ amplitude · sin(2π/period · (i/n − φ))`
    /// with `φ = x − π/2` to displacement and velocity, then restores both
    /// means.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidArgument`] if `x` is outside `[0, 1]`
    /// or any argument is not finite.
    pub fn churn(&mut self, x: f64, y: f64, strength: f64) -> Result<(), WaveError> {
        check_unit("x", x)?;
        check_finite("y", y)?;
        check_finite("strength", strength)?;

        let phase = phase_shift_for(x);
        let rest_u = mean(&self.u);
        let rest_v = mean(&self.u_t);
        let comps = self.components.as_slice();

        for i in 0..self.len {
            let h = churn_height(i, self.len, y, strength, comps, phase);
            self.u[i] += h;
            self.u_t[i] += h;
        }

        restore_mean(&mut self.u, rest_u);
        restore_mean(&mut self.u_t, rest_v);
        Ok(())
    }

    /// Start an eased swell at `x`, replacing any swell in progress.
    ///
    /// See [`Swell::start`] for the meaning of the other arguments.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidArgument`] if `x` is outside `[0, 1]`
    /// or `strength` is not finite.
    pub fn start_swell(
        &mut self,
        x: f64,
        strength: f64,
        is_positive: bool,
        ticks: u32,
    ) -> Result<(), WaveError> {
        check_unit("x", x)?;
        check_finite("strength", strength)?;
        self.swell.start(x, strength, is_positive, ticks);
        Ok(())
    }

    /// Apply a [`Disturbance`] command.
    pub fn apply(&mut self, disturbance: &Disturbance) -> Result<(), WaveError> {
        match *disturbance {
            Disturbance::Splash { x, y, strength } => self.splash(x, y, strength),
            Disturbance::Churn { x, y, strength } => self.churn(x, y, strength),
            Disturbance::Swell {
                x,
                strength,
                positive,
                ticks,
            } => self.start_swell(x, strength, positive, ticks),
        }
    }

    /// Replace the displacement with `profile` and zero the velocity.
    ///
    /// The swell is left untouched. The new mean becomes the level that
    /// later mutations preserve.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidArgument`] if the profile length does
    /// not match or a value is not finite.
    pub fn set_displacement(&mut self, profile: &[f64]) -> Result<(), WaveError> {
        if profile.len() != self.len {
            return Err(WaveError::InvalidArgument {
                name: "profile.len",
                value: profile.len() as f64,
                expected: "equal to the field's sample count",
            });
        }
        if let Some(bad) = profile.iter().find(|v| !v.is_finite()) {
            return Err(WaveError::InvalidArgument {
                name: "profile",
                value: *bad,
                expected: "finite values",
            });
        }
        self.u.copy_from_slice(profile);
        self.u_t.fill(0.0);
        Ok(())
    }

    /// Flatten the surface, stop all motion and clear the swell.
    pub fn reset(&mut self) {
        self.u.fill(0.0);
        self.u_t.fill(0.0);
        self.u_x.fill(0.0);
        self.u_tt.fill(0.0);
        self.swell = Swell::new();
    }

    /// FNV-1a hash of the displacement and velocity bits.
    pub fn state_hash(&self) -> u64 {
        hash::field_hash(&self.u, &self.u_t)
    }

    /// Sample index for a validated `x` in `[0, 1]`; `x == 1` maps to the
    /// last sample.
    fn sample_at(&self, x: f64) -> usize {
        ((x * self.len as f64).floor() as usize).min(self.len - 1)
    }

    /// Add the swell's eased component heights and restore `rest`.
    fn gain(&mut self, rest: f64) {
        let strength = self.swell.strength();
        let phase = self.swell.phase_shift();
        let comps = self.components.as_slice();
        for i in 0..self.len {
            self.u[i] += strength * component_height(i, self.len, comps, phase);
        }
        restore_mean(&mut self.u, rest);
    }
}

impl WaveFieldBuilder {
    /// Set the sample count (default: 100). Must be >= 5.
    pub fn samples(mut self, n: usize) -> Self {
        self.samples = n;
        self
    }

    /// Set the propagation constant `c` (default: 0.01). Must be >= 0.
    ///
    /// Larger values propagate faster but shrink the stable `dt`.
    pub fn propagation_constant(mut self, c: f64) -> Self {
        self.propagation_constant = c;
        self
    }

    /// Set the per-tick velocity damping (default: 0.995). Must be in `(0, 1]`.
    pub fn damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the boundary policy (default: [`BoundaryMode::Clamped`]).
    pub fn boundary_mode(mut self, mode: BoundaryMode) -> Self {
        self.boundary = mode;
        self
    }

    /// Set the churn/swell components (default: [`Components::default`]).
    pub fn components(mut self, components: Components) -> Self {
        self.components = Some(components);
        self
    }

    /// Build the field, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidConfiguration`] if:
    /// - `samples` is below 5
    /// - `propagation_constant` is negative or NaN
    /// - `damping` is outside `(0, 1]` or NaN
    pub fn build(self) -> Result<WaveField, WaveError> {
        let n = self.samples;
        if n < WaveField::MIN_SAMPLES {
            return Err(WaveError::config(format!(
                "samples must be >= {}, got {n}",
                WaveField::MIN_SAMPLES
            )));
        }
        if !(self.propagation_constant.is_finite() && self.propagation_constant >= 0.0) {
            return Err(WaveError::config(format!(
                "propagation_constant must be finite and >= 0, got {}",
                self.propagation_constant
            )));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(WaveError::config(format!(
                "damping must be in (0, 1], got {}",
                self.damping
            )));
        }

        let (dx_len, dxx_len) = match self.boundary {
            BoundaryMode::Clamped => (n - 1, n - 2),
            BoundaryMode::Wrapped => (n, n),
        };
        log::debug!(
            "wave field: {n} samples, c={}, damping={}, {:?}",
            self.propagation_constant,
            self.damping,
            self.boundary
        );

        Ok(WaveField {
            len: n,
            u: vec![0.0; n],
            u_t: vec![0.0; n],
            u_x: vec![0.0; dx_len],
            u_tt: vec![0.0; dxx_len],
            propagation_constant: self.propagation_constant,
            damping: self.damping,
            boundary: self.boundary,
            components: self.components.unwrap_or_default(),
            swell: Swell::new(),
        })
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), WaveError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WaveError::InvalidArgument {
            name,
            value,
            expected: "a finite number",
        })
    }
}

fn check_unit(name: &'static str, value: f64) -> Result<(), WaveError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(WaveError::InvalidArgument {
            name,
            value,
            expected: "a position in [0, 1]",
        })
    }
}
