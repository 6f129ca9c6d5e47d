//! The floating body and its physics step.

use std::f64::consts::FRAC_PI_2;

use tidepool_core::{FieldId, WaveError};
use tidepool_field::{SurfaceMapping, WaveField};

use crate::constants::BodyConstants;
use crate::container::Container;
use crate::readiness::{Readiness, ReadinessHandle};

/// Samples either side of the body used to estimate the surface slope.
const SLOPE_SPAN: isize = 5;

/// Position and orientation in surface coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    /// Horizontal position.
    pub px: f64,
    /// Vertical position (down is positive).
    pub py: f64,
    /// Orientation in radians.
    pub theta: f64,
}

/// Linear velocity in surface units per step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    /// Horizontal component.
    pub vx: f64,
    /// Vertical component (down is positive).
    pub vy: f64,
}

/// A rigid body that floats on one wave field.
///
/// The body holds the [`FieldId`] of the field it rides on but never owns
/// or mutates it; the caller passes the matching field to
/// [`physics`](Self::physics) each sub-step.
///
/// # Examples
///
/// ```
/// use tidepool_body::BuoyantBody;
/// use tidepool_core::FieldId;
/// use tidepool_field::{SurfaceMapping, WaveField};
///
/// let field = WaveField::builder().build().unwrap();
/// let mapping = SurfaceMapping::new(400.0, 200.0).unwrap();
/// let mut duck = BuoyantBody::builder(FieldId(0), mapping)
///     .position(200.0, 150.0)
///     .ready(true)
///     .build()
///     .unwrap();
///
/// assert!(duck.physics(&field, 0.01));
/// assert!(duck.velocity().vy > 0.0); // above the water, so falling
/// ```
#[derive(Clone, Debug)]
pub struct BuoyantBody {
    field: FieldId,
    mapping: SurfaceMapping,
    constants: BodyConstants,
    container: Container,
    pose: Pose,
    velocity: Velocity,
    readiness: Readiness,
    loader: Option<ReadinessHandle>,
}

impl BuoyantBody {
    /// Start building a body that rides on `field`, laid out by `mapping`.
    pub fn builder(field: FieldId, mapping: SurfaceMapping) -> BuoyantBodyBuilder {
        BuoyantBodyBuilder {
            field,
            mapping,
            constants: BodyConstants::default(),
            container: None,
            pose: Pose::default(),
            velocity: Velocity::default(),
            ready: false,
            loader: None,
        }
    }

    /// The field this body floats on.
    pub fn field(&self) -> FieldId {
        self.field
    }

    /// Coordinate mapping used to sample the field.
    pub fn mapping(&self) -> &SurfaceMapping {
        &self.mapping
    }

    /// Physical constants.
    pub fn constants(&self) -> &BodyConstants {
        &self.constants
    }

    /// Bounding container.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Current pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Current velocity.
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Last observed readiness. See [`poll_readiness`](Self::poll_readiness).
    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    /// Mark the body ready directly, bypassing any handle.
    pub fn mark_ready(&mut self) {
        if self.readiness == Readiness::Loading {
            log::debug!("body on field {} ready", self.field);
        }
        self.readiness = Readiness::Ready;
    }

    /// Observe the readiness handle, transitioning `Loading → Ready` once
    /// the loader has signalled. Renderers call this before drawing.
    pub fn poll_readiness(&mut self) -> Readiness {
        if self.readiness == Readiness::Loading
            && self.loader.as_ref().is_some_and(ReadinessHandle::is_ready)
        {
            self.mark_ready();
        }
        self.readiness
    }

    /// Advance the body by one sub-step against `field`.
    ///
    /// Returns `false` (and changes nothing) while the body is still
    /// loading. `field` must be the field named by [`field`](Self::field).
    pub fn physics(&mut self, field: &WaveField, dt: f64) -> bool {
        if self.poll_readiness() != Readiness::Ready {
            return false;
        }

        let idx = self.mapping.get_index(field, self.pose.px) as isize;
        let theta_target = self.surface_angle(field, idx);
        let depth = self.mapping.get_y(field, idx) - self.pose.py;
        let submerged = depth < 0.0;

        self.accelerate(depth, theta_target, dt);
        if submerged {
            self.drag(dt);
        }
        self.container.bounce(
            self.pose.px,
            self.pose.py,
            &mut self.velocity.vx,
            &mut self.velocity.vy,
        );

        self.pose.px += self.velocity.vx;
        self.pose.py += self.velocity.vy;

        if submerged {
            self.pose.theta += (theta_target - self.pose.theta) / self.constants.rotational_inertia;
        }
        true
    }

    /// Angle of the surface around `idx`, from samples `SLOPE_SPAN` apart.
    fn surface_angle(&self, field: &WaveField, idx: isize) -> f64 {
        let m = &self.mapping;
        let (left, right) = (idx - SLOPE_SPAN, idx + SLOPE_SPAN);
        let rise = m.get_y(field, right) - m.get_y(field, left);
        let run = m.get_x(field, right) - m.get_x(field, left);
        rise.atan2(run)
    }

    fn accelerate(&mut self, depth: f64, theta_target: f64, dt: f64) {
        let c = &self.constants;
        if depth >= 0.0 {
            self.velocity.vy += c.gravity_accel * (1.0 - (-c.dropoff * depth).exp()) * dt;
        } else {
            let normal = FRAC_PI_2 - theta_target;
            let (nx, ny) = (normal.cos(), -normal.sin());
            let accel = c.buoyancy_accel * (1.0 - (c.dropoff * depth).exp());
            self.velocity.vx += nx * accel * dt;
            self.velocity.vy += ny * accel * dt;
        }
    }

    fn drag(&mut self, dt: f64) {
        let keep = 1.0 - self.constants.water_friction * dt;
        self.velocity.vx *= keep;
        self.velocity.vy *= keep;
    }
}

/// Builder for [`BuoyantBody`].
#[derive(Clone, Debug)]
pub struct BuoyantBodyBuilder {
    field: FieldId,
    mapping: SurfaceMapping,
    constants: BodyConstants,
    container: Option<Container>,
    pose: Pose,
    velocity: Velocity,
    ready: bool,
    loader: Option<ReadinessHandle>,
}

impl BuoyantBodyBuilder {
    /// Initial position.
    pub fn position(mut self, px: f64, py: f64) -> Self {
        self.pose.px = px;
        self.pose.py = py;
        self
    }

    /// Initial orientation in radians.
    pub fn theta(mut self, theta: f64) -> Self {
        self.pose.theta = theta;
        self
    }

    /// Initial velocity.
    pub fn velocity(mut self, vx: f64, vy: f64) -> Self {
        self.velocity = Velocity { vx, vy };
        self
    }

    /// Physical constants. Defaults to [`BodyConstants::default`].
    pub fn constants(mut self, constants: BodyConstants) -> Self {
        self.constants = constants;
        self
    }

    /// Bounding container. Defaults to the bowl inscribed in the mapping's
    /// surface width.
    pub fn container(mut self, container: Container) -> Self {
        self.container = Some(container);
        self
    }

    /// Start ready instead of loading.
    pub fn ready(mut self, ready: bool) -> Self {
        self.ready = ready;
        self
    }

    /// Handle an asset loader will flip when the body may start moving.
    pub fn readiness_handle(mut self, handle: ReadinessHandle) -> Self {
        self.loader = Some(handle);
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidConfiguration`] for invalid constants, a
    /// non-finite pose or velocity, or a default container that cannot be
    /// derived from the mapping.
    pub fn build(self) -> Result<BuoyantBody, WaveError> {
        self.constants.validate()?;
        let Pose { px, py, theta } = self.pose;
        if ![px, py, theta, self.velocity.vx, self.velocity.vy]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(WaveError::config("body pose and velocity must be finite"));
        }
        let container = match self.container {
            Some(c) => c,
            None => Container::bowl(self.mapping.surface_width(), 0.0)?,
        };
        let readiness = if self.ready {
            Readiness::Ready
        } else {
            Readiness::Loading
        };
        log::debug!(
            "body on field {} at ({px}, {py}), {:?}",
            self.field,
            readiness
        );
        Ok(BuoyantBody {
            field: self.field,
            mapping: self.mapping,
            constants: self.constants,
            container,
            pose: self.pose,
            velocity: self.velocity,
            readiness,
            loader: self.loader,
        })
    }
}
