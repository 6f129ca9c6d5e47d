//! Fixture builders.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tidepool_body::BuoyantBody;
use tidepool_core::{BoundaryMode, FieldId};
use tidepool_field::{SurfaceMapping, WaveField};

/// Surface width used by the pond fixtures.
pub const POND_WIDTH: f64 = 400.0;

/// Neutral water level used by the pond fixtures.
pub const POND_BASELINE: f64 = 200.0;

/// Uniform random profile in `[-bound, bound]` with its mean removed.
///
/// Mean removal may push individual samples slightly past `bound`; use
/// [`max_abs`] on the result when the exact peak matters.
pub fn bounded_profile(n: usize, bound: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut profile: Vec<f64> = (0..n).map(|_| rng.random_range(-bound..=bound)).collect();
    let mean = profile.iter().sum::<f64>() / n as f64;
    for v in &mut profile {
        *v -= mean;
    }
    profile
}

/// Smooth zero-mean bump centred at `center ∈ [0,1]`.
pub fn gaussian_bump(n: usize, center: f64, height: f64, width: f64) -> Vec<f64> {
    let mut profile: Vec<f64> = (0..n)
        .map(|i| {
            let d = i as f64 / n as f64 - center;
            height * (-(d * d) / (width * width)).exp()
        })
        .collect();
    let mean = profile.iter().sum::<f64>() / n as f64;
    for v in &mut profile {
        *v -= mean;
    }
    profile
}

/// Largest absolute value in `values`.
pub fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |m, v| m.max(v.abs()))
}

/// Undamped field for stability experiments.
pub fn cfl_field(n: usize, c: f64, mode: BoundaryMode) -> WaveField {
    WaveField::builder()
        .samples(n)
        .propagation_constant(c)
        .damping(1.0)
        .boundary_mode(mode)
        .build()
        .expect("cfl fixture is valid")
}

/// Time step that yields the given Courant ratio `c · dt / dx` on `field`.
pub fn dt_for_courant(field: &WaveField, ratio: f64) -> f64 {
    ratio * field.dx() / field.propagation_constant()
}

/// Default field (100 samples) with the given boundary mode.
pub fn pond_field(mode: BoundaryMode) -> WaveField {
    WaveField::builder()
        .boundary_mode(mode)
        .build()
        .expect("pond fixture is valid")
}

/// Mapping onto a 400-wide surface with its baseline at 200.
pub fn pond_mapping() -> SurfaceMapping {
    SurfaceMapping::new(POND_WIDTH, POND_BASELINE).expect("pond mapping is valid")
}

/// A ready body with default constants on the pond mapping.
pub fn ready_body(field: FieldId, px: f64, py: f64) -> BuoyantBody {
    BuoyantBody::builder(field, pond_mapping())
        .position(px, py)
        .ready(true)
        .build()
        .expect("body fixture is valid")
}

/// A loading body with default constants on the pond mapping.
pub fn loading_body(field: FieldId, px: f64, py: f64) -> BuoyantBody {
    BuoyantBody::builder(field, pond_mapping())
        .position(px, py)
        .build()
        .expect("body fixture is valid")
}
