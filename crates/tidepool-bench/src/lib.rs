//! Benchmark profiles and demo scenes for Tidepool.
//!
//! - [`duck_pond`]: three layered fields and one duck on a 400x400 canvas
//! - [`click`]: the disturbances a pointer click sends to every field
//! - [`wide_field`]: a large undamped field for throughput benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tidepool_body::BuoyantBody;
use tidepool_core::{BoundaryMode, Disturbance, FieldId, WaveError};
use tidepool_field::{Components, SurfaceMapping, WaveComponent, WaveField};

use tidepool_engine::Scene;

/// Canvas edge length in pixels.
pub const CANVAS: f64 = 400.0;

/// Samples per field in the duck pond.
pub const POND_SAMPLES: usize = 100;

/// Component sets for the three pond layers, back to front.
const LAYERS: [&[(f64, f64)]; 3] = [
    &[(0.5, 0.5), (0.1, 0.25)],
    &[(0.5, 0.8), (0.1, 0.2), (0.15, 0.3)],
    &[(0.3, 0.6), (0.6, 0.3), (0.1, 0.5)],
];

/// Canvas mapping: heights in `[-1, 1]` span the whole canvas.
pub fn canvas_mapping() -> Result<SurfaceMapping, WaveError> {
    SurfaceMapping::new(CANVAS, CANVAS / 2.0)?.with_vertical_scale(CANVAS / 2.0)
}

/// Build the duck pond: three named fields and a ready duck riding the
/// first one at (350, 260).
pub fn duck_pond() -> Result<(Scene, FieldId), WaveError> {
    let mut scene = Scene::new();
    let mut front = None;
    for (i, layer) in LAYERS.iter().enumerate() {
        let components =
            Components::new(layer.iter().map(|&(a, p)| WaveComponent::new(a, p)))?;
        let field = WaveField::builder()
            .samples(POND_SAMPLES)
            .components(components)
            .build()?;
        let id = scene.add_field(format!("layer-{i}"), field)?;
        if front.is_none() {
            front = Some(id);
        }
    }
    let front = front.ok_or_else(|| WaveError::config("pond has no layers"))?;

    let duck = BuoyantBody::builder(front, canvas_mapping()?)
        .position(350.0, 260.0)
        .ready(true)
        .build()?;
    scene.add_body(duck)?;
    Ok((scene, front))
}

/// Disturbances for a click at canvas pixel `(px, py)`: a churn then a
/// splash, both at strength 0.3, in field coordinates.
pub fn click(px: f64, py: f64) -> [Disturbance; 2] {
    let x = (px / CANVAS).clamp(0.0, 1.0);
    let y = -2.0 * (py / CANVAS - 0.5);
    [
        Disturbance::Churn {
            x,
            y,
            strength: 0.3,
        },
        Disturbance::Splash {
            x,
            y,
            strength: 0.3,
        },
    ]
}

/// A large undamped field for throughput benchmarks.
pub fn wide_field(samples: usize, mode: BoundaryMode) -> Result<WaveField, WaveError> {
    WaveField::builder()
        .samples(samples)
        .propagation_constant(0.05)
        .damping(1.0)
        .boundary_mode(mode)
        .build()
}
