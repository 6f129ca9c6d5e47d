//! Stateless disturbance math.
//!
//! Splash, churn and swell all inject height into a field and then
//! restore the field's mean so that total volume is unchanged. The
//! functions here compute the injected offsets; [`WaveField`] decides
//! where they land.
//!
//! [`WaveField`]: crate::WaveField

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::component::WaveComponent;

/// Largest height a single splash may inject at its centre.
pub const MAX_SPLASH_PEAK: f64 = 0.1;

/// Fraction of the gap between target and current height used as a peak.
pub const SPLASH_GAIN: f64 = 0.5;

/// Lower bound of the Gaussian spread coefficient.
pub const MIN_SPLASH_SPREAD: f64 = 0.01;

/// Scale applied to churn heights before the caller's strength.
pub const CHURN_SCALE: f64 = 0.1;

/// Arithmetic mean of `buf`. Returns 0 for an empty slice.
pub fn mean(buf: &[f64]) -> f64 {
    if buf.is_empty() {
        return 0.0;
    }
    buf.iter().sum::<f64>() / buf.len() as f64
}

/// Shift every sample so that the mean of `buf` becomes `target`.
pub fn restore_mean(buf: &mut [f64], target: f64) {
    let shift = mean(buf) - target;
    if shift != 0.0 {
        for v in buf.iter_mut() {
            *v -= shift;
        }
    }
}

/// Phase shift that places a crest of every component near `x`.
pub fn phase_shift_for(x: f64) -> f64 {
    x - FRAC_PI_2
}

/// Splash peak: half the gap between the target height `y` and the
/// current height, clamped to `±MAX_SPLASH_PEAK`.
pub fn splash_peak(y: f64, current: f64) -> f64 {
    ((y - current) * SPLASH_GAIN).clamp(-MAX_SPLASH_PEAK, MAX_SPLASH_PEAK)
}

/// Gaussian spread coefficient for a given peak.
///
/// Small peaks spread wide, large peaks stay narrow. Callers must not
/// pass a zero peak (the coefficient would be infinite).
pub fn splash_spread(peak: f64) -> f64 {
    (0.001 / peak.abs()).max(MIN_SPLASH_SPREAD)
}

/// Height injected at `offset` samples from the splash centre.
pub fn splash_weight(offset: isize, strength: f64, peak: f64, spread: f64) -> f64 {
    let i = offset as f64;
    strength * (-spread * i * i).exp() * peak
}

/// Offsets visited by a splash on a field of `len` samples.
///
/// Covers `[-len/2, len - len/2)`, which is exactly `len` offsets, so a
/// wrapped field sees every sample once.
pub fn splash_offsets(len: usize) -> std::ops::Range<isize> {
    let half = (len / 2) as isize;
    -half..(len as isize - half)
}

/// Sum of all components at sample `i` of `len`, before any strength
/// scaling: `Σ amplitude · sin(2π/period · (i/len − phase_shift))`.
pub fn component_height(i: usize, len: usize, components: &[WaveComponent], phase_shift: f64) -> f64 {
    let x = i as f64 / len as f64;
    components
        .iter()
        .map(|c| c.amplitude * (TAU / c.period * (x - phase_shift)).sin())
        .sum()
}

/// Churn offset at sample `i`: `strength · 0.1 · y` times the component sum.
pub fn churn_height(
    i: usize,
    len: usize,
    y: f64,
    strength: f64,
    components: &[WaveComponent],
    phase_shift: f64,
) -> f64 {
    strength * CHURN_SCALE * y * component_height(i, len, components, phase_shift)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn restore_mean_shifts_uniformly() {
        let mut buf = vec![1.0, 2.0, 6.0];
        restore_mean(&mut buf, 0.0);
        assert!(mean(&buf).abs() < 1e-12);
        assert!((buf[2] - buf[0] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn peak_is_half_gap_then_clamped() {
        assert!((splash_peak(0.1, 0.0) - 0.05).abs() < 1e-12);
        assert_eq!(splash_peak(2.0, 0.0), MAX_SPLASH_PEAK);
        assert_eq!(splash_peak(-2.0, 0.5), -MAX_SPLASH_PEAK);
    }

    #[test]
    fn spread_has_floor() {
        assert!((splash_spread(0.05) - 0.02).abs() < 1e-12);
        assert_eq!(splash_spread(0.1), MIN_SPLASH_SPREAD);
        assert!((splash_spread(-0.001) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn weight_peaks_at_centre() {
        let w0 = splash_weight(0, 1.0, 0.05, 0.02);
        let w3 = splash_weight(3, 1.0, 0.05, 0.02);
        let wm3 = splash_weight(-3, 1.0, 0.05, 0.02);
        assert_eq!(w0, 0.05);
        assert!(w3 < w0);
        assert_eq!(w3, wm3);
    }

    #[test]
    fn offsets_cover_len_exactly() {
        assert_eq!(splash_offsets(10), -5..5);
        assert_eq!(splash_offsets(11), -5..6);
        assert_eq!(splash_offsets(11).count(), 11);
    }

    #[test]
    fn churn_scales_linearly() {
        let comps = [WaveComponent::new(1.0, 0.5)];
        let phase = phase_shift_for(0.3);
        let base = churn_height(7, 20, 1.0, 1.0, &comps, phase);
        let doubled = churn_height(7, 20, 2.0, 1.0, &comps, phase);
        assert!((doubled - 2.0 * base).abs() < 1e-15);
        let expected = 0.1 * (TAU / 0.5 * (7.0 / 20.0 - phase)).sin();
        assert!((base - expected).abs() < 1e-15);
    }

    #[test]
    fn zero_y_churn_is_flat() {
        let comps = [WaveComponent::new(0.6, 0.5), WaveComponent::new(0.4, 0.25)];
        for i in 0..10 {
            assert_eq!(churn_height(i, 10, 0.0, 1.0, &comps, 0.0), 0.0);
        }
    }
}
