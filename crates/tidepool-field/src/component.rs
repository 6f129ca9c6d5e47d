//! Sinusoidal components used by churn and swell.

use smallvec::{smallvec, SmallVec};
use tidepool_core::WaveError;

/// One sine wave contributing to churn and swell.
///
/// `period` is measured in normalized field length: a period of `0.5`
/// fits two crests across the whole field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveComponent {
    /// Relative weight. Normalized so that all weights in a list sum to 1.
    pub amplitude: f64,
    /// Wavelength as a fraction of the field length.
    pub period: f64,
}

impl WaveComponent {
    /// Create a component.
    pub fn new(amplitude: f64, period: f64) -> Self {
        Self { amplitude, period }
    }
}

/// An ordered, normalized list of [`WaveComponent`]s.
///
/// Construction divides every amplitude by the raw sum, so the
/// amplitudes of a `Components` value always sum to 1.
///
/// # Examples
///
/// ```
/// use tidepool_field::{Components, WaveComponent};
///
/// let c = Components::new(vec![
///     WaveComponent::new(0.5, 0.5),
///     WaveComponent::new(1.5, 0.25),
/// ])
/// .unwrap();
/// assert_eq!(c.as_slice()[0].amplitude, 0.25);
/// assert_eq!(c.as_slice()[1].amplitude, 0.75);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Components {
    list: SmallVec<[WaveComponent; 4]>,
}

impl Components {
    /// Normalize `list` into a component set.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidConfiguration`] if the list is empty,
    /// the raw amplitude sum is zero or non-finite, or a period is zero or
    /// non-finite.
    pub fn new(list: impl IntoIterator<Item = WaveComponent>) -> Result<Self, WaveError> {
        let mut list: SmallVec<[WaveComponent; 4]> = list.into_iter().collect();
        if list.is_empty() {
            return Err(WaveError::config("at least one wave component is required"));
        }
        for c in &list {
            if !c.period.is_finite() || c.period == 0.0 {
                return Err(WaveError::config(format!(
                    "component period must be finite and non-zero, got {}",
                    c.period
                )));
            }
        }
        let total: f64 = list.iter().map(|c| c.amplitude).sum();
        if !total.is_finite() || total == 0.0 {
            return Err(WaveError::config(format!(
                "component amplitudes must have a finite non-zero sum, got {total}"
            )));
        }
        for c in list.iter_mut() {
            c.amplitude /= total;
        }
        Ok(Self { list })
    }

    /// The normalized components, in insertion order.
    pub fn as_slice(&self) -> &[WaveComponent] {
        &self.list
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Always `false`: construction rejects an empty list.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Components {
    /// Three components with periods 0.25, 0.5 and 0.3 and amplitudes
    /// 0.2, 0.6 and 0.2.
    fn default() -> Self {
        Self {
            list: smallvec![
                WaveComponent::new(0.2, 0.25),
                WaveComponent::new(0.6, 0.5),
                WaveComponent::new(0.2, 0.3),
            ],
        }
    }
}
