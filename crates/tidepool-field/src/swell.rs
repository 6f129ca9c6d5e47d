//! Eased transient swell.
//!
//! A [`Swell`] is a two-state machine (inactive / active). While active it
//! reports a strength that eases in from zero, peaks at the configured
//! strength halfway through its duration, and eases back out. The owning
//! field advances it once per tick and adds `strength() · component
//! height` to its displacement.

use crate::disturbance::phase_shift_for;

/// One eased transient disturbance.
///
/// # Examples
///
/// ```
/// use tidepool_field::Swell;
///
/// let mut swell = Swell::new();
/// swell.start(0.3, 5.0, true, 10);
/// for _ in 0..5 {
///     swell.tick();
/// }
/// assert!((swell.strength() - 0.005).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Swell {
    active: bool,
    x: f64,
    signed_strength: f64,
    phase_shift: f64,
    ticks_total: u32,
    ticks_elapsed: u32,
    ease_coefficient: f64,
}

impl Swell {
    /// Duration used when `start` is given zero ticks.
    pub const DEFAULT_TICKS: u32 = 100;

    /// Upper bound on the strength argument of [`start`](Self::start).
    pub const MAX_STRENGTH: f64 = 10.0;

    /// Strength arguments are permille of the surface scale.
    const STRENGTH_SCALE: f64 = 1.0 / 1000.0;

    /// An inactive swell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a swell at `x`, overwriting any swell in progress.
    ///
    /// `strength` is clamped to `[0, MAX_STRENGTH]` and scaled to
    /// permille. A `ticks` of zero selects [`DEFAULT_TICKS`](Self::DEFAULT_TICKS).
    pub fn start(&mut self, x: f64, strength: f64, is_positive: bool, ticks: u32) {
        let ticks = if ticks == 0 { Self::DEFAULT_TICKS } else { ticks };
        let mut s = strength.clamp(0.0, Self::MAX_STRENGTH) * Self::STRENGTH_SCALE;
        if !is_positive {
            s = -s;
        }
        let total = ticks as f64;

        self.active = true;
        self.x = x;
        self.signed_strength = s;
        self.phase_shift = phase_shift_for(x);
        self.ticks_total = ticks;
        self.ticks_elapsed = 0;
        self.ease_coefficient = -4.0 * s / (total * total);
    }

    /// Advance by one field tick. Past its duration the swell goes
    /// inactive and every field returns to zero.
    pub fn tick(&mut self) {
        self.ticks_elapsed += 1;
        if self.ticks_elapsed > self.ticks_total {
            *self = Self::default();
        }
    }

    /// Current eased strength (quadratic, peaking at the midpoint).
    pub fn strength(&self) -> f64 {
        let from_mid = self.ticks_elapsed as f64 - self.ticks_total as f64 / 2.0;
        self.ease_coefficient * from_mid * from_mid + self.signed_strength
    }

    /// Whether the swell is still gaining.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Position the swell was started at, or 0 when inactive.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Phase shift applied to the components, or 0 when inactive.
    pub fn phase_shift(&self) -> f64 {
        self.phase_shift
    }

    /// Ticks elapsed since `start`.
    pub fn ticks_elapsed(&self) -> u32 {
        self.ticks_elapsed
    }

    /// Configured duration in ticks.
    pub fn ticks_total(&self) -> u32 {
        self.ticks_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn run(swell: &mut Swell, ticks: u32) {
        for _ in 0..ticks {
            swell.tick();
        }
    }

    #[test]
    fn new_is_inactive_and_flat() {
        let s = Swell::new();
        assert!(!s.is_active());
        assert_eq!(s.strength(), 0.0);
    }

    #[test]
    fn start_sets_phase_and_coefficient() {
        let mut s = Swell::new();
        s.start(0.3, 5.0, true, 10);
        assert!(s.is_active());
        assert_eq!(s.x(), 0.3);
        assert!((s.phase_shift() - (0.3 - FRAC_PI_2)).abs() < 1e-15);
        assert_eq!(s.ticks_elapsed(), 0);
        assert_eq!(s.ticks_total(), 10);
        // eases in from zero
        assert!(s.strength().abs() < 1e-15);
    }

    #[test]
    fn peaks_at_midpoint() {
        let mut s = Swell::new();
        s.start(0.3, 5.0, true, 10);
        let mut strengths = Vec::new();
        for _ in 0..10 {
            s.tick();
            strengths.push(s.strength());
        }
        let max = strengths.iter().cloned().fold(f64::MIN, f64::max);
        assert!((strengths[4] - max).abs() < 1e-15, "peak at tick 5");
        assert!((max - 0.005).abs() < 1e-12);
    }

    #[test]
    fn lifecycle_ends_after_total_plus_one() {
        let mut s = Swell::new();
        s.start(0.3, 5.0, true, 10);
        run(&mut s, 10);
        assert!(s.is_active(), "still active on the last tick");
        s.tick();
        assert!(!s.is_active());
        assert_eq!(s.x(), 0.0);
        assert_eq!(s.phase_shift(), 0.0);
        assert_eq!(s.strength(), 0.0);
        assert_eq!(s, Swell::new());
    }

    #[test]
    fn negative_swell_mirrors_positive() {
        let mut up = Swell::new();
        let mut down = Swell::new();
        up.start(0.5, 3.0, true, 20);
        down.start(0.5, 3.0, false, 20);
        run(&mut up, 7);
        run(&mut down, 7);
        assert_eq!(up.strength(), -down.strength());
    }

    #[test]
    fn strength_is_clamped() {
        let mut s = Swell::new();
        s.start(0.5, 50.0, true, 2);
        s.tick();
        assert!((s.strength() - Swell::MAX_STRENGTH / 1000.0).abs() < 1e-15);
        s.start(0.5, -3.0, true, 2);
        s.tick();
        assert_eq!(s.strength(), 0.0);
    }

    #[test]
    fn zero_ticks_uses_default() {
        let mut s = Swell::new();
        s.start(0.1, 1.0, true, 0);
        assert_eq!(s.ticks_total(), Swell::DEFAULT_TICKS);
    }

    #[test]
    fn restart_overwrites() {
        let mut s = Swell::new();
        s.start(0.1, 1.0, true, 10);
        run(&mut s, 4);
        s.start(0.9, 2.0, false, 6);
        assert_eq!(s.ticks_elapsed(), 0);
        assert_eq!(s.x(), 0.9);
        assert_eq!(s.ticks_total(), 6);
    }
}
