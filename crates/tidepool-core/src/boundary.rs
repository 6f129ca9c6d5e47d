//! Boundary policy for the ends of a one-dimensional wave field.

/// How a wave field treats its first and last sample.
///
/// # Examples
///
/// ```
/// use tidepool_core::BoundaryMode;
///
/// // Clamped: offsets past either end are dropped.
/// assert_eq!(BoundaryMode::Clamped.resolve(0, -1, 10), None);
/// assert_eq!(BoundaryMode::Clamped.resolve(9, 1, 10), None);
///
/// // Wrapped: offsets wrap to the opposite end (periodic).
/// assert_eq!(BoundaryMode::Wrapped.resolve(0, -1, 10), Some(9));
/// assert_eq!(BoundaryMode::Wrapped.resolve(9, 1, 10), Some(0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BoundaryMode {
    /// Edge samples copy their inner neighbour after every tick.
    ///
    /// This is an approximation rather than a derived boundary condition;
    /// the copy `u[n-1] = u[n-2]`, `u[0] = u[1]` is part of the contract.
    #[default]
    Clamped,
    /// Periodic domain: index `n` is index `0`.
    Wrapped,
}

impl BoundaryMode {
    /// Resolve `index + offset` on a domain of `len` samples.
    ///
    /// Returns `None` when the target falls outside `[0, len)` under
    /// [`Clamped`](Self::Clamped). [`Wrapped`](Self::Wrapped) always
    /// resolves (`len` must be non-zero).
    pub fn resolve(self, index: usize, offset: isize, len: usize) -> Option<usize> {
        let n = len as isize;
        let target = index as isize + offset;
        match self {
            Self::Clamped => {
                if (0..n).contains(&target) {
                    Some(target as usize)
                } else {
                    None
                }
            }
            Self::Wrapped => Some(target.rem_euclid(n) as usize),
        }
    }

    /// Whether the domain is periodic.
    pub fn is_wrapped(self) -> bool {
        matches!(self, Self::Wrapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_is_clamped() {
        assert_eq!(BoundaryMode::default(), BoundaryMode::Clamped);
        assert!(!BoundaryMode::Clamped.is_wrapped());
        assert!(BoundaryMode::Wrapped.is_wrapped());
    }

    #[test]
    fn clamped_interior_resolves() {
        assert_eq!(BoundaryMode::Clamped.resolve(4, 3, 10), Some(7));
        assert_eq!(BoundaryMode::Clamped.resolve(4, -4, 10), Some(0));
    }

    #[test]
    fn wrapped_far_offsets() {
        assert_eq!(BoundaryMode::Wrapped.resolve(2, -15, 10), Some(7));
        assert_eq!(BoundaryMode::Wrapped.resolve(2, 25, 10), Some(7));
    }

    proptest! {
        #[test]
        fn wrapped_always_in_range(len in 1usize..200, index in 0usize..200, offset in -500isize..500) {
            let index = index % len;
            let r = BoundaryMode::Wrapped.resolve(index, offset, len);
            prop_assert!(r.is_some_and(|i| i < len));
        }

        #[test]
        fn clamped_matches_plain_addition(len in 1usize..200, index in 0usize..200, offset in -300isize..300) {
            let index = index % len;
            let target = index as isize + offset;
            let r = BoundaryMode::Clamped.resolve(index, offset, len);
            if target >= 0 && (target as usize) < len {
                prop_assert_eq!(r, Some(target as usize));
            } else {
                prop_assert_eq!(r, None);
            }
        }
    }
}
