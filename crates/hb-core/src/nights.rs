use std::fmt;

use serde::{Deserialize, Serialize};

/// Count of nights still to be skipped, or the infinite sentinel.
///
/// Variant order matters: every finite count compares below [`Nights::Infinite`],
/// so `nights > Nights::Finite(1)` holds for an infinite hibernation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nights {
    /// A finite number of nights.
    Finite(u32),
    /// Hibernate until explicitly woken.
    Infinite,
}

impl Default for Nights {
    fn default() -> Self {
        Nights::ZERO
    }
}

impl Nights {
    /// No nights remaining.
    pub const ZERO: Nights = Nights::Finite(0);

    /// `true` when no nights remain.
    pub fn is_zero(self) -> bool {
        self == Nights::ZERO
    }

    /// `true` for the infinite sentinel.
    pub fn is_infinite(self) -> bool {
        matches!(self, Nights::Infinite)
    }

    /// `true` when strictly more than `n` nights remain.
    pub fn exceeds(self, n: u32) -> bool {
        self > Nights::Finite(n)
    }

    /// One night fewer, saturating at zero. The infinite sentinel is unchanged.
    pub fn decremented(self) -> Nights {
        match self {
            Nights::Finite(n) => Nights::Finite(n.saturating_sub(1)),
            Nights::Infinite => Nights::Infinite,
        }
    }

    /// The smaller of `self` and `limit`.
    pub fn clamped_to(self, limit: u32) -> Nights {
        self.min(Nights::Finite(limit))
    }

    /// The finite count, if any.
    pub fn finite(self) -> Option<u32> {
        match self {
            Nights::Finite(n) => Some(n),
            Nights::Infinite => None,
        }
    }
}

impl From<u32> for Nights {
    fn from(n: u32) -> Self {
        Nights::Finite(n)
    }
}

impl fmt::Display for Nights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nights::Finite(n) => write!(f, "{n}"),
            Nights::Infinite => f.write_str("infinite"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn infinite_compares_above_every_count() {
        assert!(Nights::Infinite > Nights::Finite(u32::MAX));
        assert!(Nights::Infinite.exceeds(2));
        assert!(!Nights::Finite(2).exceeds(2));
    }

    #[test]
    fn decrement_saturates_at_zero() {
        assert_eq!(Nights::Finite(1).decremented(), Nights::ZERO);
        assert_eq!(Nights::ZERO.decremented(), Nights::ZERO);
        assert_eq!(Nights::Infinite.decremented(), Nights::Infinite);
    }

    #[test]
    fn clamp_only_lowers() {
        assert_eq!(Nights::Finite(10).clamped_to(2), Nights::Finite(2));
        assert_eq!(Nights::Finite(1).clamped_to(2), Nights::Finite(1));
        assert_eq!(Nights::Infinite.clamped_to(2), Nights::Finite(2));
    }

    proptest! {
        #[test]
        fn n_decrements_reach_zero_without_skipping(n in 1u32..500) {
            let mut nights = Nights::Finite(n);
            for expected in (0..n).rev() {
                nights = nights.decremented();
                prop_assert_eq!(nights, Nights::Finite(expected));
            }
            prop_assert!(nights.is_zero());
        }
    }
}
