//! The order-quantity counter, bounded below at 1.

use serde::{Deserialize, Serialize};

/// Order quantity for the product-detail view.
///
/// Invariant: the value is never less than 1, regardless of fetch status.
/// Both operations are pure and synchronous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderQuantity(u32);

impl OrderQuantity {
    /// Lower bound of the counter.
    pub const MIN: u32 = 1;

    /// The initial quantity shown when the view mounts.
    #[must_use]
    pub const fn initial() -> Self {
        Self(Self::MIN)
    }

    /// Rebuild a quantity from untrusted input, clamping to the lower bound.
    #[must_use]
    pub const fn clamped(value: u32) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else {
            Self(value)
        }
    }

    /// Increase by one, saturating at `u32::MAX`.
    #[must_use]
    pub const fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Decrease by one, only when the current value is at least 2.
    #[must_use]
    pub const fn decrement(self) -> Self {
        if self.0 >= 2 { Self(self.0 - 1) } else { self }
    }

    /// The current counter value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for OrderQuantity {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for OrderQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_is_one() {
        assert_eq!(OrderQuantity::initial().get(), 1);
        assert_eq!(OrderQuantity::default().get(), 1);
    }

    #[test]
    fn test_increment_n_times_yields_one_plus_n() {
        for n in 0..50 {
            let mut quantity = OrderQuantity::initial();
            for _ in 0..n {
                quantity = quantity.increment();
            }
            assert_eq!(quantity.get(), 1 + n);
        }
    }

    #[test]
    fn test_increment_saturates_at_max() {
        let quantity = OrderQuantity::clamped(u32::MAX).increment();
        assert_eq!(quantity.get(), u32::MAX);
    }

    #[test]
    fn test_decrement_never_drops_below_one() {
        let mut quantity = OrderQuantity::clamped(3);
        for _ in 0..10 {
            quantity = quantity.decrement();
            assert!(quantity.get() >= 1);
        }
        assert_eq!(quantity.get(), 1);
    }

    #[test]
    fn test_decrement_at_floor_is_a_no_op() {
        let quantity = OrderQuantity::initial();
        assert_eq!(quantity.decrement(), quantity);
    }

    #[test]
    fn test_clamped_enforces_floor() {
        assert_eq!(OrderQuantity::clamped(0).get(), 1);
        assert_eq!(OrderQuantity::clamped(1).get(), 1);
        assert_eq!(OrderQuantity::clamped(9).get(), 9);
    }
}
