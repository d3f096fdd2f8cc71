//! Shared types for the fare card model

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Newtype wrapper for monetary amounts, in whole currency units.
///
/// Signed: touch-out applies its deduction unconditionally, so a card
/// balance can legitimately go negative (there is no spending floor
/// symmetric to the top-up ceiling).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Amount(pub i64);

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "£{}", self.0)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0 - rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Amount) {
        self.0 -= rhs.0;
    }
}

impl Amount {
    pub const ZERO: Amount = Amount(0);
}

/// Newtype wrapper for fare zone identifiers to provide type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Zone(pub u32);

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ceiling on the card balance after any top-up.
pub const MAXIMUM_BALANCE: Amount = Amount(90);

/// Minimum balance required to touch in; also the flat fare charged at
/// touch-out for a properly closed journey.
pub const MINIMUM_FARE: Amount = Amount(1);

/// Fixed charge applied at touch-out when no journey was opened.
pub const PENALTY_FARE: Amount = Amount(6);

/// Fare rules applied by a [`Card`](crate::services::Card).
///
/// Fixed at card construction. The defaults match the constants above;
/// tests exercise boundary values through
/// [`Card::with_policy`](crate::services::Card::with_policy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarePolicy {
    pub maximum_balance: Amount,
    pub minimum_fare: Amount,
    pub penalty_fare: Amount,
}

impl Default for FarePolicy {
    fn default() -> Self {
        Self {
            maximum_balance: MAXIMUM_BALANCE,
            minimum_fare: MINIMUM_FARE,
            penalty_fare: PENALTY_FARE,
        }
    }
}
