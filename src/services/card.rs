//! Card - balance ownership and fare/penalty policy enforcement

use crate::domain::error::CardError;
use crate::domain::station::Station;
use crate::domain::types::{Amount, FarePolicy};
use crate::services::journey_tracker::JourneyTracker;
use tracing::{debug, info};

/// A stored-value transit card.
///
/// Owns the balance and a [`JourneyTracker`], and enforces the monetary
/// policy around touch events: fail-closed at entry (touch-in is refused
/// below the minimum fare), fail-open at exit (touch-out always charges,
/// fare or penalty, and may drive the balance negative).
///
/// # Example
///
/// ```
/// use farecard::domain::{Station, Zone, MINIMUM_FARE};
/// use farecard::services::Card;
///
/// let mut card = Card::new();
/// card.top_up(MINIMUM_FARE).unwrap();
/// card.touch_in(&Station::new("Aldgate", Zone(3))).unwrap();
/// let charged = card.touch_out(&Station::new("Euston", Zone(2)));
/// assert_eq!(charged, MINIMUM_FARE);
/// assert_eq!(card.journey().history().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Card {
    balance: Amount,
    policy: FarePolicy,
    journey: JourneyTracker,
}

impl Card {
    /// Create a card with balance 0, no open journey, and default fares.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a card with an explicit fare policy.
    pub fn with_policy(policy: FarePolicy) -> Self {
        Self { balance: Amount::ZERO, policy, journey: JourneyTracker::new() }
    }

    /// Add `amount` to the balance and return the new balance.
    ///
    /// `amount` is expected to be positive. Fails with
    /// [`CardError::BalanceExceeded`] when the result would pass the
    /// configured ceiling; the balance is left untouched on that path.
    pub fn top_up(&mut self, amount: Amount) -> Result<Amount, CardError> {
        if self.balance + amount > self.policy.maximum_balance {
            debug!(
                amount = %amount,
                balance = %self.balance,
                maximum = %self.policy.maximum_balance,
                "top_up_rejected"
            );
            return Err(CardError::BalanceExceeded { maximum: self.policy.maximum_balance });
        }

        self.balance += amount;
        info!(amount = %amount, balance = %self.balance, "card_topped_up");
        Ok(self.balance)
    }

    /// Begin a journey at `station`.
    ///
    /// Fails with [`CardError::InsufficientFunds`] when the balance is
    /// below the minimum fare; no state changes on that path. Nothing is
    /// charged at touch-in itself.
    pub fn touch_in(&mut self, station: &Station) -> Result<(), CardError> {
        if self.balance < self.policy.minimum_fare {
            debug!(
                balance = %self.balance,
                minimum_fare = %self.policy.minimum_fare,
                station = %station,
                "touch_in_rejected"
            );
            return Err(CardError::InsufficientFunds { minimum: self.policy.minimum_fare });
        }

        info!(station = %station, balance = %self.balance, "touched_in");
        self.journey.start(station.clone());
        Ok(())
    }

    /// End a journey at `station` and return the amount charged.
    ///
    /// Always succeeds: a journey opened by touch-in is charged the flat
    /// minimum fare, a touch-out with no prior touch-in is charged the
    /// penalty fare. Either way the journey is recorded and the live slot
    /// cleared. No floor check is applied, so the balance can go negative.
    pub fn touch_out(&mut self, station: &Station) -> Amount {
        let opened = self.journey.has_open_journey();
        let charge = if opened { self.policy.minimum_fare } else { self.policy.penalty_fare };

        self.balance -= charge;

        if opened {
            info!(station = %station, charge = %charge, balance = %self.balance, "touched_out");
        } else {
            info!(station = %station, charge = %charge, balance = %self.balance, "penalty_charged");
        }

        self.journey.finish(station.clone());
        charge
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// The card's journey tracker, for inspecting the live slot and history.
    pub fn journey(&self) -> &JourneyTracker {
        &self.journey
    }

    pub fn policy(&self) -> &FarePolicy {
        &self.policy
    }
}
