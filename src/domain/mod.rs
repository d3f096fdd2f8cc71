//! Domain models - core fare card types
//!
//! This module contains the canonical data types used throughout the crate:
//! - `Station` - a named station in a fare zone
//! - `Journey` - a completed trip snapshot as kept in the history
//! - `CurrentJourney` - the live journey slot (tagged open/closed state)
//! - `Amount` / `Zone` - newtype wrappers for money and fare zones
//! - `FarePolicy` - top-up ceiling, minimum fare, penalty fare
//! - `CardError` - the error taxonomy of card operations

pub mod error;
pub mod journey;
pub mod station;
pub mod types;

// Re-export commonly used types at module level
pub use error::CardError;
pub use journey::{CurrentJourney, Journey};
pub use station::Station;
pub use types::{Amount, FarePolicy, Zone, MAXIMUM_BALANCE, MINIMUM_FARE, PENALTY_FARE};
