//! Services - card state management and fare policy enforcement
//!
//! This module contains the core business logic:
//! - `card` - Balance ownership, touch-in/touch-out policy, fare computation
//! - `journey_tracker` - Live journey slot and completed-journey history

pub mod card;
pub mod journey_tracker;

// Re-export commonly used types
pub use card::Card;
pub use journey_tracker::JourneyTracker;
