//! Stored-value transit card library
//!
//! Models a fare card: a monetary balance with a top-up ceiling and a
//! touch-in funding floor, a single live journey slot, an append-only
//! history of completed journeys, and flat-fare or penalty deduction at
//! touch-out.
//!
//! Exposes modules for integration testing and binary reuse.

pub mod domain;
pub mod infra;
pub mod services;
