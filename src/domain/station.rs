//! Station value type

use crate::domain::types::Zone;
use serde::{Deserialize, Serialize};

/// A transit station: a name and the fare zone it sits in.
///
/// Immutable after construction. Stations are plain values owned by
/// whoever holds them; journeys keep their own copies.
///
/// # Example
///
/// ```
/// use farecard::domain::{Station, Zone};
///
/// let station = Station::new("Aldgate", Zone(3));
/// assert_eq!(station.name(), "Aldgate");
/// assert_eq!(station.zone(), Zone(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Station {
    name: String,
    zone: Zone,
}

impl Station {
    pub fn new(name: impl Into<String>, zone: Zone) -> Self {
        Self { name: name.into(), zone }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }
}

impl std::fmt::Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (zone {})", self.name, self.zone)
    }
}
