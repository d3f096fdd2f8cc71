//! Journey data model for trips between touch-in and touch-out

use crate::domain::station::Station;
use serde::Serialize;

/// A completed trip as recorded in the journey history.
///
/// `entry_station` is `None` when the rider touched out without having
/// touched in (the penalty path); `exit_station` is `None` in the
/// mirror-image case of a journey closed without a touch-out station.
/// Both fields set means a properly closed journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Journey {
    pub entry_station: Option<Station>,
    pub exit_station: Option<Station>,
}

impl Journey {
    /// True when the trip was opened and closed at known stations.
    pub fn is_complete(&self) -> bool {
        self.entry_station.is_some() && self.exit_station.is_some()
    }
}

/// The single live journey slot on a card.
///
/// A tagged state rather than a pair of nullable fields, so "touched in"
/// is representable and checkable instead of being inferred from which
/// fields happen to be set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum CurrentJourney {
    /// Not travelling; the next touch event opens or penalty-closes a trip.
    #[default]
    NoJourney,
    /// Touched in at `entry_station`, awaiting touch-out.
    Open { entry_station: Station },
}

impl CurrentJourney {
    /// Entry station of the open journey, if one is open.
    pub fn entry_station(&self) -> Option<&Station> {
        match self {
            CurrentJourney::NoJourney => None,
            CurrentJourney::Open { entry_station } => Some(entry_station),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, CurrentJourney::Open { .. })
    }
}
