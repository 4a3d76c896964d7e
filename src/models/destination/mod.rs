// Destination module
// Destinations are owned externally; the itinerary core only needs their
// ids and the arrival/departure windows used to assign them to day plans.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier for an externally-owned destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(pub i64);

/// The stay window of one destination, as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DestinationWindow {
    pub destination_id: DestinationId,
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
}

impl DestinationWindow {
    pub fn new(destination_id: DestinationId, arrival: NaiveDate, departure: NaiveDate) -> Self {
        Self {
            destination_id,
            arrival,
            departure,
        }
    }

    /// Whether the given date falls inside the stay (inclusive on both ends).
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.arrival <= date && date <= self.departure
    }
}

/// Resolve the destination covering a date. When windows overlap the first
/// match wins; the list order is the caller's.
pub fn resolve_destination(
    windows: &[DestinationWindow],
    date: NaiveDate,
) -> Option<DestinationId> {
    windows
        .iter()
        .find(|window| window.covers(date))
        .map(|window| window.destination_id)
}
