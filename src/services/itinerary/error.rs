use thiserror::Error;

use crate::models::day_plan::DayPlanId;
use crate::ordering::InvalidReorderError;

/// Errors surfaced by itinerary store mutations.
///
/// Only two conditions are reported: an activity insert or reorder against
/// an unresolved day plan, and a reorder sequence that fails permutation
/// validation. Every other unresolved id is a defined silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ItineraryError {
    #[error("day plan {0:?} not found")]
    DayPlanNotFound(DayPlanId),

    #[error(transparent)]
    InvalidReorder(#[from] InvalidReorderError),
}
