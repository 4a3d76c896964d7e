// DayPlan module
// The ordered container of activities for one calendar date within a trip.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::activity::{Activity, ActivityId};
use crate::models::destination::DestinationId;
use crate::ordering::OrderedList;

/// Identifier for a trip. Trips themselves are owned outside this crate;
/// the itinerary core only scopes day plans by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(pub i64);

/// Identifier for a day plan, allocated by the itinerary store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayPlanId(pub i64);

/// One calendar day of a trip and its ordered activities.
///
/// Invariant: at most one DayPlan exists per (trip_id, date); the store
/// enforces this on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub id: DayPlanId,
    pub trip_id: TripId,
    pub date: NaiveDate,
    #[serde(default)]
    pub destination_id: Option<DestinationId>,
    #[serde(default)]
    pub activities: OrderedList<Activity>,
}

impl DayPlan {
    pub fn new(
        id: DayPlanId,
        trip_id: TripId,
        date: NaiveDate,
        destination_id: Option<DestinationId>,
    ) -> Self {
        Self {
            id,
            trip_id,
            date,
            destination_id,
            activities: OrderedList::new(),
        }
    }

    /// Look up an activity by id within this day.
    pub fn activity(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity::{ActivityCategory, ActivityDraft};

    #[test]
    fn test_new_day_plan_is_empty() {
        let plan = DayPlan::new(
            DayPlanId(1),
            TripId(1),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            None,
        );
        assert!(plan.activities.is_empty());
        assert!(plan.destination_id.is_none());
    }

    #[test]
    fn test_activity_lookup() {
        let mut plan = DayPlan::new(
            DayPlanId(1),
            TripId(1),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            None,
        );
        let draft = ActivityDraft::new("Breakfast", ActivityCategory::Food);
        let id = plan
            .activities
            .append(draft.into_activity(ActivityId(5), plan.id));

        assert_eq!(plan.activity(id).map(|a| a.title.as_str()), Some("Breakfast"));
        assert!(plan.activity(ActivityId(99)).is_none());
    }
}
