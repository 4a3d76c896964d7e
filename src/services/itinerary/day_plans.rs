//! Day-plan repository operations: lazy creation over a trip's date range,
//! lookups, and cascade deletion.

use chrono::NaiveDate;

use super::ItineraryStore;
use crate::models::day_plan::{DayPlan, DayPlanId, TripId};
use crate::models::destination::DestinationId;

impl ItineraryStore {
    /// Create a day plan for every date in the inclusive range that does
    /// not already have one for this trip. `resolver` supplies the
    /// destination covering each date, if any. Idempotent: re-running the
    /// same range creates nothing new. Returns the ids of created plans.
    pub fn ensure_range(
        &mut self,
        trip_id: TripId,
        start: NaiveDate,
        end: NaiveDate,
        resolver: impl Fn(NaiveDate) -> Option<DestinationId>,
    ) -> Vec<DayPlanId> {
        let mut created = Vec::new();
        for date in start.iter_days().take_while(|date| *date <= end) {
            if self.get_day_plan_by_date(trip_id, date).is_some() {
                continue;
            }
            let id = self.alloc_day_plan_id();
            self.day_plans
                .push(DayPlan::new(id, trip_id, date, resolver(date)));
            created.push(id);
        }
        if !created.is_empty() {
            log::info!(
                "ensure_range: created {} day plan(s) for trip {trip_id:?}",
                created.len()
            );
            self.persist();
        }
        created
    }

    pub fn get_day_plan(&self, id: DayPlanId) -> Option<&DayPlan> {
        self.day_plans.iter().find(|plan| plan.id == id)
    }

    pub(crate) fn get_day_plan_mut(&mut self, id: DayPlanId) -> Option<&mut DayPlan> {
        self.day_plans.iter_mut().find(|plan| plan.id == id)
    }

    pub fn get_day_plan_by_date(&self, trip_id: TripId, date: NaiveDate) -> Option<&DayPlan> {
        self.day_plans
            .iter()
            .find(|plan| plan.trip_id == trip_id && plan.date == date)
    }

    /// Every day plan of a trip, ordered by date ascending.
    pub fn get_day_plans_by_trip(&self, trip_id: TripId) -> Vec<&DayPlan> {
        let mut plans: Vec<&DayPlan> = self
            .day_plans
            .iter()
            .filter(|plan| plan.trip_id == trip_id)
            .collect();
        plans.sort_by_key(|plan| plan.date);
        plans
    }

    /// Add a single day plan. When the trip already has a plan for the
    /// date, the existing plan's id is returned and nothing changes (one
    /// plan per (trip, date)).
    pub fn add_day_plan(
        &mut self,
        trip_id: TripId,
        date: NaiveDate,
        destination_id: Option<DestinationId>,
    ) -> DayPlanId {
        if let Some(existing) = self.get_day_plan_by_date(trip_id, date) {
            return existing.id;
        }
        let id = self.alloc_day_plan_id();
        self.day_plans
            .push(DayPlan::new(id, trip_id, date, destination_id));
        self.persist();
        id
    }

    /// Reassign a day plan's destination. Silent no-op on an unknown id.
    pub fn update_day_plan(&mut self, id: DayPlanId, destination_id: Option<DestinationId>) -> bool {
        let Some(plan) = self.get_day_plan_mut(id) else {
            return false;
        };
        plan.destination_id = destination_id;
        self.persist();
        true
    }

    /// Remove a day plan and all of its activities permanently. Silent
    /// no-op on an unknown id; deletion cannot be undone.
    pub fn delete_day_plan(&mut self, id: DayPlanId) -> bool {
        let before = self.day_plans.len();
        self.day_plans.retain(|plan| plan.id != id);
        let removed = self.day_plans.len() < before;
        if removed {
            log::info!("delete_day_plan: removed day plan {id:?}");
            self.persist();
        }
        removed
    }

    /// Cascade delete of every day plan belonging to a trip, triggered
    /// when the owning trip is deleted. Returns the number removed.
    pub fn delete_trip(&mut self, trip_id: TripId) -> usize {
        let before = self.day_plans.len();
        self.day_plans.retain(|plan| plan.trip_id != trip_id);
        let removed = before - self.day_plans.len();
        if removed > 0 {
            log::info!("delete_trip: removed {removed} day plan(s) for trip {trip_id:?}");
            self.persist();
        }
        removed
    }
}
