//! Activity ordering engine: CRUD, completion toggle, reorder, and
//! cross-day moves. All mutations go through the ordered-list primitive so
//! the order-contiguity invariant is never bypassed.

use super::{ItineraryError, ItineraryStore};
use crate::models::activity::{ActivityDraft, ActivityId, ActivityPatch};
use crate::models::day_plan::{DayPlan, DayPlanId};

impl ItineraryStore {
    /// Append an activity to a day plan. Unlike the silent-no-op mutators,
    /// an unresolved day here is reported: the caller gets no id back to
    /// work with otherwise.
    pub fn add_activity(
        &mut self,
        day_id: DayPlanId,
        draft: ActivityDraft,
    ) -> Result<ActivityId, ItineraryError> {
        if self.get_day_plan(day_id).is_none() {
            return Err(ItineraryError::DayPlanNotFound(day_id));
        }
        let activity_id = self.alloc_activity_id();
        let plan = self
            .get_day_plan_mut(day_id)
            .ok_or(ItineraryError::DayPlanNotFound(day_id))?;
        let id = plan.activities.append(draft.into_activity(activity_id, day_id));
        self.persist();
        Ok(id)
    }

    /// Merge patch fields into an activity. `order` and `day_id` are not
    /// reachable through this path. Silent no-op on unresolved ids;
    /// returns whether a merge happened.
    pub fn update_activity(
        &mut self,
        day_id: DayPlanId,
        activity_id: ActivityId,
        patch: ActivityPatch,
    ) -> bool {
        let Some(activity) = self
            .get_day_plan_mut(day_id)
            .and_then(|plan| plan.activities.get_mut(activity_id))
        else {
            return false;
        };
        patch.apply(activity);
        self.persist();
        true
    }

    /// Remove an activity and recompact the day's order indices. Deletions
    /// are idempotent; an unresolved id is a silent no-op.
    pub fn delete_activity(&mut self, day_id: DayPlanId, activity_id: ActivityId) -> bool {
        let Some(plan) = self.get_day_plan_mut(day_id) else {
            return false;
        };
        let removed = plan.activities.remove_by_id(activity_id).is_some();
        if removed {
            self.persist();
        }
        removed
    }

    /// Flip an activity's completion flag. Two toggles restore the
    /// original state; nothing else changes.
    pub fn toggle_activity_completed(&mut self, day_id: DayPlanId, activity_id: ActivityId) -> bool {
        let Some(activity) = self
            .get_day_plan_mut(day_id)
            .and_then(|plan| plan.activities.get_mut(activity_id))
        else {
            return false;
        };
        activity.is_completed = !activity.is_completed;
        self.persist();
        true
    }

    /// Rewrite a day's activity sequence to match `ids`. Fails closed:
    /// unless `ids` is exactly a permutation of the day's current activity
    /// ids, the day is left untouched and the error is reported.
    pub fn reorder_activities(
        &mut self,
        day_id: DayPlanId,
        ids: &[ActivityId],
    ) -> Result<(), ItineraryError> {
        let plan = self
            .get_day_plan_mut(day_id)
            .ok_or(ItineraryError::DayPlanNotFound(day_id))?;
        plan.activities.reorder(ids)?;
        self.persist();
        Ok(())
    }

    /// Move an activity into another day at `target_index` (clamped to the
    /// target's length). Both days recompact atomically and the moved
    /// activity's `day_id` is rewritten; no intermediate unattached state
    /// is observable. Moving within the same day degrades to a remove and
    /// reinsert at the clamped index. Unresolved ids are silent no-ops;
    /// returns whether a move happened.
    pub fn move_activity_to_day(
        &mut self,
        from_day_id: DayPlanId,
        to_day_id: DayPlanId,
        activity_id: ActivityId,
        target_index: usize,
    ) -> bool {
        if from_day_id == to_day_id {
            let Some(plan) = self.get_day_plan_mut(from_day_id) else {
                return false;
            };
            let moved = plan.activities.move_within(activity_id, target_index);
            if moved {
                self.persist();
            }
            return moved;
        }

        let Some(from_index) = self.day_plans.iter().position(|p| p.id == from_day_id) else {
            return false;
        };
        let Some(to_index) = self.day_plans.iter().position(|p| p.id == to_day_id) else {
            return false;
        };

        let (from_plan, to_plan) = day_plan_pair_mut(&mut self.day_plans, from_index, to_index);
        let moved = from_plan
            .activities
            .move_into(&mut to_plan.activities, activity_id, target_index);
        if moved {
            if let Some(activity) = to_plan.activities.get_mut(activity_id) {
                activity.day_id = to_day_id;
            }
            log::info!(
                "move_activity_to_day: moved {activity_id:?} from {from_day_id:?} to {to_day_id:?}"
            );
            self.persist();
        }
        moved
    }
}

/// Disjoint mutable borrows of two day plans. `a` and `b` must be distinct
/// valid indices.
fn day_plan_pair_mut(
    day_plans: &mut [DayPlan],
    a: usize,
    b: usize,
) -> (&mut DayPlan, &mut DayPlan) {
    if a < b {
        let (left, right) = day_plans.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = day_plans.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity::ActivityCategory;
    use crate::models::day_plan::TripId;
    use chrono::NaiveDate;

    fn store_with_day() -> (ItineraryStore, DayPlanId) {
        let mut store = ItineraryStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let day_id = store.add_day_plan(TripId(1), date, None);
        (store, day_id)
    }

    fn add(store: &mut ItineraryStore, day_id: DayPlanId, title: &str) -> ActivityId {
        store
            .add_activity(day_id, ActivityDraft::new(title, ActivityCategory::Other))
            .unwrap()
    }

    fn titles_in_order(store: &ItineraryStore, day_id: DayPlanId) -> Vec<String> {
        store
            .get_day_plan(day_id)
            .unwrap()
            .activities
            .iter()
            .map(|a| a.title.clone())
            .collect()
    }

    fn orders(store: &ItineraryStore, day_id: DayPlanId) -> Vec<u32> {
        store
            .get_day_plan(day_id)
            .unwrap()
            .activities
            .iter()
            .map(|a| a.order)
            .collect()
    }

    #[test]
    fn test_add_then_delete_recompacts() {
        let (mut store, day_id) = store_with_day();
        let _a = add(&mut store, day_id, "A");
        let b = add(&mut store, day_id, "B");
        let _c = add(&mut store, day_id, "C");

        assert_eq!(orders(&store, day_id), vec![0, 1, 2]);

        assert!(store.delete_activity(day_id, b));
        assert_eq!(titles_in_order(&store, day_id), vec!["A", "C"]);
        assert_eq!(orders(&store, day_id), vec![0, 1]);
    }

    #[test]
    fn test_add_to_unknown_day_is_reported() {
        let mut store = ItineraryStore::new();
        let err = store
            .add_activity(
                DayPlanId(42),
                ActivityDraft::new("Lost", ActivityCategory::Other),
            )
            .unwrap_err();
        assert_eq!(err, ItineraryError::DayPlanNotFound(DayPlanId(42)));
    }

    #[test]
    fn test_update_merges_without_touching_order() {
        let (mut store, day_id) = store_with_day();
        let a = add(&mut store, day_id, "A");
        let b = add(&mut store, day_id, "B");

        let patch = ActivityPatch::new()
            .title("A updated")
            .category(ActivityCategory::Food)
            .start_time(Some("12:00".into()));
        assert!(store.update_activity(day_id, a, patch));

        let plan = store.get_day_plan(day_id).unwrap();
        let activity = plan.activity(a).unwrap();
        assert_eq!(activity.title, "A updated");
        assert_eq!(activity.category, ActivityCategory::Food);
        assert_eq!(activity.order, 0);
        assert_eq!(plan.activity(b).unwrap().order, 1);
    }

    #[test]
    fn test_update_unknown_ids_is_silent_noop() {
        let (mut store, day_id) = store_with_day();
        let a = add(&mut store, day_id, "A");

        assert!(!store.update_activity(day_id, ActivityId(999), ActivityPatch::new().title("X")));
        assert!(!store.update_activity(DayPlanId(999), a, ActivityPatch::new().title("X")));
        assert_eq!(titles_in_order(&store, day_id), vec!["A"]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (mut store, day_id) = store_with_day();
        let a = add(&mut store, day_id, "A");

        assert!(store.delete_activity(day_id, a));
        assert!(!store.delete_activity(day_id, a));
        assert!(!store.delete_activity(DayPlanId(999), a));
    }

    #[test]
    fn test_toggle_completed_is_an_involution() {
        let (mut store, day_id) = store_with_day();
        let a = add(&mut store, day_id, "A");
        let before = store.get_day_plan(day_id).unwrap().activity(a).unwrap().clone();

        assert!(store.toggle_activity_completed(day_id, a));
        let flipped = store.get_day_plan(day_id).unwrap().activity(a).unwrap();
        assert!(flipped.is_completed);

        assert!(store.toggle_activity_completed(day_id, a));
        let restored = store.get_day_plan(day_id).unwrap().activity(a).unwrap();
        assert_eq!(*restored, before);

        assert!(!store.toggle_activity_completed(day_id, ActivityId(999)));
    }

    #[test]
    fn test_reorder_two_activities() {
        let (mut store, day_id) = store_with_day();
        let a = add(&mut store, day_id, "A");
        let c = add(&mut store, day_id, "C");

        store.reorder_activities(day_id, &[c, a]).unwrap();

        let plan = store.get_day_plan(day_id).unwrap();
        assert_eq!(plan.activity(c).unwrap().order, 0);
        assert_eq!(plan.activity(a).unwrap().order, 1);
        assert_eq!(titles_in_order(&store, day_id), vec!["C", "A"]);
    }

    #[test]
    fn test_reorder_rejects_non_permutation_and_preserves_state() {
        let (mut store, day_id) = store_with_day();
        let a = add(&mut store, day_id, "A");
        let b = add(&mut store, day_id, "B");

        let err = store.reorder_activities(day_id, &[a]).unwrap_err();
        assert!(matches!(err, ItineraryError::InvalidReorder(_)));

        let err = store
            .reorder_activities(day_id, &[a, ActivityId(999)])
            .unwrap_err();
        assert!(matches!(err, ItineraryError::InvalidReorder(_)));

        assert_eq!(titles_in_order(&store, day_id), vec!["A", "B"]);
        assert_eq!(orders(&store, day_id), vec![0, 1]);
        let _ = b;
    }

    #[test]
    fn test_reorder_unknown_day_is_reported() {
        let mut store = ItineraryStore::new();
        let err = store.reorder_activities(DayPlanId(7), &[]).unwrap_err();
        assert_eq!(err, ItineraryError::DayPlanNotFound(DayPlanId(7)));
    }

    #[test]
    fn test_move_to_day_inserts_at_index_and_rewrites_day_id() {
        let mut store = ItineraryStore::new();
        let date1 = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let date2 = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let day1 = store.add_day_plan(TripId(1), date1, None);
        let day2 = store.add_day_plan(TripId(1), date2, None);

        let x = add(&mut store, day1, "X");
        let y = add(&mut store, day1, "Y");
        add(&mut store, day2, "P");
        add(&mut store, day2, "Q");

        assert!(store.move_activity_to_day(day1, day2, x, 0));

        assert_eq!(titles_in_order(&store, day2), vec!["X", "P", "Q"]);
        assert_eq!(orders(&store, day2), vec![0, 1, 2]);
        assert_eq!(titles_in_order(&store, day1), vec!["Y"]);
        assert_eq!(orders(&store, day1), vec![0]);

        let moved = store.get_day_plan(day2).unwrap().activity(x).unwrap();
        assert_eq!(moved.day_id, day2);
        assert_eq!(store.get_day_plan(day1).unwrap().activity(y).unwrap().day_id, day1);
    }

    #[test]
    fn test_move_preserves_combined_count() {
        let mut store = ItineraryStore::new();
        let date1 = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let date2 = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let day1 = store.add_day_plan(TripId(1), date1, None);
        let day2 = store.add_day_plan(TripId(1), date2, None);

        let a = add(&mut store, day1, "A");
        add(&mut store, day1, "B");
        add(&mut store, day2, "C");

        let count = |store: &ItineraryStore| {
            store.get_day_plan(day1).unwrap().activities.len()
                + store.get_day_plan(day2).unwrap().activities.len()
        };
        let before = count(&store);

        assert!(store.move_activity_to_day(day1, day2, a, 1));
        assert_eq!(count(&store), before);
    }

    #[test]
    fn test_move_into_empty_day_lands_at_index_zero() {
        let mut store = ItineraryStore::new();
        let date1 = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let date2 = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let day1 = store.add_day_plan(TripId(1), date1, None);
        let day2 = store.add_day_plan(TripId(1), date2, None);
        let a = add(&mut store, day1, "A");

        // Target index beyond the empty day clamps to 0.
        assert!(store.move_activity_to_day(day1, day2, a, 3));
        assert_eq!(orders(&store, day2), vec![0]);
        assert!(store.get_day_plan(day1).unwrap().activities.is_empty());
    }

    #[test]
    fn test_move_within_same_day_reorders() {
        let (mut store, day_id) = store_with_day();
        add(&mut store, day_id, "A");
        add(&mut store, day_id, "B");
        let c = add(&mut store, day_id, "C");

        assert!(store.move_activity_to_day(day_id, day_id, c, 0));
        assert_eq!(titles_in_order(&store, day_id), vec!["C", "A", "B"]);
        assert_eq!(orders(&store, day_id), vec![0, 1, 2]);
    }

    #[test]
    fn test_move_with_unknown_ids_is_silent_noop() {
        let mut store = ItineraryStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let day1 = store.add_day_plan(TripId(1), date, None);
        let a = add(&mut store, day1, "A");

        assert!(!store.move_activity_to_day(day1, DayPlanId(999), a, 0));
        assert!(!store.move_activity_to_day(DayPlanId(999), day1, a, 0));
        assert!(!store.move_activity_to_day(day1, day1, ActivityId(999), 0));
        assert_eq!(titles_in_order(&store, day1), vec!["A"]);
    }
}
