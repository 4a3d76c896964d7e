//! Drag-to-reschedule interaction controller.
//!
//! Consumes a drag-start/drag-move/drag-end event sequence from whatever
//! gesture layer the host UI provides and commits the resulting time shift
//! through the itinerary store. Intermediate moves are visual feedback
//! only; nothing mutates until drag-end.

use crate::models::activity::{ActivityId, ActivityPatch};
use crate::models::day_plan::DayPlanId;
use crate::services::itinerary::ItineraryStore;
use crate::timeline::layout::{offset_delta_to_minutes, ZoomLevel};
use crate::utils::time::{clamp_to_day, format_hhmm, parse_hhmm};

/// The activity captured at drag start, with its original clock times.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DragSubject {
    day_id: DayPlanId,
    activity_id: ActivityId,
    start_minutes: Option<u32>,
    end_minutes: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DragState {
    Idle,
    Dragging(DragSubject),
}

/// Shifted times for rendering a drag ghost before the drop commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPreview {
    pub start_time: String,
    pub end_time: Option<String>,
}

/// Three-state drag controller: Idle → Dragging → Idle.
///
/// Start and end times are clamped to the day bound independently, so a
/// drag saturating at midnight can compress or invert the interval. That
/// matches the shipped behavior and is left as is.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl Default for DragState {
    fn default() -> Self {
        Self::Idle
    }
}

impl DragController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// The activity currently being dragged, if any.
    pub fn active_activity(&self) -> Option<ActivityId> {
        match &self.state {
            DragState::Dragging(subject) => Some(subject.activity_id),
            DragState::Idle => None,
        }
    }

    /// Record the drag subject and its original times. No mutation happens
    /// here. Returns false (and stays Idle) when the activity does not
    /// resolve in the store.
    pub fn on_drag_start(
        &mut self,
        store: &ItineraryStore,
        day_id: DayPlanId,
        activity_id: ActivityId,
    ) -> bool {
        let Some(activity) = store
            .get_day_plan(day_id)
            .and_then(|plan| plan.activity(activity_id))
        else {
            log::warn!("drag start ignored: activity {activity_id:?} not found in day {day_id:?}");
            return false;
        };

        self.state = DragState::Dragging(DragSubject {
            day_id,
            activity_id,
            start_minutes: activity.start_time.as_deref().and_then(parse_hhmm),
            end_minutes: activity.end_time.as_deref().and_then(parse_hhmm),
        });
        true
    }

    /// Preview times for the current pointer delta. Commits nothing.
    pub fn on_drag_move(&self, delta: f32, zoom: ZoomLevel) -> Option<DragPreview> {
        let DragState::Dragging(subject) = &self.state else {
            return None;
        };
        let minute_delta = offset_delta_to_minutes(delta, zoom);
        let (start, end) = shifted_times(subject, minute_delta)?;
        Some(DragPreview {
            start_time: start,
            end_time: end,
        })
    }

    /// Abandon the drag without committing, e.g. when the pointer leaves
    /// the drop target.
    pub fn on_drag_cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Convert the final pointer delta into a clock-time shift and commit
    /// it through the store. Returns to Idle regardless of outcome; a
    /// drag-end received while Idle is a no-op.
    pub fn on_drag_end(&mut self, store: &mut ItineraryStore, delta: f32, zoom: ZoomLevel) {
        let state = std::mem::replace(&mut self.state, DragState::Idle);
        let DragState::Dragging(subject) = state else {
            return;
        };

        let minute_delta = offset_delta_to_minutes(delta, zoom);
        let Some((start, end)) = shifted_times(&subject, minute_delta) else {
            // Untimed activities occupy no timeline slot; nothing to shift.
            return;
        };

        let mut patch = ActivityPatch::new().start_time(Some(start));
        if end.is_some() {
            patch = patch.end_time(end);
        }
        store.update_activity(subject.day_id, subject.activity_id, patch);
    }
}

/// Shift the subject's times by `minute_delta`, clamping start and end to
/// the 0:00–23:59 bound independently. `None` when the subject has no
/// parseable start time.
fn shifted_times(subject: &DragSubject, minute_delta: i64) -> Option<(String, Option<String>)> {
    let start = subject.start_minutes?;
    let new_start = clamp_to_day(start as i64 + minute_delta);
    let new_end = subject
        .end_minutes
        .map(|end| format_hhmm(clamp_to_day(end as i64 + minute_delta)));
    Some((format_hhmm(new_start), new_end))
}
