// Activity module
// A single schedulable item belonging to exactly one day plan.

use serde::{Deserialize, Serialize};

use crate::models::day_plan::DayPlanId;
use crate::ordering::OrderedItem;

/// Identifier for an activity, allocated by the itinerary store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(pub i64);

/// Closed set of activity tags. Presentation (icons, colors) is a UI
/// concern and lives outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Sightseeing,
    Food,
    Transport,
    Activity,
    Relaxation,
    Shopping,
    Other,
}

impl ActivityCategory {
    /// All categories, in display order.
    pub fn all() -> [ActivityCategory; 7] {
        [
            Self::Sightseeing,
            Self::Food,
            Self::Transport,
            Self::Activity,
            Self::Relaxation,
            Self::Shopping,
            Self::Other,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sightseeing => "Sightseeing",
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Activity => "Activity",
            Self::Relaxation => "Relaxation",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }
}

impl Default for ActivityCategory {
    fn default() -> Self {
        Self::Other
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A schedulable item within one day plan.
///
/// `start_time`/`end_time` are "HH:MM" strings; the store does not require
/// `end_time >= start_time` (validation is a UI-layer concern) and the
/// timeline layout floors widths so inverted durations never collapse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub day_id: DayPlanId,
    pub title: String,
    pub category: ActivityCategory,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub booking_reference: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    pub order: u32,
}

impl OrderedItem for Activity {
    type Id = ActivityId;

    fn id(&self) -> ActivityId {
        self.id
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

/// Input for creating an activity; id, owning day and order index are
/// assigned by the store on insertion.
#[derive(Debug, Clone, Default)]
pub struct ActivityDraft {
    pub title: String,
    pub category: ActivityCategory,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub cost: Option<f64>,
    pub booking_reference: Option<String>,
}

impl ActivityDraft {
    pub fn new(title: impl Into<String>, category: ActivityCategory) -> Self {
        Self {
            title: title.into(),
            category,
            ..Self::default()
        }
    }

    /// Set the scheduled start time ("HH:MM")
    pub fn start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    /// Set the scheduled end time ("HH:MM")
    pub fn end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    /// Set the free-form location text
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the estimated cost
    pub fn cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Set the booking reference
    pub fn booking_reference(mut self, reference: impl Into<String>) -> Self {
        self.booking_reference = Some(reference.into());
        self
    }

    pub(crate) fn into_activity(self, id: ActivityId, day_id: DayPlanId) -> Activity {
        Activity {
            id,
            day_id,
            title: self.title,
            category: self.category,
            start_time: self.start_time,
            end_time: self.end_time,
            location: self.location,
            cost: self.cost,
            booking_reference: self.booking_reference,
            is_completed: false,
            order: 0,
        }
    }
}

/// Partial update for an activity. Outer `Option` means "leave as is";
/// for optional fields the inner `Option` distinguishes set from clear.
/// `order` and `day_id` are deliberately absent: they change only through
/// reorder and move operations.
#[derive(Debug, Clone, Default)]
pub struct ActivityPatch {
    pub title: Option<String>,
    pub category: Option<ActivityCategory>,
    pub start_time: Option<Option<String>>,
    pub end_time: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub cost: Option<Option<f64>>,
    pub booking_reference: Option<Option<String>>,
    pub is_completed: Option<bool>,
}

impl ActivityPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn category(mut self, category: ActivityCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn start_time(mut self, start_time: Option<String>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn end_time(mut self, end_time: Option<String>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = Some(location);
        self
    }

    pub fn cost(mut self, cost: Option<f64>) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn booking_reference(mut self, reference: Option<String>) -> Self {
        self.booking_reference = Some(reference);
        self
    }

    pub fn is_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = Some(is_completed);
        self
    }

    /// Merge the patch into an activity.
    pub fn apply(&self, activity: &mut Activity) {
        if let Some(title) = &self.title {
            activity.title = title.clone();
        }
        if let Some(category) = self.category {
            activity.category = category;
        }
        if let Some(start_time) = &self.start_time {
            activity.start_time = start_time.clone();
        }
        if let Some(end_time) = &self.end_time {
            activity.end_time = end_time.clone();
        }
        if let Some(location) = &self.location {
            activity.location = location.clone();
        }
        if let Some(cost) = self.cost {
            activity.cost = cost;
        }
        if let Some(reference) = &self.booking_reference {
            activity.booking_reference = reference.clone();
        }
        if let Some(is_completed) = self.is_completed {
            activity.is_completed = is_completed;
        }
    }
}
