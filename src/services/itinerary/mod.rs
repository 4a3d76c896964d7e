//! Itinerary store entry point.
//!
//! One service object owns the day-plan collection and exposes the
//! read/write accessor contract consumed by the UI layers; callers hold an
//! explicit reference rather than going through a global. Mutations are
//! synchronous and run to completion, so the order-contiguity invariant is
//! observable between any two calls. Operations are organized across
//! focused submodules.

use std::path::{Path, PathBuf};

use anyhow::Result;

mod activities;
mod day_plans;
pub mod error;
pub mod persistence;

pub use error::ItineraryError;
pub use persistence::{ItinerarySnapshot, STORE_NAME};

use crate::models::activity::ActivityId;
use crate::models::day_plan::{DayPlan, DayPlanId};

/// Owns the itinerary state for the running app.
///
/// When constructed with a snapshot path, every committed mutation is
/// followed by a best-effort snapshot write; a write failure is logged and
/// the in-memory state stays authoritative.
pub struct ItineraryStore {
    day_plans: Vec<DayPlan>,
    next_day_plan_id: i64,
    next_activity_id: i64,
    snapshot_path: Option<PathBuf>,
}

impl Default for ItineraryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItineraryStore {
    /// Create an empty in-memory store with no persistence side effects.
    pub fn new() -> Self {
        Self::from_snapshot(ItinerarySnapshot::default())
    }

    pub fn from_snapshot(snapshot: ItinerarySnapshot) -> Self {
        Self {
            day_plans: snapshot.day_plans,
            next_day_plan_id: snapshot.next_day_plan_id.max(1),
            next_activity_id: snapshot.next_activity_id.max(1),
            snapshot_path: None,
        }
    }

    /// Rehydrate the store from a snapshot file and keep persisting to it.
    /// A missing file bootstraps an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let snapshot = persistence::load_snapshot(&path)?;
        let mut store = Self::from_snapshot(snapshot);
        store.snapshot_path = Some(path);
        log::info!(
            "loaded itinerary store: {} day plan(s)",
            store.day_plans.len()
        );
        Ok(store)
    }

    /// Returns a snapshot of the current state for JSON serialization.
    pub fn snapshot(&self) -> ItinerarySnapshot {
        ItinerarySnapshot {
            next_day_plan_id: self.next_day_plan_id,
            next_activity_id: self.next_activity_id,
            day_plans: self.day_plans.clone(),
        }
    }

    /// Saves the current state to a JSON file.
    pub fn save_to_disk(&self, path: &Path) -> Result<()> {
        persistence::save_snapshot(path, &self.snapshot())
    }

    pub(crate) fn alloc_day_plan_id(&mut self) -> DayPlanId {
        let id = DayPlanId(self.next_day_plan_id);
        self.next_day_plan_id += 1;
        id
    }

    pub(crate) fn alloc_activity_id(&mut self) -> ActivityId {
        let id = ActivityId(self.next_activity_id);
        self.next_activity_id += 1;
        id
    }

    /// Best-effort persistence after a committed mutation. Failure is a
    /// non-fatal warning; the mutation is never rolled back.
    pub(crate) fn persist(&self) {
        let Some(path) = &self.snapshot_path else {
            return;
        };
        if let Err(err) = persistence::save_snapshot(path, &self.snapshot()) {
            log::warn!("failed to persist itinerary snapshot: {err:#}");
        }
    }
}
