//! Disk persistence for the itinerary snapshot.
//!
//! Handles JSON snapshot load/save. A missing file bootstraps to the empty
//! snapshot; schema migration of older snapshots is out of scope.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{self, Error as SerdeError};

use crate::models::day_plan::DayPlan;

/// Stable name of the persisted store, used as the snapshot file name.
pub const STORE_NAME: &str = "itinerary";

/// Serializable snapshot of the itinerary store, written after every
/// committed mutation and rehydrated at process start.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItinerarySnapshot {
    #[serde(default)]
    pub next_day_plan_id: i64,
    #[serde(default)]
    pub next_activity_id: i64,
    #[serde(default)]
    pub day_plans: Vec<DayPlan>,
}

pub fn load_snapshot(path: &Path) -> Result<ItinerarySnapshot> {
    if !path.exists() {
        return Ok(ItinerarySnapshot::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read itinerary from {}", path.display()))?;
    let snapshot = serde_json::from_str(&data).map_err(|err| map_deser_error(err, path))?;
    Ok(snapshot)
}

pub fn save_snapshot(path: &Path, snapshot: &ItinerarySnapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write itinerary to {}", path.display()))?;
    Ok(())
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize itinerary from {}",
        path.display()
    ))
}
