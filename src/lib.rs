// Trip Itinerary Library
// Itinerary scheduling core: ordered day plans and activities, timeline
// layout math, and the drag-to-reschedule controller. UI rendering, maps
// and the rest of the planner consume this crate through the store API.

pub mod models;
pub mod ordering;
pub mod services;
pub mod timeline;
pub mod utils;
