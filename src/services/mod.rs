// Service module exports

pub mod itinerary;
