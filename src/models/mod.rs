// Module exports for models

pub mod activity;
pub mod day_plan;
pub mod destination;
