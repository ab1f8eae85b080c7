pub mod planner;
pub mod trips;
