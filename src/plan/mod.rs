/// Clock-hour to internal-hour mapping.
pub mod clock;
pub mod energy;
/// Per-hour power usage and device occupancy bookkeeping.
pub mod occupancy;
pub mod planner;
/// Dense internal-hour rate lookup built from clock-hour intervals.
pub mod rates;
pub mod slot;
pub mod types;

// Re-export the main types for convenience
pub use planner::DayPlan;
pub use planner::PlanError;
pub use planner::plan_day;
pub use slot::Slot;
pub use types::Device;
pub use types::DeviceMode;
pub use types::PlanInput;
pub use types::RateInterval;
