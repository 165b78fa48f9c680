//! Scheduling driver that places every device of a plan input.

use std::error::Error;
use std::fmt;

use crate::plan::clock::HourMap;
use crate::plan::occupancy::OccupancyTable;
use crate::plan::rates::RateTable;
use crate::plan::slot::find_slot;
use crate::plan::types::PlanInput;

/// Scheduling failure raised by the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// No feasible slot exists for the device under the current occupancy
    /// and power budget. Fatal for the whole batch.
    Unschedulable {
        /// Id of the device that could not be placed.
        device_id: String,
    },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unschedulable { device_id } => {
                write!(f, "device \"{device_id}\" has no feasible slot in the schedule")
            }
        }
    }
}

impl Error for PlanError {}

/// A completed single-day plan: the final occupancy together with the hour
/// mapping and rate table it was built against.
#[derive(Debug, Clone)]
pub struct DayPlan {
    /// Clock-hour to internal-hour mapping used throughout the run.
    pub hours: HourMap,
    /// Rate table the slots were costed against.
    pub rates: RateTable,
    /// Final per-hour power usage and device occupancy.
    pub occupancy: OccupancyTable,
}

/// Plans the whole day for `input`.
///
/// Devices are consumed in reverse input order, so the last-listed device is
/// placed first. The input slice itself stays untouched. Each committed slot
/// is permanent; when a later device cannot be placed, earlier commits are
/// not rolled back and the run fails as a whole.
///
/// # Errors
///
/// Returns [`PlanError::Unschedulable`] for the first device in processing
/// order that has no feasible slot.
pub fn plan_day(input: &PlanInput) -> Result<DayPlan, PlanError> {
    let hours = HourMap::default();
    let rates = RateTable::from_intervals(&input.rates, hours);
    let mut occupancy = OccupancyTable::empty();

    for device in input.devices.iter().rev() {
        let slot = find_slot(&occupancy, &rates, input.max_power, device).ok_or_else(|| {
            PlanError::Unschedulable {
                device_id: device.id.clone(),
            }
        })?;
        occupancy.commit(&slot, device);
    }

    Ok(DayPlan {
        hours,
        rates,
        occupancy,
    })
}
