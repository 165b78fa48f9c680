//! Hour-indexed occupancy bookkeeping for committed device placements.

use crate::plan::clock::HOURS_PER_DAY;
use crate::plan::slot::Slot;
use crate::plan::types::Device;

/// Power usage and occupying devices for one internal hour.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourOccupancy {
    /// Total committed power draw in watts.
    pub used_power: f32,
    /// Ids of devices running in this hour, in placement order.
    pub device_ids: Vec<String>,
}

/// Dense internal-hour occupancy table, mutated once per placed device.
///
/// Placements are permanent for the run; there is no removal operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyTable {
    hours: [HourOccupancy; HOURS_PER_DAY],
}

impl OccupancyTable {
    /// Creates a table with all 24 hours at zero power and no devices.
    pub fn empty() -> Self {
        Self {
            hours: std::array::from_fn(|_| HourOccupancy::default()),
        }
    }

    /// Commits `device` into every internal hour of `slot`.
    ///
    /// Adds the device's power to `used_power` and appends its id to
    /// `device_ids` for each hour in `[slot.from, slot.to)`.
    pub fn commit(&mut self, slot: &Slot, device: &Device) {
        for hour in &mut self.hours[slot.from..slot.to] {
            hour.used_power += device.power;
            hour.device_ids.push(device.id.clone());
        }
    }

    /// Returns the occupancy record for `internal_hour`.
    pub fn hour(&self, internal_hour: usize) -> &HourOccupancy {
        &self.hours[internal_hour]
    }

    /// Iterates over all hours as `(internal_hour, occupancy)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &HourOccupancy)> {
        self.hours.iter().enumerate()
    }
}
