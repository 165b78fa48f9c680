//! Energy cost aggregation over a completed day plan.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::plan::planner::DayPlan;
use crate::plan::types::Device;

/// Total and per-device energy cost for one planned day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumedEnergy {
    /// Whole-day cost, rounded to 3 decimal places for reporting.
    pub value: f32,
    /// Unrounded cost per device id.
    pub devices: BTreeMap<String, f32>,
}

/// Walks the final occupancy against the rate table and accumulates cost.
///
/// Each hour contributes `used_power * rate / 1000` to the total (power in
/// watts, rate per kilowatt-hour), and each occupying device contributes
/// `device.power * rate / 1000` to its own entry.
pub fn consumed_energy(plan: &DayPlan, devices: &[Device]) -> ConsumedEnergy {
    let power_by_id: HashMap<&str, f32> = devices
        .iter()
        .map(|device| (device.id.as_str(), device.power))
        .collect();

    let mut total = 0.0_f32;
    let mut per_device: BTreeMap<String, f32> = BTreeMap::new();

    for (hour, occupancy) in plan.occupancy.iter() {
        let Some(rate) = plan.rates.get(hour) else {
            continue;
        };
        total += occupancy.used_power * rate / 1000.0;
        for id in &occupancy.device_ids {
            let power = power_by_id.get(id.as_str()).copied().unwrap_or_default();
            *per_device.entry(id.clone()).or_insert(0.0) += power * rate / 1000.0;
        }
    }

    ConsumedEnergy {
        value: round_to_milli(total),
        devices: per_device,
    }
}

/// Rounds to 3 decimal places.
fn round_to_milli(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}
