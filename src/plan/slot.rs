//! Greedy slot search for a single device.

use crate::plan::occupancy::OccupancyTable;
use crate::plan::rates::RateTable;
use crate::plan::types::Device;

/// A candidate or committed contiguous run of internal hours for one device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    /// First internal hour of the run (inclusive).
    pub from: usize,
    /// First internal hour after the run (exclusive).
    pub to: usize,
    /// Sum of the rate-table values over `[from, to)`.
    pub cost_sum: f32,
}

/// Finds the cheapest feasible slot for `device` under the current occupancy.
///
/// Scans every candidate start in the device's mode window in increasing
/// order, keeping the feasible candidate with the lowest accumulated rate.
/// Ties keep the earliest-found start. A start where any hour of the run
/// would push `used_power` past `max_power` rules out that start only; the
/// scan continues with later starts.
///
/// Pure read of the tables; no side effects.
///
/// # Returns
///
/// The best slot, or `None` when no candidate start in the window is
/// feasible (including when the window is shorter than the duration).
pub fn find_slot(
    occupancy: &OccupancyTable,
    rates: &RateTable,
    max_power: f32,
    device: &Device,
) -> Option<Slot> {
    let (window_start, window_end) = device.mode.window();
    if device.duration > window_end - window_start {
        return None;
    }

    let mut best: Option<Slot> = None;
    for from in window_start..=window_end - device.duration {
        let Some(cost_sum) = run_cost(occupancy, rates, max_power, device, from) else {
            continue;
        };
        // Strict less-than keeps the earliest start on equal cost.
        if best.is_none_or(|slot| cost_sum < slot.cost_sum) {
            best = Some(Slot {
                from,
                to: from + device.duration,
                cost_sum,
            });
        }
    }
    best
}

/// Accumulated rate for running `device` over `[from, from + duration)`.
///
/// Returns `None` when the power budget would be exceeded at any hour of the
/// run, or when an hour has no defined rate.
fn run_cost(
    occupancy: &OccupancyTable,
    rates: &RateTable,
    max_power: f32,
    device: &Device,
    from: usize,
) -> Option<f32> {
    let mut cost_sum = 0.0;
    for hour in from..from + device.duration {
        if occupancy.hour(hour).used_power + device.power > max_power {
            return None;
        }
        cost_sum += rates.get(hour)?;
    }
    Some(cost_sum)
}
