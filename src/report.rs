//! Caller-facing report derived from a completed day plan.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::plan::energy::{ConsumedEnergy, consumed_energy};
use crate::plan::planner::DayPlan;
use crate::plan::types::PlanInput;

/// Final planning result: clock-hour schedule plus consumed energy.
///
/// Computed post-hoc from the completed [`DayPlan`] so the schedule and the
/// cost figures always describe the same placements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    /// Clock hour (0..24) to the ordered ids of devices running in it.
    pub schedule: BTreeMap<u32, Vec<String>>,
    /// Total and per-device energy cost for the day.
    pub consumed_energy: ConsumedEnergy,
}

impl PlanReport {
    /// Builds the report for `plan`, re-keying the occupancy from internal
    /// hours back to clock hours.
    pub fn from_plan(plan: &DayPlan, input: &PlanInput) -> Self {
        let mut schedule = BTreeMap::new();
        for (hour, occupancy) in plan.occupancy.iter() {
            schedule.insert(plan.hours.to_clock(hour), occupancy.device_ids.clone());
        }

        Self {
            schedule,
            consumed_energy: consumed_energy(plan, &input.devices),
        }
    }
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Daily schedule ---")?;
        for (clock_hour, device_ids) in &self.schedule {
            if device_ids.is_empty() {
                writeln!(f, "{clock_hour:>2}:00  -")?;
            } else {
                writeln!(f, "{clock_hour:>2}:00  {}", device_ids.join(", "))?;
            }
        }
        writeln!(f)?;
        writeln!(f, "Total consumed energy: {:.3}", self.consumed_energy.value)?;
        for (device_id, cost) in &self.consumed_energy.devices {
            writeln!(f, "  {device_id}: {cost:.4}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::plan_day;
    use crate::plan::types::{Device, DeviceMode, RateInterval};

    fn one_device_input() -> PlanInput {
        PlanInput {
            devices: vec![Device {
                id: "pump".to_string(),
                name: "Pool pump".to_string(),
                power: 400.0,
                duration: 2,
                mode: DeviceMode::AllDay,
            }],
            rates: vec![RateInterval {
                from: 7,
                to: 7,
                value: 1.0,
            }],
            max_power: 1000.0,
        }
    }

    #[test]
    fn schedule_covers_all_clock_hours() {
        let input = one_device_input();
        let plan = plan_day(&input).expect("pump fits");
        let report = PlanReport::from_plan(&plan, &input);

        assert_eq!(report.schedule.len(), 24);
        for clock_hour in 0..24 {
            assert!(report.schedule.contains_key(&clock_hour));
        }
    }

    #[test]
    fn internal_hours_are_rekeyed_to_clock_hours() {
        let input = one_device_input();
        let plan = plan_day(&input).expect("pump fits");
        let report = PlanReport::from_plan(&plan, &input);

        // The pump takes internal hours 0..2, which are clock hours 7 and 8.
        assert_eq!(report.schedule[&7], vec!["pump".to_string()]);
        assert_eq!(report.schedule[&8], vec!["pump".to_string()]);
        assert!(report.schedule[&9].is_empty());
        assert!(report.schedule[&6].is_empty());
    }

    #[test]
    fn report_serializes_with_camel_case_keys() {
        let input = one_device_input();
        let plan = plan_day(&input).expect("pump fits");
        let report = PlanReport::from_plan(&plan, &input);

        let json = serde_json::to_value(&report).expect("report serializes");
        assert!(json.get("schedule").is_some());
        assert!(json.get("consumedEnergy").is_some());
        assert!(json["consumedEnergy"].get("value").is_some());
        assert!(json["schedule"].get("7").is_some());
    }

    #[test]
    fn display_lists_every_hour_and_the_total() {
        let input = one_device_input();
        let plan = plan_day(&input).expect("pump fits");
        let report = PlanReport::from_plan(&plan, &input);

        let text = format!("{report}");
        assert!(text.contains(" 7:00  pump"));
        assert!(text.contains("23:00  -"));
        assert!(text.contains("Total consumed energy: 0.800"));
    }
}
