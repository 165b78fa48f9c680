//! Core input types for day planning: devices, rate intervals, and the
//! top-level plan input consumed from the caller.

use serde::{Deserialize, Serialize};

use crate::plan::clock::HOURS_PER_DAY;

/// Length of the day window in internal hours; the night window covers the
/// remaining hours up to 24.
pub const DAY_WINDOW_HOURS: usize = 14;

/// Part of the day a device is allowed to run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DeviceMode {
    /// Daytime only: internal hours `[0, 14)`.
    Day,
    /// Nighttime only: internal hours `[14, 24)`.
    Night,
    /// Any hour of the day. This is the default when the input omits a mode.
    #[default]
    AllDay,
}

impl DeviceMode {
    /// Internal-hour window `[start, end)` in which a device with this mode
    /// may run.
    pub fn window(self) -> (usize, usize) {
        match self {
            Self::Day => (0, DAY_WINDOW_HOURS),
            Self::Night => (DAY_WINDOW_HOURS, HOURS_PER_DAY),
            Self::AllDay => (0, HOURS_PER_DAY),
        }
    }
}

/// An electrical device requesting one contiguous run of hours.
///
/// Devices are read-only inputs; the planner never creates or mutates them
/// and refers to them by `id` throughout.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Device {
    /// Unique device identifier.
    pub id: String,
    /// Human-readable name, for display only.
    pub name: String,
    /// Rated draw in watts while the device is running (> 0).
    pub power: f32,
    /// Contiguous run length in whole hours (1..=24).
    pub duration: usize,
    /// Allowed part of the day; the whole day when omitted.
    #[serde(default)]
    pub mode: DeviceMode,
}

/// One electricity rate over a span of clock hours.
///
/// `to` is exclusive; `to <= from` means the interval wraps past midnight.
/// The caller must supply intervals that jointly cover all 24 clock hours.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RateInterval {
    /// First clock hour covered (0..24).
    pub from: u32,
    /// First clock hour not covered (0..24).
    pub to: u32,
    /// Cost per kilowatt of load per hour.
    pub value: f32,
}

/// Complete input for one planning run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlanInput {
    /// Devices to place, in caller order. The planner consumes them in
    /// reverse order, so the last-listed device is placed first.
    pub devices: Vec<Device>,
    /// Rate intervals covering the full day.
    pub rates: Vec<RateInterval>,
    /// Maximum simultaneous power draw in watts.
    pub max_power: f32,
}
