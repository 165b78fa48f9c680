//! Shared test fixtures for integration tests.

use powersched::plan::types::{Device, DeviceMode, PlanInput, RateInterval};

/// Builds a device with the given id, power (watts), duration, and mode.
pub fn device(id: &str, power: f32, duration: usize, mode: DeviceMode) -> Device {
    Device {
        id: id.to_string(),
        name: id.to_string(),
        power,
        duration,
        mode,
    }
}

/// A single wrapping interval covering the whole day at a uniform rate.
pub fn flat_rate(value: f32) -> Vec<RateInterval> {
    vec![RateInterval {
        from: 7,
        to: 7,
        value,
    }]
}

/// Assembles a plan input from parts.
pub fn input(devices: Vec<Device>, rates: Vec<RateInterval>, max_power: f32) -> PlanInput {
    PlanInput {
        devices,
        rates,
        max_power,
    }
}
