//! Plan-input loading, validation, and the built-in sample dataset.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::plan::clock::{HOURS_PER_DAY, HourMap};
use crate::plan::rates::RateTable;
use crate::plan::types::{Device, DeviceMode, PlanInput, RateInterval};

/// Input error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"devices[2].power"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input error: {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Available preset names.
pub const PRESETS: &[&str] = &["sample"];

/// Returns the built-in sample dataset: five household devices, a five-band
/// tariff, and a 2100 W budget.
pub fn sample() -> PlanInput {
    let device = |id: &str, name: &str, power: f32, duration: usize, mode: DeviceMode| Device {
        id: id.to_string(),
        name: name.to_string(),
        power,
        duration,
        mode,
    };
    let rate = |from: u32, to: u32, value: f32| RateInterval { from, to, value };

    PlanInput {
        devices: vec![
            device("dishwasher", "Dishwasher", 950.0, 3, DeviceMode::Night),
            device("oven", "Oven", 2000.0, 2, DeviceMode::Day),
            device("fridge", "Refrigerator", 50.0, 24, DeviceMode::AllDay),
            device("thermostat", "Thermostat", 50.0, 24, DeviceMode::AllDay),
            device("air-conditioner", "Air conditioner", 850.0, 1, DeviceMode::AllDay),
        ],
        rates: vec![
            rate(7, 10, 6.46),
            rate(10, 17, 5.38),
            rate(17, 21, 6.46),
            rate(21, 23, 5.38),
            rate(23, 7, 1.79),
        ],
        max_power: 2100.0,
    }
}

/// Loads a plan input from a named preset.
///
/// # Errors
///
/// Returns a `ConfigError` if the preset name is unknown.
pub fn from_preset(name: &str) -> Result<PlanInput, ConfigError> {
    match name {
        "sample" => Ok(sample()),
        _ => Err(ConfigError::new(
            "preset",
            format!("unknown preset \"{name}\", available: {}", PRESETS.join(", ")),
        )),
    }
}

/// Loads a plan input from a TOML or JSON file, dispatching on the extension.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, has an unsupported
/// extension, or does not parse.
pub fn load_input(path: &Path) -> Result<PlanInput, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| {
        ConfigError::new("input", format!("cannot read \"{}\": {e}", path.display()))
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => from_toml_str(&content),
        Some("json") => from_json_str(&content),
        _ => Err(ConfigError::new(
            "input",
            format!("\"{}\": expected a .toml or .json file", path.display()),
        )),
    }
}

/// Parses a plan input from a TOML string.
///
/// # Errors
///
/// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
pub fn from_toml_str(s: &str) -> Result<PlanInput, ConfigError> {
    toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
}

/// Parses a plan input from a JSON string.
///
/// # Errors
///
/// Returns a `ConfigError` if the JSON is invalid or contains unknown fields.
pub fn from_json_str(s: &str) -> Result<PlanInput, ConfigError> {
    serde_json::from_str(s).map_err(|e| ConfigError::new("json", e.to_string()))
}

/// Validates all fields and returns a list of errors.
///
/// Returns an empty vector if the input is well-formed. The planner itself
/// assumes these contracts hold and does not re-check them.
pub fn validate(input: &PlanInput) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if !(input.max_power > 0.0 && input.max_power.is_finite()) {
        errors.push(ConfigError::new("maxPower", "must be > 0 and finite"));
    }

    for (i, device) in input.devices.iter().enumerate() {
        if device.id.is_empty() {
            errors.push(ConfigError::new(format!("devices[{i}].id"), "must not be empty"));
        }
        if !(device.power > 0.0 && device.power.is_finite()) {
            errors.push(ConfigError::new(
                format!("devices[{i}].power"),
                "must be > 0 and finite",
            ));
        }
        if device.duration == 0 || device.duration > HOURS_PER_DAY {
            errors.push(ConfigError::new(
                format!("devices[{i}].duration"),
                "must be between 1 and 24 hours",
            ));
        }
        if input.devices[..i].iter().any(|other| other.id == device.id) {
            errors.push(ConfigError::new(
                format!("devices[{i}].id"),
                format!("duplicate id \"{}\"", device.id),
            ));
        }
    }

    for (i, rate) in input.rates.iter().enumerate() {
        if rate.from as usize >= HOURS_PER_DAY {
            errors.push(ConfigError::new(
                format!("rates[{i}].from"),
                "must be a clock hour in 0..24",
            ));
        }
        if rate.to as usize >= HOURS_PER_DAY {
            errors.push(ConfigError::new(
                format!("rates[{i}].to"),
                "must be a clock hour in 0..24",
            ));
        }
        if !rate.value.is_finite() {
            errors.push(ConfigError::new(format!("rates[{i}].value"), "must be finite"));
        }
    }

    // Coverage is a contract the core builder does not enforce, so surface
    // gaps here where the caller can still fix the input.
    let table = RateTable::from_intervals(&input.rates, HourMap::default());
    if !table.is_complete() {
        errors.push(ConfigError::new(
            "rates",
            format!(
                "intervals leave {} hour(s) of the day without a rate",
                table.undefined_hour_count()
            ),
        ));
    }

    errors
}
