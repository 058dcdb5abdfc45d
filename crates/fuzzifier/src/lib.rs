//! Sensor Fuzzification
//!
//! Maps continuous sensor readings (smoke concentration, temperature,
//! zone risk score) onto small fixed sets of categorical levels.

mod categories;
mod classify;

pub use categories::{SmokeCategory, TemperatureCategory, ZoneCategory};
pub use classify::{fuzzify_smoke, fuzzify_temperature, fuzzify_zone};
