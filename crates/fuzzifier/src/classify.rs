//! Threshold classification functions
//!
//! Each function is pure and deterministic. Band boundaries are inclusive
//! on the lower side of the higher category, so the bands neither gap nor
//! overlap.

use crate::{SmokeCategory, TemperatureCategory, ZoneCategory};

/// Smoke concentration (ppm) at or above which smoke is High
pub const SMOKE_HIGH_PPM: f64 = 50.0;
/// Smoke concentration (ppm) at or above which smoke is Low
pub const SMOKE_LOW_PPM: f64 = 10.0;

/// Temperature (°C) at or above which temperature is Critical
pub const TEMP_CRITICAL_C: f64 = 70.0;
/// Temperature (°C) at or above which temperature is Elevated
pub const TEMP_ELEVATED_C: f64 = 40.0;

/// Zone risk score at or above which the zone is in Danger
pub const ZONE_DANGER: f64 = 70.0;
/// Zone risk score at or above which the zone is in Warning
pub const ZONE_WARNING: f64 = 40.0;

/// Classify a smoke concentration reading (ppm).
pub fn fuzzify_smoke(ppm: f64) -> SmokeCategory {
    if ppm >= SMOKE_HIGH_PPM {
        SmokeCategory::High
    } else if ppm >= SMOKE_LOW_PPM {
        SmokeCategory::Low
    } else {
        SmokeCategory::None
    }
}

/// Classify a temperature reading (°C).
pub fn fuzzify_temperature(celsius: f64) -> TemperatureCategory {
    if celsius >= TEMP_CRITICAL_C {
        TemperatureCategory::Critical
    } else if celsius >= TEMP_ELEVATED_C {
        TemperatureCategory::Elevated
    } else {
        TemperatureCategory::Normal
    }
}

/// Classify a zone risk score (0-100).
pub fn fuzzify_zone(risk: f64) -> ZoneCategory {
    if risk >= ZONE_DANGER {
        ZoneCategory::Danger
    } else if risk >= ZONE_WARNING {
        ZoneCategory::Warning
    } else {
        ZoneCategory::Safe
    }
}
