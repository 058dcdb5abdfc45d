//! Environmental state of the simulated zone

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Valid smoke concentration range (ppm)
pub const SMOKE_RANGE: (f64, f64) = (0.0, 100.0);
/// Valid temperature range (°C)
pub const TEMPERATURE_RANGE: (f64, f64) = (15.0, 150.0);
/// Valid zone risk range (0-100)
pub const ZONE_RISK_RANGE: (f64, f64) = (0.0, 100.0);

/// Continuous sensor state for one zone. Exclusively owned by its
/// simulation run and mutated once per step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentState {
    pub smoke: f64,
    pub temperature: f64,
    pub zone_risk: f64,
}

impl EnvironmentState {
    /// Validate caller-supplied initial conditions and build the state.
    pub fn initial(smoke: f64, temperature: f64, zone_risk: f64) -> Result<Self, SimulationError> {
        check_initial("smoke", smoke, SMOKE_RANGE)?;
        check_initial("temperature", temperature, TEMPERATURE_RANGE)?;
        check_initial("zone_risk", zone_risk, ZONE_RISK_RANGE)?;
        Ok(Self {
            smoke,
            temperature,
            zone_risk,
        })
    }

    /// Clamp each quantity to its valid range, then round to one decimal
    /// place. Applied after every effect-model step.
    pub(crate) fn clamp_and_round(&mut self) {
        self.smoke = round1(self.smoke.clamp(SMOKE_RANGE.0, SMOKE_RANGE.1));
        self.temperature = round1(self.temperature.clamp(TEMPERATURE_RANGE.0, TEMPERATURE_RANGE.1));
        self.zone_risk = round1(self.zone_risk.clamp(ZONE_RISK_RANGE.0, ZONE_RISK_RANGE.1));
    }
}

fn check_initial(
    field: &'static str,
    value: f64,
    range: (f64, f64),
) -> Result<(), SimulationError> {
    if !value.is_finite() {
        return Err(SimulationError::NotFinite { field });
    }
    if value < range.0 || value > range.1 {
        return Err(SimulationError::InvalidInitial {
            field,
            value,
            min: range.0,
            max: range.1,
        });
    }
    Ok(())
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
