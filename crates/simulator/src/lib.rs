//! Environment Simulator
//!
//! Evolves the environmental state of a monitored zone one step at a
//! time: classify the readings, resolve the response action, apply the
//! action's physical effect, then check the termination predicates.

mod effects;
mod error;
mod run;
mod state;

pub use error::SimulationError;
pub use run::{run_simulation, Outcome, SimulationConfig, SimulationReport, StepRecord};
pub use state::{EnvironmentState, SMOKE_RANGE, TEMPERATURE_RANGE, ZONE_RISK_RANGE};
