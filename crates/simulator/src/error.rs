//! Simulation error types

use thiserror::Error;

/// Errors raised when a simulation run is set up
#[derive(Debug, Clone, Error)]
pub enum SimulationError {
    /// Initial condition outside its allowed range. Out-of-range initial
    /// input is rejected rather than clamped; clamping applies only to
    /// post-step state.
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    InvalidInitial {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Initial condition is NaN or infinite
    #[error("{field} value is not finite")]
    NotFinite { field: &'static str },
}
