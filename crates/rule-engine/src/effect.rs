//! Action effect classification

use serde::{Deserialize, Serialize};

/// Physical effect class of a response action.
///
/// Carried explicitly on every rule so the effect model never parses
/// action names at simulation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectClass {
    /// Sprinkler or emergency systems knock down heat and smoke
    Suppress,
    /// Clearing people lowers zone risk while conditions keep worsening
    Evacuate,
    /// Forced airflow clears smoke
    Ventilate,
    /// Audible warning only; the fire develops on its own
    Alert,
    /// Passive observation with small ambient drift
    Monitor,
    /// Any other intervention, with a moderate uncertain effect
    Moderate,
}

impl EffectClass {
    /// Derive the effect class from an action name.
    ///
    /// Kept for rule files written without explicit tags. Keyword tests
    /// run in a fixed order and the first match wins, so
    /// "EvacuateAndVentilate" classifies as Evacuate while
    /// "AlertAndVentilate" classifies as Ventilate.
    pub fn from_action_name(name: &str) -> Self {
        if name.contains("Sprinklers") || name.contains("Emergency") || name.contains("Maximum") {
            Self::Suppress
        } else if name.contains("Evacuate") || name.contains("Evacuation") {
            Self::Evacuate
        } else if name.contains("Ventilate") {
            Self::Ventilate
        } else if name.contains("Alert") {
            Self::Alert
        } else if name == "Monitor" {
            Self::Monitor
        } else {
            Self::Moderate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EffectClass::Suppress => "suppress",
            EffectClass::Evacuate => "evacuate",
            EffectClass::Ventilate => "ventilate",
            EffectClass::Alert => "alert",
            EffectClass::Monitor => "monitor",
            EffectClass::Moderate => "moderate",
        }
    }
}
