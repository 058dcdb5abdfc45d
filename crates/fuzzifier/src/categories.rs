//! Categorical label sets

use serde::{Deserialize, Serialize};

/// Smoke concentration level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SmokeCategory {
    /// No smoke detected
    None,
    /// Light smoke
    Low,
    /// Heavy smoke
    High,
}

impl SmokeCategory {
    /// All categories, in ascending severity
    pub const ALL: [Self; 3] = [Self::None, Self::Low, Self::High];

    /// Stable string form used in narration and the rule file
    pub fn as_str(&self) -> &'static str {
        match self {
            SmokeCategory::None => "None",
            SmokeCategory::Low => "Low",
            SmokeCategory::High => "High",
        }
    }
}

/// Temperature level (display only, never a rule input)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureCategory {
    Normal,
    Elevated,
    Critical,
}

impl TemperatureCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureCategory::Normal => "Normal",
            TemperatureCategory::Elevated => "Elevated",
            TemperatureCategory::Critical => "Critical",
        }
    }
}

/// Zone risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneCategory {
    Safe,
    Warning,
    Danger,
}

impl ZoneCategory {
    /// All categories, in ascending severity
    pub const ALL: [Self; 3] = [Self::Safe, Self::Warning, Self::Danger];

    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneCategory::Safe => "Safe",
            ZoneCategory::Warning => "Warning",
            ZoneCategory::Danger => "Danger",
        }
    }
}
