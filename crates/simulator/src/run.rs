//! Simulation step loop and termination

use fuzzifier::{fuzzify_smoke, fuzzify_zone, SmokeCategory, ZoneCategory};
use rand::Rng;
use rule_engine::ActionResolver;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::effects::apply_effect;
use crate::state::EnvironmentState;

/// Terminal condition of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Fire localized and put out
    Extinguished,
    /// Fire out of control
    Runaway,
    /// Step budget exhausted with neither predicate reached
    Incomplete,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Extinguished => "extinguished",
            Outcome::Runaway => "runaway fire",
            Outcome::Incomplete => "incomplete",
        }
    }
}

/// Tuning knobs for a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Maximum number of steps before the run stops as Incomplete
    pub max_steps: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { max_steps: 15 }
    }
}

/// One step of a run, as consumed by the presentation layer.
///
/// Readings are the pre-step state; the action is the response the
/// resolver chose for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub step_index: u32,
    pub smoke: f64,
    pub temperature: f64,
    pub zone_risk: f64,
    pub smoke_category: SmokeCategory,
    pub zone_category: ZoneCategory,
    pub action_name: String,
    pub description: String,
    pub priority: i32,
}

/// Full result of a run: the step trace and how it ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub steps: Vec<StepRecord>,
    pub outcome: Outcome,
    pub final_state: EnvironmentState,
}

/// Run one simulation to completion.
///
/// Each step classifies the current readings, resolves the
/// highest-priority action for the category pair, applies the action's
/// physical effect, clamps and rounds the state, and re-checks the
/// termination predicates. The runaway predicate is checked before the
/// suppression predicate. Predicates are also evaluated on the initial
/// state, so a run that already starts terminal ends with an empty trace.
pub fn run_simulation<R: Rng>(
    resolver: &ActionResolver,
    initial: EnvironmentState,
    config: &SimulationConfig,
    rng: &mut R,
) -> SimulationReport {
    let mut state = initial;
    let mut steps: Vec<StepRecord> = Vec::new();

    info!(
        smoke = state.smoke,
        temperature = state.temperature,
        zone_risk = state.zone_risk,
        max_steps = config.max_steps,
        "starting simulation run"
    );

    let outcome = loop {
        if let Some(outcome) = terminal_outcome(&state) {
            break outcome;
        }
        if steps.len() as u32 >= config.max_steps {
            break Outcome::Incomplete;
        }

        let smoke_category = fuzzify_smoke(state.smoke);
        let zone_category = fuzzify_zone(state.zone_risk);
        let action = resolver.resolve(smoke_category, zone_category);
        debug!(
            step = steps.len(),
            action = %action.name,
            priority = action.priority,
            "resolved action"
        );

        steps.push(StepRecord {
            step_index: steps.len() as u32,
            smoke: state.smoke,
            temperature: state.temperature,
            zone_risk: state.zone_risk,
            smoke_category,
            zone_category,
            action_name: action.name,
            description: action.description,
            priority: action.priority,
        });

        apply_effect(&mut state, action.effect, rng);
        state.clamp_and_round();
        debug!(
            smoke = state.smoke,
            temperature = state.temperature,
            zone_risk = state.zone_risk,
            "state after effect"
        );
    };

    info!(
        outcome = outcome.as_str(),
        steps = steps.len(),
        "simulation finished"
    );

    SimulationReport {
        steps,
        outcome,
        final_state: state,
    }
}

/// Runaway is checked before suppression.
fn terminal_outcome(state: &EnvironmentState) -> Option<Outcome> {
    if state.temperature >= 100.0 && state.smoke >= 70.0 {
        Some(Outcome::Runaway)
    } else if state.smoke < 5.0 && state.temperature < 30.0 && state.zone_risk < 20.0 {
        Some(Outcome::Extinguished)
    } else {
        None
    }
}
