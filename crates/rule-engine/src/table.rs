//! Rule table and priority-based action resolution

use fuzzifier::{SmokeCategory, ZoneCategory};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::EffectClass;

/// A single response rule: a category pair mapped to an action with a
/// priority. Higher priority means a more urgent response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub smoke: SmokeCategory,
    pub zone: ZoneCategory,
    pub action_name: String,
    pub description: String,
    pub priority: i32,
    pub effect: EffectClass,
}

impl Rule {
    pub fn new(
        smoke: SmokeCategory,
        zone: ZoneCategory,
        action_name: &str,
        description: &str,
        priority: i32,
        effect: EffectClass,
    ) -> Self {
        Self {
            smoke,
            zone,
            action_name: action_name.to_string(),
            description: description.to_string(),
            priority,
            effect,
        }
    }
}

/// The response chosen for one simulation step. Derived fresh from rule
/// lookup each step, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub description: String,
    pub priority: i32,
    pub effect: EffectClass,
}

impl Action {
    /// Returned when no rule matches a query. Unreachable under a
    /// complete rule table.
    pub fn no_action() -> Self {
        Self {
            name: "NoAction".to_string(),
            description: "no matching action".to_string(),
            priority: 0,
            effect: EffectClass::Moderate,
        }
    }
}

/// Errors raised while validating a rule table at initialization
#[derive(Debug, Clone, Error)]
pub enum RuleTableError {
    #[error("rule table is empty")]
    Empty,

    #[error("no rule covers the ({}, {}) category pair", .smoke.as_str(), .zone.as_str())]
    MissingPair {
        smoke: SmokeCategory,
        zone: ZoneCategory,
    },
}

/// Immutable set of response rules, fixed after construction.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The built-in rule set: 12 entries spanning all 9 category pairs,
    /// with High/Warning and High/Danger given extra candidates at higher
    /// priorities so the response can escalate.
    pub fn builtin() -> Self {
        use EffectClass as E;
        use SmokeCategory as S;
        use ZoneCategory as Z;

        Self::new(vec![
            // No smoke
            Rule::new(S::None, Z::Safe, "Monitor", "System in monitoring mode", 1, E::Monitor),
            Rule::new(S::None, Z::Warning, "PreventiveCheck", "Preventive inspection", 2, E::Moderate),
            Rule::new(S::None, Z::Danger, "InspectZone", "Inspection of the hazardous zone", 3, E::Moderate),
            // Light smoke
            Rule::new(S::Low, Z::Safe, "Alert", "Audible warning", 2, E::Alert),
            Rule::new(S::Low, Z::Warning, "AlertAndVentilate", "Warning and forced ventilation", 3, E::Ventilate),
            Rule::new(S::Low, Z::Danger, "ActivateSprinklersLocal", "Local sprinkler activation", 4, E::Suppress),
            // Heavy smoke
            Rule::new(S::High, Z::Safe, "EvacuateAndVentilate", "Evacuation and forced ventilation", 5, E::Evacuate),
            Rule::new(S::High, Z::Warning, "FullEvacuation", "Full building evacuation", 6, E::Evacuate),
            Rule::new(S::High, Z::Warning, "CriticalEvacuation", "Critical evacuation with full sprinkler activation", 8, E::Evacuate),
            Rule::new(S::High, Z::Danger, "EmergencyProtocol", "Emergency protocol, all systems active", 7, E::Suppress),
            Rule::new(S::High, Z::Danger, "MaximumResponse", "Maximum response, all systems active", 9, E::Suppress),
            Rule::new(S::High, Z::Danger, "FireEmergency", "Fire confirmed, all systems active, fire department notified", 10, E::Suppress),
        ])
    }

    /// Check that the table covers every reachable category pair.
    ///
    /// The resolver has a defined fallback, but a table that needs it is
    /// a configuration error and must not be loaded.
    pub fn validate(&self) -> Result<(), RuleTableError> {
        if self.rules.is_empty() {
            return Err(RuleTableError::Empty);
        }
        for smoke in SmokeCategory::ALL {
            for zone in ZoneCategory::ALL {
                if !self.rules.iter().any(|r| r.smoke == smoke && r.zone == zone) {
                    return Err(RuleTableError::MissingPair { smoke, zone });
                }
            }
        }
        Ok(())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Resolves the highest-priority action for a category pair.
///
/// Owns the rule table; resolution never mutates it, so a resolver can be
/// shared across sequential runs.
#[derive(Debug, Clone)]
pub struct ActionResolver {
    table: RuleTable,
}

impl ActionResolver {
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    /// Select the matching rule with the strictly maximal priority.
    ///
    /// When two matching rules share the maximal priority, the
    /// first-inserted one wins. Returns the NoAction fallback when
    /// nothing matches.
    pub fn resolve(&self, smoke: SmokeCategory, zone: ZoneCategory) -> Action {
        let mut best: Option<&Rule> = None;
        for rule in self.table.rules() {
            if rule.smoke != smoke || rule.zone != zone {
                continue;
            }
            match best {
                Some(current) if rule.priority <= current.priority => {}
                _ => best = Some(rule),
            }
        }

        match best {
            Some(rule) => Action {
                name: rule.action_name.clone(),
                description: rule.description.clone(),
                priority: rule.priority,
                effect: rule.effect,
            },
            None => {
                warn!(
                    smoke = smoke.as_str(),
                    zone = zone.as_str(),
                    "no rule matched, falling back to NoAction"
                );
                Action::no_action()
            }
        }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ActionResolver {
        ActionResolver::new(RuleTable::builtin())
    }

    #[test]
    fn test_builtin_table_is_complete() {
        assert_eq!(RuleTable::builtin().len(), 12);
        RuleTable::builtin().validate().unwrap();
    }

    #[test]
    fn test_every_pair_resolves_to_a_real_action() {
        let resolver = resolver();
        for smoke in SmokeCategory::ALL {
            for zone in ZoneCategory::ALL {
                let action = resolver.resolve(smoke, zone);
                assert!(
                    action.priority > 0,
                    "({:?}, {:?}) fell back to {}",
                    smoke,
                    zone,
                    action.name
                );
            }
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let resolver = resolver();
        for smoke in SmokeCategory::ALL {
            for zone in ZoneCategory::ALL {
                let first = resolver.resolve(smoke, zone);
                let second = resolver.resolve(smoke, zone);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_high_warning_escalates_to_critical_evacuation() {
        let action = resolver().resolve(SmokeCategory::High, ZoneCategory::Warning);
        assert_eq!(action.name, "CriticalEvacuation");
        assert_eq!(action.priority, 8);
    }

    #[test]
    fn test_high_danger_escalates_to_fire_emergency() {
        let action = resolver().resolve(SmokeCategory::High, ZoneCategory::Danger);
        assert_eq!(action.name, "FireEmergency");
        assert_eq!(action.priority, 10);
    }

    #[test]
    fn test_empty_table_falls_back_to_no_action() {
        let resolver = ActionResolver::new(RuleTable::new(Vec::new()));
        let action = resolver.resolve(SmokeCategory::Low, ZoneCategory::Safe);
        assert_eq!(action, Action::no_action());
        assert_eq!(action.priority, 0);
    }

    #[test]
    fn test_equal_priority_tie_goes_to_first_inserted() {
        let table = RuleTable::new(vec![
            Rule::new(SmokeCategory::Low, ZoneCategory::Safe, "FirstIn", "first", 5, EffectClass::Moderate),
            Rule::new(SmokeCategory::Low, ZoneCategory::Safe, "SecondIn", "second", 5, EffectClass::Moderate),
        ]);
        let action = ActionResolver::new(table).resolve(SmokeCategory::Low, ZoneCategory::Safe);
        assert_eq!(action.name, "FirstIn");
    }

    #[test]
    fn test_validate_rejects_empty_table() {
        assert!(matches!(
            RuleTable::new(Vec::new()).validate(),
            Err(RuleTableError::Empty)
        ));
    }

    #[test]
    fn test_validate_rejects_missing_pair() {
        let table = RuleTable::new(vec![Rule::new(
            SmokeCategory::None,
            ZoneCategory::Safe,
            "Monitor",
            "watch",
            1,
            EffectClass::Monitor,
        )]);
        assert!(matches!(
            table.validate(),
            Err(RuleTableError::MissingPair { .. })
        ));
    }
}
