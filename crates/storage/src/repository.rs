//! Rule file loading

use std::fs;
use std::path::PathBuf;

use fuzzifier::{SmokeCategory, ZoneCategory};
use rule_engine::{EffectClass, Rule, RuleTable};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::StorageError;

/// Wire form of one rule in the JSON rule file.
///
/// `effect` may be omitted; a missing tag is derived from the action name
/// with the legacy keyword rules, so rule files keyed purely by name keep
/// working.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSpec {
    pub smoke: SmokeCategory,
    pub zone: ZoneCategory,
    pub action_name: String,
    pub description: String,
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<EffectClass>,
}

impl RuleSpec {
    fn into_rule(self) -> Rule {
        let effect = self
            .effect
            .unwrap_or_else(|| EffectClass::from_action_name(&self.action_name));
        Rule {
            smoke: self.smoke,
            zone: self.zone,
            action_name: self.action_name,
            description: self.description,
            priority: self.priority,
            effect,
        }
    }

    fn from_rule(rule: &Rule) -> Self {
        Self {
            smoke: rule.smoke,
            zone: rule.zone,
            action_name: rule.action_name.clone(),
            description: rule.description.clone(),
            priority: rule.priority,
            effect: Some(rule.effect),
        }
    }
}

/// Loads and validates the rule table from a JSON file.
pub struct RuleRepository {
    path: PathBuf,
}

impl RuleRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the rule table, writing the built-in set to the file first
    /// when it does not exist yet.
    pub fn load_or_init(&self) -> Result<RuleTable, StorageError> {
        if !self.path.exists() {
            self.write_builtin()?;
        }
        self.load()
    }

    /// Load and validate the rule table from the file.
    pub fn load(&self) -> Result<RuleTable, StorageError> {
        let path = self.path.display().to_string();
        let raw = fs::read_to_string(&self.path).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        let specs: Vec<RuleSpec> =
            serde_json::from_str(&raw).map_err(|source| StorageError::Parse {
                path: path.clone(),
                source,
            })?;

        let table = RuleTable::new(specs.into_iter().map(RuleSpec::into_rule).collect());
        table.validate()?;

        info!(path = %path, rules = table.len(), "rule table loaded");
        Ok(table)
    }

    fn write_builtin(&self) -> Result<(), StorageError> {
        let specs: Vec<RuleSpec> = RuleTable::builtin()
            .rules()
            .iter()
            .map(RuleSpec::from_rule)
            .collect();
        let json = serde_json::to_string_pretty(&specs)?;
        fs::write(&self.path, json).map_err(|source| StorageError::Init {
            path: self.path.display().to_string(),
            source,
        })?;

        info!(path = %self.path.display(), "rule file missing, wrote built-in rule set");
        Ok(())
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fire_rules_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_is_populated_with_builtin_set() {
        let path = temp_path("populate");
        let _ = fs::remove_file(&path);

        let table = RuleRepository::new(&path).load_or_init().unwrap();
        assert_eq!(table.len(), 12);
        assert!(path.exists(), "rule file should have been written");

        // A second load reads the file it just wrote.
        let reloaded = RuleRepository::new(&path).load().unwrap();
        assert_eq!(reloaded.len(), 12);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_is_fatal() {
        let path = temp_path("corrupt");
        fs::write(&path, "this is not json").unwrap();

        let err = RuleRepository::new(&path).load_or_init().unwrap_err();
        assert!(matches!(err, StorageError::Parse { .. }));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_incomplete_table_is_fatal() {
        let path = temp_path("incomplete");
        let specs = vec![RuleSpec {
            smoke: SmokeCategory::None,
            zone: ZoneCategory::Safe,
            action_name: "Monitor".to_string(),
            description: "watch".to_string(),
            priority: 1,
            effect: None,
        }];
        fs::write(&path, serde_json::to_string(&specs).unwrap()).unwrap();

        let err = RuleRepository::new(&path).load_or_init().unwrap_err();
        assert!(matches!(err, StorageError::InvalidTable(_)));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_effect_tag_is_derived_from_name() {
        let raw = r#"[
            {"smoke": "High", "zone": "Safe", "action_name": "EvacuateAndVentilate",
             "description": "clear the floor", "priority": 5}
        ]"#;
        let specs: Vec<RuleSpec> = serde_json::from_str(raw).unwrap();
        let rule = specs.into_iter().next().unwrap().into_rule();
        assert_eq!(rule.effect, EffectClass::Evacuate);
    }

    #[test]
    fn test_explicit_effect_tag_wins_over_name() {
        let path = temp_path("explicit");
        let mut specs: Vec<RuleSpec> = RuleTable::builtin()
            .rules()
            .iter()
            .map(RuleSpec::from_rule)
            .collect();
        // Retag the (Low, Safe) Alert rule against its name.
        for spec in &mut specs {
            if spec.action_name == "Alert" {
                spec.effect = Some(EffectClass::Suppress);
            }
        }
        fs::write(&path, serde_json::to_string(&specs).unwrap()).unwrap();

        let table = RuleRepository::new(&path).load().unwrap();
        let alert = table
            .rules()
            .iter()
            .find(|r| r.action_name == "Alert")
            .unwrap();
        assert_eq!(alert.effect, EffectClass::Suppress);

        let _ = fs::remove_file(&path);
    }
}
