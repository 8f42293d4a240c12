//! Weak point and proficiency family definitions as authored in config

use crate::effect::WeakPointEffect;
use crate::types::{DamageArray, DamageType, EffectId, ProficiencyId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A weak point as written in config
///
/// Per-damage-type tables are keyed by damage type (`bash`, `heat`, ...),
/// `physical` (bash, cut, stab, bullet) or `all`. Attack type tables use the
/// keys understood by `DifficultyTable::load`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeakPointDef {
    /// Defaults to `name`
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_coverage")]
    pub coverage: f64,
    #[serde(default)]
    pub armor_mult: HashMap<String, f64>,
    #[serde(default)]
    pub armor_penalty: HashMap<String, f64>,
    #[serde(default)]
    pub damage_mult: HashMap<String, f64>,
    #[serde(default)]
    pub crit_mult: HashMap<String, f64>,
    #[serde(default)]
    pub required_effects: Vec<EffectId>,
    #[serde(default)]
    pub effects: Vec<WeakPointEffect>,
    #[serde(default)]
    pub coverage_mult: HashMap<String, f64>,
    #[serde(default)]
    pub difficulty: HashMap<String, f64>,
}

fn default_coverage() -> f64 {
    100.0
}

impl WeakPointDef {
    /// Minimal definition with only an id
    pub fn new(id: impl Into<String>) -> Self {
        WeakPointDef {
            id: Some(id.into()),
            name: String::new(),
            coverage: default_coverage(),
            armor_mult: HashMap::new(),
            armor_penalty: HashMap::new(),
            damage_mult: HashMap::new(),
            crit_mult: HashMap::new(),
            required_effects: Vec::new(),
            effects: Vec::new(),
            coverage_mult: HashMap::new(),
            difficulty: HashMap::new(),
        }
    }

    /// Resolved id: the configured id, or the name
    pub fn resolved_id(&self) -> String {
        self.id.clone().unwrap_or_else(|| self.name.clone())
    }
}

/// A proficiency family as written in config
///
/// Either a table or a bare proficiency id, which gives a family with no
/// bonus or penalty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FamilyEntry")]
pub struct FamilyDef {
    /// Defaults to the proficiency id
    pub id: Option<String>,
    pub proficiency: ProficiencyId,
    pub bonus: Option<f64>,
    pub penalty: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FamilyEntry {
    Proficiency(ProficiencyId),
    Table {
        id: Option<String>,
        proficiency: ProficiencyId,
        bonus: Option<f64>,
        penalty: Option<f64>,
    },
}

impl From<FamilyEntry> for FamilyDef {
    fn from(entry: FamilyEntry) -> Self {
        match entry {
            FamilyEntry::Proficiency(proficiency) => FamilyDef {
                id: None,
                proficiency,
                bonus: None,
                penalty: None,
            },
            FamilyEntry::Table {
                id,
                proficiency,
                bonus,
                penalty,
            } => FamilyDef {
                id,
                proficiency,
                bonus,
                penalty,
            },
        }
    }
}

/// Build a per-damage-type array from a config table
///
/// `all` applies first, then `physical`, then individual damage types.
/// Unknown keys are skipped with a warning.
pub fn damage_array(table: &HashMap<String, f64>, default_value: f64, field: &str) -> DamageArray {
    let mut values = [default_value; DamageType::COUNT];
    if let Some(&value) = table.get("all") {
        values = [value; DamageType::COUNT];
    }
    if let Some(&value) = table.get("physical") {
        for damage_type in DamageType::physical() {
            values[damage_type.index()] = value;
        }
    }
    for (key, &value) in table {
        if key == "all" || key == "physical" {
            continue;
        }
        match DamageType::from_key(key) {
            Some(damage_type) => values[damage_type.index()] = value,
            None => tracing::warn!("{}: skipping unknown damage type '{}'", field, key),
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weakpoint_defaults() {
        let def: WeakPointDef = toml::from_str(r#"name = "eye""#).unwrap();
        assert_eq!(def.resolved_id(), "eye");
        assert!((def.coverage - 100.0).abs() < f64::EPSILON);
        assert!(def.armor_mult.is_empty());
        assert!(def.effects.is_empty());
    }

    #[test]
    fn test_parse_weakpoint_full() {
        let toml = r#"
id = "knee"
name = "the knee"
coverage = 10
required_effects = ["downed"]

[armor_mult]
physical = 0.5
bullet = 0.75

[difficulty]
melee = 3
ranged = 6

[[effects]]
effect = "staggered"
chance = 25
duration = [1, 3]
damage_required = [0.1, 1.0]
message = "You hit the knee!"
"#;

        let def: WeakPointDef = toml::from_str(toml).unwrap();
        assert_eq!(def.resolved_id(), "knee");
        assert_eq!(def.required_effects, vec![EffectId::from("downed")]);
        assert_eq!(def.effects.len(), 1);
        assert!((def.effects[0].chance - 25.0).abs() < f64::EPSILON);
        assert!((def.difficulty["ranged"] - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_damage_array_precedence() {
        let table: HashMap<String, f64> = [
            ("all".to_string(), 0.9),
            ("physical".to_string(), 0.5),
            ("bullet".to_string(), 0.75),
            ("sonic".to_string(), 3.0),
        ]
        .into_iter()
        .collect();

        let values = damage_array(&table, 1.0, "armor_mult");
        assert!((values[DamageType::Heat.index()] - 0.9).abs() < f64::EPSILON);
        assert!((values[DamageType::Cut.index()] - 0.5).abs() < f64::EPSILON);
        assert!((values[DamageType::Bullet.index()] - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_damage_array_default() {
        let values = damage_array(&HashMap::new(), 1.0, "damage_mult");
        assert!(values.iter().all(|v| (*v - 1.0).abs() < f64::EPSILON));
    }

    #[test]
    fn test_family_def_optional_fields() {
        let def: FamilyDef = toml::from_str(r#"proficiency = "prof_wp_zombie""#).unwrap();
        assert_eq!(def.id, None);
        assert_eq!(def.bonus, None);
        assert_eq!(def.penalty, None);
    }

    #[test]
    fn test_family_def_from_bare_proficiency() {
        #[derive(Deserialize)]
        struct Holder {
            families: Vec<FamilyDef>,
        }

        let holder: Holder = toml::from_str(
            r#"
families = [
    "prof_wp_zombie",
    { proficiency = "prof_wp_basic", bonus = 1.5 },
]
"#,
        )
        .unwrap();

        assert_eq!(holder.families.len(), 2);
        assert_eq!(holder.families[0].proficiency, ProficiencyId::from("prof_wp_zombie"));
        assert_eq!(holder.families[0].bonus, None);
        assert_eq!(holder.families[1].bonus, Some(1.5));
    }
}
