//! DifficultyTable - One scalar per attack type
//!
//! Used both to scale weak point coverage and as the skill gate.

use crate::attack::{AttackContext, AttackType};
use std::collections::HashMap;

/// Fixed table of values indexed by `AttackType`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyTable {
    values: [f64; AttackType::COUNT],
}

impl DifficultyTable {
    /// Create a table with every slot set to `default_value`
    pub fn new(default_value: f64) -> Self {
        DifficultyTable {
            values: [default_value; AttackType::COUNT],
        }
    }

    /// Value for the attack's type
    pub fn of(&self, attack: &AttackContext<'_>) -> f64 {
        self.get(attack.attack_type)
    }

    pub fn get(&self, attack_type: AttackType) -> f64 {
        self.values[attack_type.index()]
    }

    pub fn set(&mut self, attack_type: AttackType, value: f64) {
        self.values[attack_type.index()] = value;
    }

    /// Overwrite slots from a config table
    ///
    /// `all` applies first, then `melee`, then individual attack types, so the
    /// most specific key wins. `ranged` is an alias of `projectile`; when both
    /// are present `projectile` is used. Unknown keys are skipped.
    pub fn load(&mut self, table: &HashMap<String, f64>) {
        if let Some(&value) = table.get("all") {
            self.values = [value; AttackType::COUNT];
        }
        if let Some(&value) = table.get("melee") {
            for attack_type in AttackType::melee() {
                self.set(*attack_type, value);
            }
        }
        for (key, &value) in table {
            if key == "all" || key == "melee" {
                continue;
            }
            // "projectile" is the canonical name and beats its alias
            if key == "ranged" && table.contains_key("projectile") {
                tracing::warn!("both 'ranged' and 'projectile' set; using 'projectile'");
                continue;
            }
            match AttackType::from_key(key) {
                Some(attack_type) => self.set(attack_type, value),
                None => tracing::debug!("ignoring unknown attack type key '{}'", key),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::CreatureState;

    fn table(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_default_fills_every_slot() {
        let difficulty = DifficultyTable::new(-100.0);
        for attack_type in AttackType::all() {
            assert!((difficulty.get(*attack_type) + 100.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_of_reads_attack_type() {
        let mut difficulty = DifficultyTable::new(1.0);
        difficulty.load(&table(&[("stab", 4.0)]));

        let target = CreatureState::new("zombie", 100.0);
        let stab = AttackContext::new(&target, AttackType::MeleeStab);
        let cut = AttackContext::new(&target, AttackType::MeleeCut);
        assert!((difficulty.of(&stab) - 4.0).abs() < f64::EPSILON);
        assert!((difficulty.of(&cut) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_specific_keys_override_groups() {
        let mut difficulty = DifficultyTable::new(0.0);
        difficulty.load(&table(&[("bash", 9.0), ("all", 2.0), ("melee", 5.0)]));

        assert!((difficulty.get(AttackType::None) - 2.0).abs() < f64::EPSILON);
        assert!((difficulty.get(AttackType::Projectile) - 2.0).abs() < f64::EPSILON);
        assert!((difficulty.get(AttackType::MeleeCut) - 5.0).abs() < f64::EPSILON);
        assert!((difficulty.get(AttackType::MeleeBash) - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut difficulty = DifficultyTable::new(3.0);
        difficulty.load(&table(&[("psionic", 50.0), ("ranged", 7.0)]));

        assert!((difficulty.get(AttackType::Projectile) - 7.0).abs() < f64::EPSILON);
        for attack_type in AttackType::all().iter().filter(|t| **t != AttackType::Projectile) {
            assert!((difficulty.get(*attack_type) - 3.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_projectile_beats_ranged_alias() {
        for _ in 0..20 {
            let mut difficulty = DifficultyTable::new(0.0);
            difficulty.load(&table(&[("ranged", 7.0), ("projectile", 4.0)]));
            assert!((difficulty.get(AttackType::Projectile) - 4.0).abs() < f64::EPSILON);
        }
    }
}
