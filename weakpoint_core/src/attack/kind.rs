//! AttackType - Coarse category of an attack

use crate::damage::DamageInstance;
use crate::types::DamageType;
use serde::{Deserialize, Serialize};

/// How an attack was delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackType {
    /// Unusual damage such as falls, spells and effects
    #[default]
    None,
    MeleeBash,
    MeleeCut,
    MeleeStab,
    /// Ranged projectiles, including thrown weapons and guns
    Projectile,
}

impl AttackType {
    /// Number of attack types; the length of every difficulty table
    pub const COUNT: usize = 5;

    /// Get all attack types in ordinal order
    pub fn all() -> &'static [AttackType] {
        &[
            AttackType::None,
            AttackType::MeleeBash,
            AttackType::MeleeCut,
            AttackType::MeleeStab,
            AttackType::Projectile,
        ]
    }

    /// Melee attack types, addressed together by the `melee` config key
    pub fn melee() -> &'static [AttackType] {
        &[AttackType::MeleeBash, AttackType::MeleeCut, AttackType::MeleeStab]
    }

    /// Array index of this attack type
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up an attack type by config key
    pub fn from_key(key: &str) -> Option<AttackType> {
        match key {
            "none" => Some(AttackType::None),
            "bash" => Some(AttackType::MeleeBash),
            "cut" => Some(AttackType::MeleeCut),
            "stab" => Some(AttackType::MeleeStab),
            "ranged" | "projectile" => Some(AttackType::Projectile),
            _ => None,
        }
    }

    /// Classify a melee attack by its dominant physical damage
    ///
    /// Sums bash, cut and stab damage separately and returns the largest.
    /// Exact ties go to bash, then cut, then stab. Damage with no positive
    /// bash, cut or stab component is `None`.
    pub fn of_melee_damage(damage: &DamageInstance) -> AttackType {
        let mut bash = 0.0;
        let mut cut = 0.0;
        let mut stab = 0.0;
        for unit in &damage.units {
            match unit.damage_type {
                DamageType::Bash => bash += unit.amount,
                DamageType::Cut => cut += unit.amount,
                DamageType::Stab => stab += unit.amount,
                _ => {}
            }
        }

        let mut best = AttackType::None;
        let mut best_amount = 0.0;
        for (attack_type, amount) in [
            (AttackType::MeleeBash, bash),
            (AttackType::MeleeCut, cut),
            (AttackType::MeleeStab, stab),
        ] {
            if amount > best_amount {
                best = attack_type;
                best_amount = amount;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_type_wins() {
        let mut damage = DamageInstance::single(DamageType::Cut, 10.0);
        damage.add_damage(DamageType::Bash, 4.0);
        damage.add_damage(DamageType::Stab, 6.0);
        assert_eq!(AttackType::of_melee_damage(&damage), AttackType::MeleeCut);
    }

    #[test]
    fn test_ties_prefer_bash_then_cut() {
        let mut damage = DamageInstance::single(DamageType::Stab, 5.0);
        damage.add_damage(DamageType::Cut, 5.0);
        assert_eq!(AttackType::of_melee_damage(&damage), AttackType::MeleeCut);

        damage.add_damage(DamageType::Bash, 5.0);
        assert_eq!(AttackType::of_melee_damage(&damage), AttackType::MeleeBash);
    }

    #[test]
    fn test_non_melee_damage_is_none() {
        let damage = DamageInstance::single(DamageType::Heat, 30.0);
        assert_eq!(AttackType::of_melee_damage(&damage), AttackType::None);
        assert_eq!(AttackType::of_melee_damage(&DamageInstance::new()), AttackType::None);
    }

    #[test]
    fn test_classifier_sums_repeated_units() {
        let damage = DamageInstance {
            units: vec![
                crate::damage::DamageUnit::new(DamageType::Stab, 4.0),
                crate::damage::DamageUnit::new(DamageType::Bash, 6.0),
                crate::damage::DamageUnit::new(DamageType::Stab, 4.0),
            ],
        };
        assert_eq!(AttackType::of_melee_damage(&damage), AttackType::MeleeStab);
    }

    #[test]
    fn test_keys() {
        assert_eq!(AttackType::from_key("ranged"), Some(AttackType::Projectile));
        assert_eq!(AttackType::from_key("projectile"), Some(AttackType::Projectile));
        assert_eq!(AttackType::from_key("psionic"), None);
        assert_eq!(AttackType::all().len(), AttackType::COUNT);
    }
}
