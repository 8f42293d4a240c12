//! AttackContext - Everything the weak point pipeline knows about one attack

use super::AttackType;
use crate::creature::Creature;
use crate::family::FamilySet;
use crate::types::Weapon;
use std::fmt;

/// Descriptor of a single attack, built by the caller right before selection
///
/// The context borrows everything and owns nothing. `target` is required;
/// `source` is absent for environmental damage.
#[derive(Clone, Copy)]
pub struct AttackContext<'a> {
    pub source: Option<&'a dyn Creature>,
    pub target: &'a dyn Creature,
    pub weapon: Option<&'a Weapon>,
    pub attack_type: AttackType,
    pub is_thrown: bool,
    pub is_crit: bool,
    /// Attacker's skill at hitting weak points, set by `compute_skill`
    pub skill: f64,
}

impl<'a> AttackContext<'a> {
    /// Create a context for an attack on `target` with no attacker
    pub fn new(target: &'a dyn Creature, attack_type: AttackType) -> Self {
        AttackContext {
            source: None,
            target,
            weapon: None,
            attack_type,
            is_thrown: false,
            is_crit: false,
            skill: 0.0,
        }
    }

    pub fn with_source(mut self, source: &'a dyn Creature) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_weapon(mut self, weapon: &'a Weapon) -> Self {
        self.weapon = Some(weapon);
        self
    }

    pub fn thrown(mut self) -> Self {
        self.is_thrown = true;
        self
    }

    pub fn crit(mut self, is_crit: bool) -> Self {
        self.is_crit = is_crit;
        self
    }

    /// Set the skill directly, bypassing `compute_skill`
    pub fn with_skill(mut self, skill: f64) -> Self {
        self.skill = skill;
        self
    }

    /// Compute and cache the attacker's weak point skill
    ///
    /// The attacker's base skill plus the proficiency modifier of `families`.
    /// Attacks without a source have no skill.
    pub fn compute_skill(&mut self, families: &FamilySet) {
        self.skill = match self.source {
            None => 0.0,
            Some(source) => {
                let base = source.weakpoint_skill(self.attack_type, self.is_thrown, self.weapon);
                base + families.modifier(source)
            }
        };
    }
}

impl fmt::Debug for AttackContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttackContext")
            .field("has_source", &self.source.is_some())
            .field("weapon", &self.weapon.map(|w| w.id.as_str()))
            .field("attack_type", &self.attack_type)
            .field("is_thrown", &self.is_thrown)
            .field("is_crit", &self.is_crit)
            .field("skill", &self.skill)
            .finish()
    }
}
